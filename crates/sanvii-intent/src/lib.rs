//! Intent classification and response generation for Sanvii.
//!
//! The core of the assistant: an ordered table of intent rules evaluated
//! top-to-bottom against a normalized utterance, stopping at the first
//! match. Each rule pairs a predicate with a response generator producing
//! a reply plus an optional follow-up action. The table is built once and
//! immutable thereafter; classification is a pure function of the
//! utterance, the session context, and an injectable random source.

pub mod calc;
pub mod responder;
pub mod rng;

mod patterns;
mod replies;
mod rules;

pub use calc::CalcError;
pub use responder::IntentResponder;
pub use rng::{RandomSource, SequenceRandom, ThreadRandom};
pub use rules::Utterance;
