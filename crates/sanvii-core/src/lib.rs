//! Shared types, errors, and configuration for the Sanvii assistant.
//!
//! Sanvii is a conversational widget engine: it classifies user utterances
//! against an ordered intent-rule table and produces a reply plus an
//! optional follow-up action. This crate holds the value objects and
//! cross-cutting concerns that every other Sanvii crate depends on.

pub mod config;
pub mod error;
pub mod types;

pub use config::{GeneralConfig, SanviiConfig, VoiceConfig, WidgetConfig};
pub use error::{Result, SanviiError};
pub use types::{Action, Context, Message, Response, Sender};
