//! Sanvii Widget crate - conversation state, greeting, action execution,
//! and turn orchestration.
//!
//! Sits between the intent engine and the outer surface: holds the message
//! history and widget phase, sequences one conversational turn at a time,
//! and drives the voice and action collaborators.

pub mod conversation;
pub mod executor;
pub mod greeting;
pub mod orchestrator;
pub mod state;

pub use conversation::Conversation;
pub use executor::{ActionExecutor, LoggingExecutor, RecordingExecutor};
pub use greeting::{load_greeting, time_of_day_greeting};
pub use orchestrator::WidgetOrchestrator;
pub use state::{WidgetPhase, WidgetState};
