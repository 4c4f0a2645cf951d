//! Core value objects for the Sanvii assistant.
//!
//! Defines the response record produced by intent classification, the
//! follow-up action attached to it, and the conversation message type
//! used by the widget layer.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Action
// =============================================================================

/// A structured follow-up instruction attached to a reply.
///
/// `OpenUrl` is the only variant currently defined. New kinds can be added
/// without touching the rule-matching logic; only executors need to learn
/// about them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    OpenUrl { url: String, label: String },
}

impl Action {
    /// Convenience constructor for an `open_url` action.
    pub fn open_url(url: impl Into<String>, label: impl Into<String>) -> Self {
        Action::OpenUrl {
            url: url.into(),
            label: label.into(),
        }
    }

    /// The human-readable label shown on the action button.
    pub fn label(&self) -> &str {
        match self {
            Action::OpenUrl { label, .. } => label,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::OpenUrl { url, label } => write!(f, "{} -> {}", label, url),
        }
    }
}

// =============================================================================
// Response
// =============================================================================

/// Output of intent classification: reply text plus an optional action.
///
/// Immutable, one per utterance, at most one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl Response {
    /// A reply with no follow-up action.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: None,
        }
    }

    /// A reply carrying a follow-up action.
    pub fn with_action(text: impl Into<String>, action: Action) -> Self {
        Self {
            text: text.into(),
            action: Some(action),
        }
    }
}

// =============================================================================
// Context
// =============================================================================

/// Session-constant personalization values injected into replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub owner_name: String,
}

impl Context {
    pub fn new(owner_name: impl Into<String>) -> Self {
        Self {
            owner_name: owner_name.into(),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            owner_name: "Boss".to_string(),
        }
    }
}

// =============================================================================
// Messages
// =============================================================================

/// Who produced a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single entry in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    /// Wall-clock time the message was added, formatted `h:mm AM/PM`.
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl Message {
    /// Create a message stamped with the current local time.
    pub fn new(sender: Sender, text: impl Into<String>, action: Option<Action>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            time: clock_time_now(),
            action,
        }
    }
}

/// Current local time formatted as `h:mm AM/PM` (e.g. `3:07 PM`).
pub fn clock_time_now() -> String {
    Local::now().format("%-I:%M %p").to_string()
}

// =============================================================================
// Tests
// =============================================================================
