//! In-memory conversation history.
//!
//! History lives for the session only; there is no persistence across
//! restarts.

use sanvii_core::{Action, Context, Message, Sender};

/// Ordered message history for one widget session.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped with the current local time.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>, action: Option<Action>) {
        self.messages.push(Message::new(sender, text, action));
    }

    /// Drop the history and confirm with a fresh assistant message.
    ///
    /// Returns the confirmation text so the caller can speak it.
    pub fn clear(&mut self, ctx: &Context) -> String {
        self.messages.clear();
        let reply = format!("Chat cleared! How can I help, {}?", ctx.owner_name);
        self.push(Sender::Assistant, reply.clone(), None);
        reply
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
