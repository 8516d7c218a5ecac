#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::analysis::script;

/// Append-only message log for the chat page.
///
/// The log lives for exactly one page session: created with the seeded
/// greeting on load, grows monotonically, and is discarded on reload. No
/// message is ever edited or removed.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

/// A single chat message.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub is_user: bool,
    pub timestamp_ms: f64,
}

impl ChatMessage {
    fn new(text: impl Into<String>, is_user: bool, timestamp_ms: f64) -> Self {
        Self {
            id: format!("msg-{}", uuid::Uuid::new_v4()),
            text: text.into(),
            is_user,
            timestamp_ms,
        }
    }
}

impl ChatState {
    /// A fresh log containing only the guide's greeting.
    #[must_use]
    pub fn seeded(now_ms: f64) -> Self {
        Self {
            messages: vec![ChatMessage::new(script::GREETING, false, now_ms)],
        }
    }

    /// Append a message. Ids are generated per message and never reused.
    pub fn push(&mut self, text: impl Into<String>, is_user: bool, now_ms: f64) {
        self.messages.push(ChatMessage::new(text, is_user, now_ms));
    }
}
