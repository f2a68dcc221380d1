//! Conversation transcript buffer
//!
//! A `Transcript` records every turn of one reasoning session: the opening
//! instruction, assistant replies, tool-use requests, and tool results. It
//! is append-only, keyed by a generated conversation id, owned by exactly
//! one in-flight session, and discarded when the run ends. A new run gets a
//! new transcript; nothing carries over.

use advisor_llm::Message;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Append-only message buffer for one reasoning session
#[derive(Debug, Clone)]
pub struct Transcript {
    conversation_id: Uuid,
    messages: Vec<Message>,
    created_at: DateTime<Utc>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Create a fresh transcript with a new conversation id
    pub fn new() -> Self {
        Self {
            conversation_id: Uuid::new_v4(),
            messages: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// The id of the conversation this transcript belongs to
    pub fn conversation_id(&self) -> Uuid {
        self.conversation_id
    }

    /// When the transcript was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append a message to the transcript
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages in order of arrival
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of recorded messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check whether the transcript is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
