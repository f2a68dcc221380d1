//! Message types for LLM communication
//!
//! A conversation is a sequence of `Message` values. Plain text turns use
//! `MessageContent::Text`; tool interaction uses structured blocks: the
//! assistant emits `ToolUse` requests, and the caller answers each one with
//! a `ToolResult` block on a user-role message.

use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human or orchestrator driving the conversation
    User,
    /// The model
    Assistant,
    /// System instructions (some providers carry these out-of-band)
    System,
}

/// One structured piece of message content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text
    Text {
        /// The text itself
        text: String,
    },

    /// The assistant asking for a tool to be executed
    ToolUse {
        /// Provider-assigned id, echoed back with the result
        id: String,
        /// Name of the requested tool
        name: String,
        /// Tool arguments; a raw string here means the provider emitted
        /// arguments that did not parse as JSON
        input: serde_json::Value,
    },

    /// The answer to one earlier `ToolUse` request
    ToolResult {
        /// Id of the tool use being answered
        tool_use_id: String,
        /// Tool output, or an error description
        content: String,
        /// Set when the content describes a failure
        #[serde(skip_serializing_if = "Option::is_none")]
        is_error: Option<bool>,
    },
}

/// Message body: bare text or a list of blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Bare text
    Text(String),
    /// Structured blocks
    Blocks(Vec<ContentBlock>),
}

/// One turn in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Author of the turn
    pub role: Role,

    /// Body; absent for e.g. an assistant turn that is pure tool use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<MessageContent>,
}

impl Message {
    /// A text turn from the user
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(MessageContent::Text(text.into())),
        }
    }

    /// A text turn from the assistant
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: Some(MessageContent::Text(text.into())),
        }
    }

    /// A user turn answering one tool use with a successful result
    pub fn tool_result(tool_use_id: String, result: String) -> Self {
        Self::tool_reply(tool_use_id, result, None)
    }

    /// A user turn answering one tool use with an error
    ///
    /// This is how in-loop problems (unknown tools, bad arguments, tool
    /// failures) are handed back to the model for another attempt.
    pub fn tool_error(tool_use_id: String, error: String) -> Self {
        Self::tool_reply(tool_use_id, error, Some(true))
    }

    fn tool_reply(tool_use_id: String, content: String, is_error: Option<bool>) -> Self {
        Self {
            role: Role::User,
            content: Some(MessageContent::Blocks(vec![ContentBlock::ToolResult {
                tool_use_id,
                content,
                is_error,
            }])),
        }
    }

    /// The first text in this message, if any
    pub fn text(&self) -> Option<&str> {
        match self.content.as_ref()? {
            MessageContent::Text(s) => Some(s),
            MessageContent::Blocks(blocks) => blocks.iter().find_map(|block| {
                if let ContentBlock::Text { text } = block {
                    Some(text.as_str())
                } else {
                    None
                }
            }),
        }
    }

    /// All tool-use blocks in this message, in order
    pub fn tool_uses(&self) -> Vec<&ContentBlock> {
        match &self.content {
            Some(MessageContent::Blocks(blocks)) => blocks
                .iter()
                .filter(|block| matches!(block, ContentBlock::ToolUse { .. }))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Whether this message asks for any tool execution
    pub fn has_tool_uses(&self) -> bool {
        !self.tool_uses().is_empty()
    }
}
