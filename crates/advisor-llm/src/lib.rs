//! LLM provider abstraction layer for advisor-rs
//!
//! Provider-agnostic types for talking to chat-completion style LLM APIs:
//!
//! - Message types with tool-use content blocks
//! - Completion request/response types
//! - Tool definitions for function calling
//! - The `LLMProvider` trait, plus an OpenAI implementation behind the
//!   `openai` feature

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;
pub mod tools;

// Re-export main types
pub use completion::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use error::{LLMError, Result};
pub use messages::{ContentBlock, Message, MessageContent, Role};
pub use provider::LLMProvider;
pub use tools::ToolDefinition;

// Provider implementations (feature-gated)
#[cfg(feature = "openai")]
pub mod providers;
