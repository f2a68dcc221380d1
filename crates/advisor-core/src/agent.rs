//! Core Agent trait definition

use crate::{Context, Result};
use async_trait::async_trait;

/// Trait implemented by every agent in the workspace
///
/// Input and output are plain strings so that concrete implementations keep
/// full control over how requests are phrased and how answers are formatted.
/// LLM-specific message types live in the advisor-llm crate.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Process input and return the agent's answer
    async fn process(&self, input: String, context: &mut Context) -> Result<String>;

    /// Get the agent's name
    fn name(&self) -> &str;
}
