//! Tool trait definition

use advisor_core::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for tools that agents can execute
///
/// Each tool carries a unique name, a natural-language description the LLM
/// uses to decide when to call it, and a JSON Schema describing its input.
/// Tools accept their parameters explicitly; they hold no per-request state.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with the given parameters
    ///
    /// `params` is the JSON input produced by the model and should match
    /// `input_schema`. Implementations return their output as a JSON value;
    /// string payloads are returned as `Value::String`.
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Get the tool's name
    fn name(&self) -> &str;

    /// Get the tool's description
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    fn input_schema(&self) -> Value;
}
