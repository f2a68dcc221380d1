//! Tool definition types for LLM tool use

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool as advertised to the model
///
/// Pairs the registry name with the natural-language description the model
/// reads when deciding whether to call it, plus the JSON Schema its
/// arguments must satisfy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Name the model uses to call the tool
    pub name: String,

    /// What the tool does, written for the model
    pub description: String,

    /// JSON Schema of the tool's arguments
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Create a new tool definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Small helpers for building argument schemas
pub mod schema {
    use serde_json::{Value, json};

    /// An object schema with the given properties, all listed as required
    pub fn object(properties: Value, required: Vec<&str>) -> Value {
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// A described string property
    pub fn string(description: &str) -> Value {
        json!({
            "type": "string",
            "description": description,
        })
    }
}
