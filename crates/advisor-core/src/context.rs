//! Execution context for agents
//!
//! A `Context` carries per-run settings that are not part of the request
//! text itself, such as the language the answer should be written in. It is
//! a small untyped key-value store with typed accessors for the keys the
//! workspace actually uses.

use std::collections::HashMap;

/// Well-known context keys
pub mod keys {
    /// Language for the answer (e.g. "en", "ko")
    pub const LANGUAGE: &str = "language";
    /// Identifier of the interactive session driving this run
    pub const SESSION_ID: &str = "session_id";
}

/// Per-run settings handed to an agent alongside its input
#[derive(Debug, Clone, Default)]
pub struct Context {
    entries: HashMap<String, serde_json::Value>,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style language setter
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.insert(keys::LANGUAGE, serde_json::Value::String(language.into()));
        self
    }

    /// Builder-style session-id setter
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.insert(
            keys::SESSION_ID,
            serde_json::Value::String(session_id.into()),
        );
        self
    }

    /// The answer language, if one was requested
    pub fn language(&self) -> Option<&str> {
        self.get(keys::LANGUAGE).and_then(serde_json::Value::as_str)
    }

    /// The driving session's id, if one was recorded
    pub fn session_id(&self) -> Option<&str> {
        self.get(keys::SESSION_ID)
            .and_then(serde_json::Value::as_str)
    }

    /// Store a value under a key, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.entries.insert(key.into(), value);
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.entries.get(key)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut ctx = Context::new();
        assert!(ctx.is_empty());

        ctx.insert("ticker", serde_json::json!("TSLA"));
        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.get("ticker"), Some(&serde_json::json!("TSLA")));
    }

    #[test]
    fn test_well_known_keys() {
        let ctx = Context::new()
            .with_language("ko")
            .with_session_id("sess-42");

        assert_eq!(ctx.language(), Some("ko"));
        assert_eq!(ctx.session_id(), Some("sess-42"));
    }

    #[test]
    fn test_absent_keys_are_none() {
        let ctx = Context::new();
        assert_eq!(ctx.language(), None);
        assert_eq!(ctx.session_id(), None);
    }
}
