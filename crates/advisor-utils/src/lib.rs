//! Shared utilities for advisor-rs
//!
//! Common functionality used across the advisor-rs workspace: tracing setup
//! and redaction of secret values for log output.

pub mod logging;
pub mod redact;

pub use logging::init_tracing;
pub use redact::redact;
