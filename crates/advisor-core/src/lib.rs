//! Core abstractions for advisor-rs
//!
//! Defines the `Agent` trait implemented by anything that can turn a
//! natural-language request into an answer, the `Context` passed along
//! during execution, and the shared error type.

pub mod agent;
pub mod context;
pub mod error;

pub use agent::Agent;
pub use context::Context;
pub use error::{Error, Result};
