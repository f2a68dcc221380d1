//! Tool framework for advisor-rs
//!
//! A `Tool` is a named, described unit of capability an LLM agent may choose
//! to invoke. The `ToolRegistry` holds the capability set offered to one
//! reasoning session.

pub mod registry;
pub mod tool;

pub use registry::ToolRegistry;
pub use tool::Tool;
