//! Reasoning runtime for advisor-rs
//!
//! Provides the `Transcript` conversation buffer and the `AgentExecutor`
//! that drives the tool-use loop: call the LLM, execute requested tools,
//! feed results back, repeat until the model emits a final answer.

pub mod executor;
pub mod transcript;

pub use executor::{AgentExecutor, AgentExecutorBuilder, ExecutorConfig};
pub use transcript::Transcript;
