//! Stock advisor agent
//!
//! Fetches public equity fundamentals and price history from Alpha Vantage,
//! hands them to a tool-using LLM agent, and produces a natural-language
//! buy/don't-buy verdict. The crate provides:
//!
//! - An Alpha Vantage client for company overview, income statement, and
//!   weekly price data, with payload truncation to keep responses within
//!   what the model can usefully read
//! - The three capability tools the reasoning agent may invoke
//! - A session/state machine for the interactive shell, with pure input
//!   validation decoupled from rendering
//! - The `StockAdvisor` orchestrator tying provider, tools, and the
//!   reasoning loop together
//!
//! # Example
//!
//! ```rust,ignore
//! use advisor_stock::{AdvisorConfig, StockAdvisor};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AdvisorConfig::builder()
//!         .openai_api_key("sk-...")
//!         .alpha_vantage_api_key("AV-...")
//!         .build()?;
//!
//!     let advisor = StockAdvisor::new(config)?;
//!     let verdict = advisor.analyze("TSLA").await?;
//!     println!("{verdict}");
//!     Ok(())
//! }
//! ```

pub mod advisor;
pub mod api;
pub mod config;
pub mod error;
pub mod prompts;
pub mod shell;
pub mod tools;

// Re-export main types for convenience
pub use advisor::StockAdvisor;
pub use config::AdvisorConfig;
pub use error::{Result, StockError};
pub use shell::{AnalysisSession, InputField, ReadyCheck, SessionInputs, ShellState, check_inputs};
pub use tools::{CompanyOverviewTool, IncomeStatementTool, StockPerformanceTool};
