//! Interactive shell state machine
//!
//! Models the user-facing session independently of any particular frontend:
//! which inputs have been provided, whether a run may start, and what to
//! show once a run finishes. Validation is a pure function over the inputs
//! so frontends can render field-level feedback however they like.

pub mod session;
pub mod state;

pub use session::AnalysisSession;
pub use state::{InputField, ReadyCheck, SessionInputs, ShellState, check_inputs};

/// Advisory notice shown alongside every analysis
pub const DISCLAIMER: &str = "This analysis is generated by a language model and is for \
reference only. It is not investment advice. Consult a qualified professional before \
making investment decisions.";
