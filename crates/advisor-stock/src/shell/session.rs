//! Session lifecycle
//!
//! Tracks one user-facing session across input edits and runs. Transitions:
//!
//! ```text
//! AwaitingInputs --all inputs set--> ReadyToRun --begin_run--> Running
//! Running --complete--> ShowingResult        Running --fail--> ReadyToRun
//! ShowingResult --input edit--> ReadyToRun (or AwaitingInputs)
//! ```
//!
//! `begin_run` re-validates even from `ReadyToRun`, so clearing an input
//! can never race a stale ready state into a run.

use super::state::{InputField, ReadyCheck, SessionInputs, ShellState, check_inputs};

/// One interactive analysis session
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    inputs: SessionInputs,
    state: ShellState,
    result: Option<String>,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSession {
    /// Create a session with no inputs provided yet
    pub fn new() -> Self {
        Self {
            inputs: SessionInputs::default(),
            state: ShellState::AwaitingInputs,
            result: None,
        }
    }

    /// Current state
    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Inputs as currently entered
    pub fn inputs(&self) -> &SessionInputs {
        &self.inputs
    }

    /// The verdict from the last completed run, if one is on display
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Set or replace the ticker symbol
    pub fn set_ticker(&mut self, ticker: impl Into<String>) {
        self.inputs.ticker = ticker.into();
        self.on_input_edit();
    }

    /// Set or replace the market-data provider key
    pub fn set_data_provider_key(&mut self, key: impl Into<String>) {
        self.inputs.data_provider_key = key.into();
        self.on_input_edit();
    }

    /// Set or replace the model provider key
    pub fn set_model_provider_key(&mut self, key: impl Into<String>) {
        self.inputs.model_provider_key = key.into();
        self.on_input_edit();
    }

    /// Try to start a run
    ///
    /// On success the session enters `Running`. If any input is missing the
    /// session stays put and the missing fields are returned for display.
    pub fn begin_run(&mut self) -> Result<(), Vec<InputField>> {
        match check_inputs(&self.inputs) {
            ReadyCheck::Ready => {
                self.result = None;
                self.state = ShellState::Running;
                Ok(())
            }
            ReadyCheck::Missing(fields) => {
                self.state = ShellState::AwaitingInputs;
                Err(fields)
            }
        }
    }

    /// Record a completed verdict and move to `ShowingResult`
    pub fn complete(&mut self, verdict: impl Into<String>) {
        self.result = Some(verdict.into());
        self.state = ShellState::ShowingResult;
    }

    /// Record a failed run; the session returns to `ReadyToRun`
    pub fn fail(&mut self) {
        self.result = None;
        self.state = if check_inputs(&self.inputs) == ReadyCheck::Ready {
            ShellState::ReadyToRun
        } else {
            ShellState::AwaitingInputs
        };
    }

    // Editing an input never interrupts a run in flight; otherwise the
    // session re-derives its state from the inputs and drops any stale
    // result from display.
    fn on_input_edit(&mut self) {
        if self.state == ShellState::Running {
            return;
        }
        self.result = None;
        self.state = if check_inputs(&self.inputs) == ReadyCheck::Ready {
            ShellState::ReadyToRun
        } else {
            ShellState::AwaitingInputs
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_session() -> AnalysisSession {
        let mut session = AnalysisSession::new();
        session.set_ticker("TSLA");
        session.set_data_provider_key("av-key");
        session.set_model_provider_key("sk-key");
        session
    }

    #[test]
    fn test_new_session_awaits_inputs() {
        let session = AnalysisSession::new();
        assert_eq!(session.state(), ShellState::AwaitingInputs);
        assert!(session.result().is_none());
    }

    #[test]
    fn test_filling_all_inputs_becomes_ready() {
        let mut session = AnalysisSession::new();
        session.set_ticker("TSLA");
        assert_eq!(session.state(), ShellState::AwaitingInputs);

        session.set_data_provider_key("av-key");
        assert_eq!(session.state(), ShellState::AwaitingInputs);

        session.set_model_provider_key("sk-key");
        assert_eq!(session.state(), ShellState::ReadyToRun);
    }

    #[test]
    fn test_begin_run_with_missing_input_reports_fields() {
        let mut session = AnalysisSession::new();
        session.set_ticker("TSLA");

        let missing = session.begin_run().unwrap_err();
        assert_eq!(
            missing,
            vec![InputField::DataProviderKey, InputField::ModelProviderKey]
        );
        assert_eq!(session.state(), ShellState::AwaitingInputs);
    }

    #[test]
    fn test_full_run_lifecycle() {
        let mut session = ready_session();
        session.begin_run().unwrap();
        assert_eq!(session.state(), ShellState::Running);

        session.complete("Buy.");
        assert_eq!(session.state(), ShellState::ShowingResult);
        assert_eq!(session.result(), Some("Buy."));
    }

    #[test]
    fn test_failed_run_returns_to_ready() {
        let mut session = ready_session();
        session.begin_run().unwrap();
        session.fail();

        assert_eq!(session.state(), ShellState::ReadyToRun);
        assert!(session.result().is_none());
    }

    #[test]
    fn test_editing_input_after_result_drops_it() {
        let mut session = ready_session();
        session.begin_run().unwrap();
        session.complete("Buy.");

        session.set_ticker("AAPL");
        assert_eq!(session.state(), ShellState::ReadyToRun);
        assert!(session.result().is_none());
    }

    #[test]
    fn test_clearing_input_after_result_awaits_again() {
        let mut session = ready_session();
        session.begin_run().unwrap();
        session.complete("Buy.");

        session.set_ticker("");
        assert_eq!(session.state(), ShellState::AwaitingInputs);
    }

    #[test]
    fn test_clearing_input_blocks_rerun() {
        let mut session = ready_session();
        session.set_model_provider_key("");

        assert_eq!(session.state(), ShellState::AwaitingInputs);
        let missing = session.begin_run().unwrap_err();
        assert_eq!(missing, vec![InputField::ModelProviderKey]);
    }
}
