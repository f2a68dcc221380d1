//! Session states and pure input validation

/// The four states an interactive session moves through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    /// One or more required inputs are missing
    AwaitingInputs,
    /// All inputs present; a run may start
    ReadyToRun,
    /// An analysis is in flight
    Running,
    /// A completed verdict is on display
    ShowingResult,
}

/// The three inputs a session needs before it can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// Stock ticker symbol
    Ticker,
    /// Market-data provider API key
    DataProviderKey,
    /// Model provider API key
    ModelProviderKey,
}

impl InputField {
    /// Human-readable label for error messages and prompts
    pub fn label(self) -> &'static str {
        match self {
            InputField::Ticker => "ticker symbol",
            InputField::DataProviderKey => "Alpha Vantage API key",
            InputField::ModelProviderKey => "OpenAI API key",
        }
    }
}

/// Raw user-provided inputs for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInputs {
    /// Stock ticker symbol to analyze
    pub ticker: String,
    /// Market-data provider API key
    pub data_provider_key: String,
    /// Model provider API key
    pub model_provider_key: String,
}

/// Outcome of validating session inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadyCheck {
    /// Every required input is present
    Ready,
    /// These fields are still empty, in display order
    Missing(Vec<InputField>),
}

/// Validate session inputs without touching any network or UI state
///
/// An input counts as provided when it is non-empty. Returns every missing
/// field, not just the first, so a frontend can flag them all at once.
pub fn check_inputs(inputs: &SessionInputs) -> ReadyCheck {
    let mut missing = Vec::new();
    if inputs.ticker.is_empty() {
        missing.push(InputField::Ticker);
    }
    if inputs.data_provider_key.is_empty() {
        missing.push(InputField::DataProviderKey);
    }
    if inputs.model_provider_key.is_empty() {
        missing.push(InputField::ModelProviderKey);
    }

    if missing.is_empty() {
        ReadyCheck::Ready
    } else {
        ReadyCheck::Missing(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_inputs() -> SessionInputs {
        SessionInputs {
            ticker: "TSLA".to_string(),
            data_provider_key: "av-key".to_string(),
            model_provider_key: "sk-key".to_string(),
        }
    }

    #[test]
    fn test_complete_inputs_are_ready() {
        assert_eq!(check_inputs(&complete_inputs()), ReadyCheck::Ready);
    }

    #[test]
    fn test_all_empty_reports_every_field() {
        let check = check_inputs(&SessionInputs::default());
        assert_eq!(
            check,
            ReadyCheck::Missing(vec![
                InputField::Ticker,
                InputField::DataProviderKey,
                InputField::ModelProviderKey,
            ])
        );
    }

    #[test]
    fn test_single_missing_field_reported_alone() {
        let mut inputs = complete_inputs();
        inputs.model_provider_key.clear();

        assert_eq!(
            check_inputs(&inputs),
            ReadyCheck::Missing(vec![InputField::ModelProviderKey])
        );
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(InputField::Ticker.label(), "ticker symbol");
        assert_eq!(InputField::DataProviderKey.label(), "Alpha Vantage API key");
        assert_eq!(InputField::ModelProviderKey.label(), "OpenAI API key");
    }
}
