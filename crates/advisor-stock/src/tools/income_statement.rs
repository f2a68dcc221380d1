//! Income statement tool

use advisor_core::Result;
use advisor_llm::tools::schema;
use advisor_tools::Tool;
use async_trait::async_trait;
use serde_json::{Value, json};

use crate::api::AlphaVantageClient;
use crate::tools::parse_symbol;

/// Fetches the income statement with recent quarterly reports
pub struct IncomeStatementTool {
    client: AlphaVantageClient,
}

impl IncomeStatementTool {
    /// Create the tool backed by the given client
    pub fn new(client: AlphaVantageClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for IncomeStatementTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let symbol = parse_symbol(params)?;
        let statement = self
            .client
            .fetch_income_statement(&symbol)
            .await
            .map_err(|e| advisor_core::Error::ProcessingFailed(e.to_string()))?;
        Ok(Value::String(statement))
    }

    fn name(&self) -> &str {
        "income_statement"
    }

    fn description(&self) -> &str {
        "Get the income statement of a company: annual reports and the most \
         recent quarterly reports, with revenue, gross profit, operating \
         income, and net income. Use this to judge profitability trends."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({ "symbol": schema::string("Stock ticker symbol, e.g. TSLA") }),
            vec!["symbol"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_metadata() {
        let tool = IncomeStatementTool::new(AlphaVantageClient::new("test-key"));
        assert_eq!(tool.name(), "income_statement");
        assert!(tool.description().contains("income statement"));

        let schema = tool.input_schema();
        assert_eq!(schema["required"][0], "symbol");
    }
}
