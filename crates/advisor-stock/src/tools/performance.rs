//! Weekly stock performance tool

use advisor_core::Result;
use advisor_llm::tools::schema;
use advisor_tools::Tool;
use async_trait::async_trait;
use serde_json::{Value, json};

use crate::api::AlphaVantageClient;
use crate::tools::parse_symbol;

/// Fetches recent weekly price history for a stock
pub struct StockPerformanceTool {
    client: AlphaVantageClient,
}

impl StockPerformanceTool {
    /// Create the tool backed by the given client
    pub fn new(client: AlphaVantageClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for StockPerformanceTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let symbol = parse_symbol(params)?;
        let series = self
            .client
            .fetch_weekly_performance(&symbol)
            .await
            .map_err(|e| advisor_core::Error::ProcessingFailed(e.to_string()))?;
        Ok(Value::String(series))
    }

    fn name(&self) -> &str {
        "stock_performance"
    }

    fn description(&self) -> &str {
        "Get the weekly share price history of a stock: open, high, low, \
         close, and volume for recent weeks. Use this to judge how the stock \
         has performed over the past few years."
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
        let tool = StockPerformanceTool::new(AlphaVantageClient::new("test-key"));
        assert_eq!(tool.name(), "stock_performance");
        assert!(tool.description().contains("price history"));

        let schema = tool.input_schema();
        assert_eq!(schema["required"][0], "symbol");
    }
}
