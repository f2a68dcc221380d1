//! Company overview tool

use advisor_core::Result;
use advisor_llm::tools::schema;
use advisor_tools::Tool;
use async_trait::async_trait;
use serde_json::{Value, json};

use crate::api::AlphaVantageClient;
use crate::tools::parse_symbol;

/// Fetches descriptive fundamentals for a company
pub struct CompanyOverviewTool {
    client: AlphaVantageClient,
}

impl CompanyOverviewTool {
    /// Create the tool backed by the given client
    pub fn new(client: AlphaVantageClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for CompanyOverviewTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let symbol = parse_symbol(params)?;
        let overview = self
            .client
            .fetch_overview(&symbol)
            .await
            .map_err(|e| advisor_core::Error::ProcessingFailed(e.to_string()))?;
        Ok(Value::String(overview))
    }

    fn name(&self) -> &str {
        "company_overview"
    }

    fn description(&self) -> &str {
        "Get an overview of a company: sector, industry, market capitalization, \
         valuation ratios, and other descriptive fundamentals. Use this to \
         understand what the company does and how the market values it."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({ "symbol": schema::string("Stock ticker symbol, e.g. TSLA") }),
            vec!["symbol"],
        )
    }
}
