//! Capability tools exposed to the reasoning agent
//!
//! Three tools, one per Alpha Vantage function. Each takes the ticker
//! symbol as an explicit parameter so a single registry instance can serve
//! any number of analyses concurrently.

pub mod income_statement;
pub mod overview;
pub mod performance;

pub use income_statement::IncomeStatementTool;
pub use overview::CompanyOverviewTool;
pub use performance::StockPerformanceTool;

use serde::Deserialize;

/// Shared parameter shape for all three market-data tools
#[derive(Debug, Deserialize)]
pub(crate) struct SymbolParams {
    pub symbol: String,
}

pub(crate) fn parse_symbol(params: serde_json::Value) -> advisor_core::Result<String> {
    let parsed: SymbolParams = serde_json::from_value(params)
        .map_err(|e| advisor_core::Error::InvalidInput(format!("invalid tool parameters: {e}")))?;
    Ok(parsed.symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_symbol() {
        let symbol = parse_symbol(json!({ "symbol": "TSLA" })).unwrap();
        assert_eq!(symbol, "TSLA");
    }

    #[test]
    fn test_parse_symbol_rejects_missing_field() {
        let result = parse_symbol(json!({ "ticker": "TSLA" }));
        assert!(matches!(
            result,
            Err(advisor_core::Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_symbol_rejects_non_object() {
        let result = parse_symbol(json!("TSLA"));
        assert!(result.is_err());
    }
}
