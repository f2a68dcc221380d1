//! Alpha Vantage API client
//!
//! Thin HTTP wrapper over the three Alpha Vantage functions the advisor
//! uses: `OVERVIEW`, `INCOME_STATEMENT`, and `TIME_SERIES_WEEKLY`. The
//! income statement and weekly series are truncated before serialization
//! so a single tool result stays within what the model can usefully read.
//!
//! The client does not inspect payload contents. Alpha Vantage reports
//! bad symbols and exhausted quotas inside a 200 response body; those
//! payloads are returned as-is and left for the reasoning model to
//! interpret. Only transport failures and non-2xx statuses become errors.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Result;

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Quarterly income reports kept after truncation (about five years)
pub const QUARTERLY_REPORT_LIMIT: usize = 20;

/// Weekly price entries kept after truncation (about three years)
pub const WEEKLY_SERIES_LIMIT: usize = 150;

/// Client for the Alpha Vantage market data API
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: reqwest::Client,
    api_key: String,
}

impl AlphaVantageClient {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Call one Alpha Vantage function for a symbol and parse the body
    async fn fetch(&self, function: &str, symbol: &str) -> Result<Value> {
        debug!(function, symbol, "fetching Alpha Vantage data");

        let response = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", function),
                ("symbol", symbol),
                ("apikey", &self.api_key),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Fetch the company overview: sector, market cap, valuation ratios
    ///
    /// The payload is passed through without truncation.
    pub async fn fetch_overview(&self, symbol: &str) -> Result<String> {
        let data = self.fetch("OVERVIEW", symbol).await?;
        Ok(data.to_string())
    }

    /// Fetch the income statement, keeping the most recent quarterly reports
    pub async fn fetch_income_statement(&self, symbol: &str) -> Result<String> {
        let data = self.fetch("INCOME_STATEMENT", symbol).await?;
        let truncated = truncate_quarterly_reports(data);
        Ok(serde_json::to_string_pretty(&truncated)?)
    }

    /// Fetch the weekly price series, keeping the most recent entries
    pub async fn fetch_weekly_performance(&self, symbol: &str) -> Result<String> {
        let data = self.fetch("TIME_SERIES_WEEKLY", symbol).await?;
        let truncated = truncate_weekly_series(data);
        Ok(serde_json::to_string_pretty(&truncated)?)
    }
}

/// Keep only the first [`QUARTERLY_REPORT_LIMIT`] entries of the
/// `quarterlyReports` array, which Alpha Vantage orders newest-first.
///
/// Other fields, including `annualReports`, pass through unchanged. A
/// payload without a `quarterlyReports` array is returned untouched.
pub fn truncate_quarterly_reports(mut data: Value) -> Value {
    if let Some(reports) = data
        .get_mut("quarterlyReports")
        .and_then(Value::as_array_mut)
    {
        reports.truncate(QUARTERLY_REPORT_LIMIT);
    }
    data
}

/// Keep only the first [`WEEKLY_SERIES_LIMIT`] entries of the
/// `Weekly Time Series` object in insertion order, which Alpha Vantage
/// emits newest-first.
///
/// Relies on `serde_json` preserving object member order when parsing.
/// A payload without a `Weekly Time Series` object is returned untouched.
pub fn truncate_weekly_series(mut data: Value) -> Value {
    if let Some(series) = data
        .get_mut("Weekly Time Series")
        .and_then(Value::as_object_mut)
    {
        if series.len() > WEEKLY_SERIES_LIMIT {
            let kept: Map<String, Value> = series
                .iter()
                .take(WEEKLY_SERIES_LIMIT)
                .map(|(week, prices)| (week.clone(), prices.clone()))
                .collect();
            *series = kept;
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn income_statement_with(quarters: usize) -> Value {
        let reports: Vec<Value> = (0..quarters)
            .map(|i| json!({ "fiscalDateEnding": format!("2024-Q{i}") }))
            .collect();
        json!({
            "symbol": "TSLA",
            "annualReports": [{ "fiscalDateEnding": "2023-12-31" }],
            "quarterlyReports": reports,
        })
    }

    fn weekly_series_with(weeks: usize) -> Value {
        let mut series = Map::new();
        for i in 0..weeks {
            series.insert(
                format!("week-{i:04}"),
                json!({ "4. close": format!("{i}.00") }),
            );
        }
        json!({
            "Meta Data": { "2. Symbol": "TSLA" },
            "Weekly Time Series": series,
        })
    }

    #[test]
    fn test_quarterly_reports_capped_at_limit() {
        let truncated = truncate_quarterly_reports(income_statement_with(40));
        let reports = truncated["quarterlyReports"].as_array().unwrap();
        assert_eq!(reports.len(), QUARTERLY_REPORT_LIMIT);
        // Leading entries survive in order
        assert_eq!(reports[0]["fiscalDateEnding"], "2024-Q0");
        assert_eq!(reports[19]["fiscalDateEnding"], "2024-Q19");
    }

    #[test]
    fn test_short_quarterly_reports_untouched() {
        let truncated = truncate_quarterly_reports(income_statement_with(8));
        assert_eq!(truncated["quarterlyReports"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_annual_reports_pass_through() {
        let truncated = truncate_quarterly_reports(income_statement_with(40));
        assert_eq!(truncated["annualReports"].as_array().unwrap().len(), 1);
        assert_eq!(truncated["symbol"], "TSLA");
    }

    #[test]
    fn test_missing_quarterly_reports_untouched() {
        let payload = json!({ "Information": "rate limit reached" });
        let truncated = truncate_quarterly_reports(payload.clone());
        assert_eq!(truncated, payload);
    }

    #[test]
    fn test_weekly_series_capped_in_insertion_order() {
        let truncated = truncate_weekly_series(weekly_series_with(300));
        let series = truncated["Weekly Time Series"].as_object().unwrap();
        assert_eq!(series.len(), WEEKLY_SERIES_LIMIT);

        let keys: Vec<&String> = series.keys().collect();
        assert_eq!(keys[0], "week-0000");
        assert_eq!(keys[149], "week-0149");
    }

    #[test]
    fn test_short_weekly_series_untouched() {
        let truncated = truncate_weekly_series(weekly_series_with(12));
        let series = truncated["Weekly Time Series"].as_object().unwrap();
        assert_eq!(series.len(), 12);
    }

    #[test]
    fn test_weekly_metadata_pass_through() {
        let truncated = truncate_weekly_series(weekly_series_with(300));
        assert_eq!(truncated["Meta Data"]["2. Symbol"], "TSLA");
    }

    #[test]
    fn test_missing_weekly_series_untouched() {
        let payload = json!({ "Error Message": "Invalid API call." });
        let truncated = truncate_weekly_series(payload.clone());
        assert_eq!(truncated, payload);
    }

    #[test]
    fn test_truncated_payload_serializes_pretty() {
        let truncated = truncate_weekly_series(weekly_series_with(200));
        let rendered = serde_json::to_string_pretty(&truncated).unwrap();
        // Still valid JSON after truncation
        let reparsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            reparsed["Weekly Time Series"].as_object().unwrap().len(),
            WEEKLY_SERIES_LIMIT
        );
    }
}
