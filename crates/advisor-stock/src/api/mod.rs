//! Market data provider clients

pub mod alpha_vantage;

pub use alpha_vantage::{
    AlphaVantageClient, QUARTERLY_REPORT_LIMIT, WEEKLY_SERIES_LIMIT, truncate_quarterly_reports,
    truncate_weekly_series,
};
