//! Shared helpers for dates and logging

pub mod date_utils;
pub mod logging;

pub use date_utils::{HistoricalDate, format_date, parse_historical_date};
pub use logging::{log_extraction_start, log_links_resolved, log_reference_skipped};
