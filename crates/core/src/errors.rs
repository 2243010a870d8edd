//! Core error types for the ETF overlap calculator.
//!
//! Acquisition-specific errors (HTTP, scraping, CSV input) are defined in
//! the holdings-data crate and wrapped here.

use thiserror::Error;

use etf_overlap_holdings_data::HoldingsDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for overlap computation and reporting.
#[derive(Error, Debug)]
pub enum Error {
    /// A fund resolved to zero holdings. Comparing it would divide by zero
    /// when scoring similarity, so it is rejected up front instead of
    /// producing a misleading score.
    #[error("Fund '{0}' has no holdings to compare")]
    EmptyHoldings(String),

    /// Holdings acquisition failed for a fund.
    #[error("Holdings data error: {0}")]
    HoldingsData(#[from] HoldingsDataError),

    /// The report artifact could not be written.
    #[error("Failed to write report: {0}")]
    ReportWrite(#[from] csv::Error),

    /// Filesystem error while producing the report artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
