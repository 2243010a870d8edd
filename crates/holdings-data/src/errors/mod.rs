//! Error types for the holdings data crate.

use thiserror::Error;

/// Errors that can occur while acquiring ETF holdings.
///
/// A provider that cannot resolve a fund fails the whole fetch; a provider
/// that cannot parse a single holding row skips that row with a warning
/// instead of surfacing [`HoldingsDataError::MalformedWeight`].
#[derive(Error, Debug)]
pub enum HoldingsDataError {
    /// The platform does not know the requested fund identifier.
    /// This is a terminal error - retrying won't help.
    #[error("Fund not found on {platform}: {fund_id}")]
    FundNotFound {
        /// The platform that was queried
        platform: String,
        /// The fund identifier that could not be resolved
        fund_id: String,
    },

    /// The platform responded, but its payload did not contain a holdings
    /// table this crate knows how to read.
    #[error("Failed to extract holdings for {fund_id}: {message}")]
    ExtractionFailed {
        /// The fund identifier being fetched
        fund_id: String,
        /// Description of what was missing or unreadable
        message: String,
    },

    /// A weight-percentage text could not be normalized to a number.
    #[error("Malformed weight percentage: '{raw}'")]
    MalformedWeight {
        /// The raw text as it appeared in the source
        raw: String,
    },

    /// A weight-percentage normalized to a negative number.
    #[error("Negative weight percentage: '{raw}'")]
    NegativeWeight {
        /// The raw text as it appeared in the source
        raw: String,
    },

    /// A network error occurred while talking to a platform.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A local holdings file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A local holdings file could not be parsed as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fund_not_found_display() {
        let error = HoldingsDataError::FundNotFound {
            platform: "INVESTENGINE".to_string(),
            fund_id: "VUAG".to_string(),
        };
        assert_eq!(format!("{}", error), "Fund not found on INVESTENGINE: VUAG");
    }

    #[test]
    fn test_malformed_weight_display() {
        let error = HoldingsDataError::MalformedWeight {
            raw: "n/a".to_string(),
        };
        assert_eq!(format!("{}", error), "Malformed weight percentage: 'n/a'");
    }
}
