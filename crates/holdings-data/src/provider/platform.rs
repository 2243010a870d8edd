//! Supported data-source platforms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of platforms this crate can acquire holdings from.
///
/// Each variant dispatches to exactly one [`HoldingsProvider`](super::HoldingsProvider)
/// implementation. Adding a platform means adding a variant and a provider
/// module; nothing outside this crate switches on the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Platform {
    /// InvestEngine fund pages (scraped HTML)
    InvestEngine,
    /// Local CSV files with `name,weight` columns
    LocalCsv,
}

impl Platform {
    /// Stable identifier used for logging and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::InvestEngine => "INVESTENGINE",
            Platform::LocalCsv => "LOCAL_CSV",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::InvestEngine.to_string(), "INVESTENGINE");
        assert_eq!(Platform::LocalCsv.to_string(), "LOCAL_CSV");
    }
}
