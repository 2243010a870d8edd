//! Environment-based configuration.

use std::path::PathBuf;

const DEFAULT_REPORT_PATH: &str = "report.csv";
const DEFAULT_CSV_DIR: &str = "holdings";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration, read from the environment with sensible defaults.
///
/// `.env` files are honored (loaded by `main` before this runs).
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the CSV report artifact is written
    pub report_path: PathBuf,
    /// Directory holding `<fund_id>.csv` files for the local CSV platform
    pub csv_dir: PathBuf,
    /// HTTP request timeout for web platforms
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        let report_path = std::env::var("ETF_OVERLAP_REPORT_PATH")
            .unwrap_or_else(|_| DEFAULT_REPORT_PATH.to_string());
        let csv_dir =
            std::env::var("ETF_OVERLAP_CSV_DIR").unwrap_or_else(|_| DEFAULT_CSV_DIR.to_string());
        let http_timeout_secs = std::env::var("ETF_OVERLAP_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Self {
            report_path: PathBuf::from(report_path),
            csv_dir: PathBuf::from(csv_dir),
            http_timeout_secs,
        }
    }
}
