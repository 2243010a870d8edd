//! Command-line arguments.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use etf_overlap_holdings_data::Platform;

/// One requested fund: which platform to ask, and for what identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundRequest {
    pub platform: Platform,
    pub fund_id: String,
}

/// Compare ETF holdings and score how similar the funds are.
#[derive(Debug, Parser)]
#[command(name = "etf-overlap", version)]
#[command(group(
    ArgGroup::new("funds")
        .required(true)
        .multiple(true)
        .args(["investengine", "csv"])
))]
pub struct CliArgs {
    /// ETF symbols to fetch from InvestEngine
    #[arg(long = "investengine", value_name = "SYM", num_args = 1..)]
    pub investengine: Vec<String>,

    /// Fund identifiers resolved from local CSV files
    #[arg(long = "csv", value_name = "ID", num_args = 1..)]
    pub csv: Vec<String>,

    /// Report output path (overrides ETF_OVERLAP_REPORT_PATH)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl CliArgs {
    /// All requested funds in argument order, InvestEngine symbols first.
    pub fn fund_requests(&self) -> Vec<FundRequest> {
        let invest_engine = self.investengine.iter().map(|fund_id| FundRequest {
            platform: Platform::InvestEngine,
            fund_id: fund_id.clone(),
        });
        let local_csv = self.csv.iter().map(|fund_id| FundRequest {
            platform: Platform::LocalCsv,
            fund_id: fund_id.clone(),
        });
        invest_engine.chain(local_csv).collect()
    }
}
