//! Run orchestration: resolve funds, compare every pair, write the report.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use etf_overlap_core::report::{write_report, ReportSection};
use etf_overlap_core::{compute_overlap, fund_pairs};
use etf_overlap_holdings_data::{
    CsvFileProvider, FundHoldings, HoldingsProvider, InvestEngineProvider,
};

use crate::args::{CliArgs, FundRequest};
use crate::config::Config;

pub fn init_tracing() {
    let log_format = std::env::var("ETF_OVERLAP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// What a run produced, for the user-facing completion message.
#[derive(Debug)]
pub enum RunOutcome {
    /// The report artifact was written.
    ReportWritten {
        path: PathBuf,
        /// Sections actually written
        pair_count: usize,
        /// Pairs skipped because their comparison failed
        skipped_pairs: usize,
    },
    /// Fewer than two funds resolved; nothing to compare. Valid run, not an
    /// error.
    NotEnoughFunds { resolved: usize },
}

impl RunOutcome {
    /// User-facing completion message for this run.
    ///
    /// Skipped pairs are called out so a partially-written report never
    /// reads like a clean one.
    pub fn summary(&self) -> String {
        match self {
            RunOutcome::ReportWritten {
                path,
                pair_count,
                skipped_pairs,
            } => {
                let mut message = format!(
                    "Comparison report for {} pair(s) written to {}",
                    pair_count,
                    path.display()
                );
                if *skipped_pairs > 0 {
                    message.push_str(&format!(
                        " ({} pair(s) skipped, see warnings)",
                        skipped_pairs
                    ));
                }
                message
            }
            RunOutcome::NotEnoughFunds { resolved } => format!(
                "No comparison was made: {} fund(s) resolved, at least two are needed.",
                resolved
            ),
        }
    }
}

pub async fn run(args: &CliArgs, config: &Config) -> anyhow::Result<RunOutcome> {
    let invest_engine =
        InvestEngineProvider::with_timeout(Duration::from_secs(config.http_timeout_secs))?;
    let local_csv = CsvFileProvider::new(&config.csv_dir);
    let providers: [&dyn HoldingsProvider; 2] = [&invest_engine, &local_csv];

    let funds = resolve_funds(&args.fund_requests(), &providers).await;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.report_path.clone());
    Ok(compare_and_report(&funds, &output)?)
}

/// Resolves every requested fund through its platform's provider.
///
/// A fund that fails acquisition is excluded with a warning; pairs not
/// involving it are unaffected.
async fn resolve_funds(
    requests: &[FundRequest],
    providers: &[&dyn HoldingsProvider],
) -> Vec<FundHoldings> {
    let mut funds = Vec::with_capacity(requests.len());
    for request in requests {
        let Some(provider) = providers
            .iter()
            .find(|provider| provider.platform() == request.platform)
        else {
            warn!(
                "Excluding {} from comparison: no provider registered for {}",
                request.fund_id, request.platform
            );
            continue;
        };
        debug!("Resolving {} via {}", request.fund_id, provider.id());
        match provider.fetch_holdings(&request.fund_id).await {
            Ok(fund) => funds.push(fund),
            Err(err) => warn!(
                "Excluding {} from comparison ({}): {}",
                request.fund_id, request.platform, err
            ),
        }
    }
    funds
}

/// Compares every unordered pair of resolved funds and writes the report.
///
/// A pair whose comparison fails (e.g. a fund with zero holdings) is skipped
/// with a warning; the remaining pairs still make it into the artifact.
pub fn compare_and_report(
    funds: &[FundHoldings],
    output: &Path,
) -> etf_overlap_core::Result<RunOutcome> {
    if funds.len() < 2 {
        return Ok(RunOutcome::NotEnoughFunds {
            resolved: funds.len(),
        });
    }

    let by_id: HashMap<&str, &FundHoldings> = funds
        .iter()
        .map(|fund| (fund.fund_id.as_str(), fund))
        .collect();
    let ids: Vec<&str> = funds.iter().map(|fund| fund.fund_id.as_str()).collect();

    let mut sections = Vec::new();
    let mut skipped_pairs = 0;
    for (fund_a_id, fund_b_id) in fund_pairs(&ids) {
        let (Some(fund_a), Some(fund_b)) = (
            by_id.get(fund_a_id).copied(),
            by_id.get(fund_b_id).copied(),
        ) else {
            continue;
        };
        match compute_overlap(fund_a, fund_b) {
            Ok(result) => sections.push(ReportSection::from_overlap(&result)),
            Err(err) => {
                warn!("Skipping pair {} / {}: {}", fund_a_id, fund_b_id, err);
                skipped_pairs += 1;
            }
        }
    }

    write_report(&sections, output)?;

    Ok(RunOutcome::ReportWritten {
        path: output.to_path_buf(),
        pair_count: sections.len(),
        skipped_pairs,
    })
}
