//! Local CSV holdings provider implementation.
//!
//! Reads holdings from `<dir>/<fund_id>.csv`. The file carries a header row
//! with `name` and `weight` columns; weights accept the same display
//! formats the web platforms use (`5.32`, `5.32%`, `<0.01%`). Useful for
//! funds whose holdings were exported by hand and for offline runs.

use async_trait::async_trait;
use csv::ReaderBuilder;
use log::{debug, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::errors::HoldingsDataError;
use crate::models::{FundHoldings, Holding};
use crate::normalize::parse_weight_percent;
use crate::provider::{HoldingsProvider, Platform};

const PROVIDER_ID: &str = "LOCAL_CSV";

/// Holdings provider backed by CSV files in a local directory.
pub struct CsvFileProvider {
    dir: PathBuf,
}

#[derive(Debug, Deserialize)]
struct HoldingRecord {
    name: String,
    weight: String,
}

impl CsvFileProvider {
    /// Creates a provider reading `<dir>/<fund_id>.csv` files.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn fund_path(&self, fund_id: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", fund_id))
    }

    fn read_file(&self, path: &Path, fund_id: &str) -> Result<Vec<Holding>, HoldingsDataError> {
        let mut reader = ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut holdings = Vec::new();
        for (index, record) in reader.deserialize::<HoldingRecord>().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    warn!("Skipping row {} of {}: {}", index + 1, path.display(), err);
                    continue;
                }
            };

            match parse_weight_percent(&record.weight) {
                Ok(weight) => holdings.push(Holding::new(record.name, weight)),
                Err(err) => {
                    warn!(
                        "Skipping holding '{}' for {}: {}",
                        record.name, fund_id, err
                    );
                }
            }
        }

        Ok(holdings)
    }
}

#[async_trait]
impl HoldingsProvider for CsvFileProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn platform(&self) -> Platform {
        Platform::LocalCsv
    }

    async fn fetch_holdings(&self, fund_id: &str) -> Result<FundHoldings, HoldingsDataError> {
        let path = self.fund_path(fund_id);
        if !path.exists() {
            return Err(HoldingsDataError::FundNotFound {
                platform: PROVIDER_ID.to_string(),
                fund_id: fund_id.to_string(),
            });
        }

        debug!("Reading holdings for {} from {}", fund_id, path.display());
        let holdings = self.read_file(&path, fund_id)?;

        Ok(FundHoldings::new(fund_id, holdings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_fund_csv(dir: &TempDir, fund_id: &str, content: &str) {
        let path = dir.path().join(format!("{}.csv", fund_id));
        let mut file = std::fs::File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[tokio::test]
    async fn test_reads_holdings_in_file_order() {
        let dir = TempDir::new().unwrap();
        write_fund_csv(
            &dir,
            "VUAG",
            "name,weight\nApple Inc,7.12%\nMicrosoft Corp,6.54\nTiny Ltd,<0.01%\n",
        );

        let provider = CsvFileProvider::new(dir.path());
        let fund = provider.fetch_holdings("VUAG").await.unwrap();

        assert_eq!(fund.fund_id, "VUAG");
        assert_eq!(
            fund.holdings,
            vec![
                Holding::new("Apple Inc", dec!(7.12)),
                Holding::new("Microsoft Corp", dec!(6.54)),
                Holding::new("Tiny Ltd", dec!(0.01)),
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_weight_rows_are_skipped() {
        let dir = TempDir::new().unwrap();
        write_fund_csv(
            &dir,
            "MIXED",
            "name,weight\nGood Corp,1.5%\nBad Corp,not-a-number\nAlso Good Plc,2%\n",
        );

        let provider = CsvFileProvider::new(dir.path());
        let fund = provider.fetch_holdings("MIXED").await.unwrap();

        assert_eq!(fund.len(), 2);
        assert_eq!(fund.holdings[0].name, "Good Corp");
        assert_eq!(fund.holdings[1].name, "Also Good Plc");
    }

    #[tokio::test]
    async fn test_missing_file_is_fund_not_found() {
        let dir = TempDir::new().unwrap();
        let provider = CsvFileProvider::new(dir.path());

        let err = provider.fetch_holdings("GHOST").await.unwrap_err();
        assert!(
            matches!(err, HoldingsDataError::FundNotFound { fund_id, .. } if fund_id == "GHOST")
        );
    }

    #[tokio::test]
    async fn test_empty_file_yields_empty_holdings() {
        let dir = TempDir::new().unwrap();
        write_fund_csv(&dir, "EMPTY", "name,weight\n");

        let provider = CsvFileProvider::new(dir.path());
        let fund = provider.fetch_holdings("EMPTY").await.unwrap();
        assert!(fund.is_empty());
    }
}
