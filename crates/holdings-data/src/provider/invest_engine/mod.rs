//! InvestEngine holdings provider implementation.
//!
//! Fetches a fund's public page at `https://investengine.com/etfs/<symbol>/`
//! and extracts the holdings breakdown table. Each table row carries the
//! holding name in its first cell and the weight percentage in its last
//! cell. The page appends non-holding rows (the fund's annual yield figure)
//! to the same table; those are recognized by label and dropped.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use reqwest::StatusCode;
use scraper::{Html, Selector};
use std::time::Duration;

use crate::errors::HoldingsDataError;
use crate::models::{FundHoldings, Holding};
use crate::normalize::parse_weight_percent;
use crate::provider::{HoldingsProvider, Platform};

const BASE_URL: &str = "https://investengine.com/etfs";
const PROVIDER_ID: &str = "INVESTENGINE";

/// Row labels that appear in the holdings table but are not holdings.
const NON_HOLDING_LABELS: &[&str] = &["annual yield"];

/// InvestEngine holdings provider.
///
/// Scrapes the holdings breakdown from a fund's public page. No API key is
/// required; the page is served to anonymous clients.
pub struct InvestEngineProvider {
    client: Client,
}

impl InvestEngineProvider {
    /// Creates a provider with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HoldingsDataError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    fn fund_url(fund_id: &str) -> String {
        format!("{}/{}/", BASE_URL, fund_id)
    }
}

#[async_trait]
impl HoldingsProvider for InvestEngineProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn platform(&self) -> Platform {
        Platform::InvestEngine
    }

    async fn fetch_holdings(&self, fund_id: &str) -> Result<FundHoldings, HoldingsDataError> {
        let url = Self::fund_url(fund_id);
        debug!("Fetching InvestEngine holdings for {} from {}", fund_id, url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(HoldingsDataError::FundNotFound {
                platform: PROVIDER_ID.to_string(),
                fund_id: fund_id.to_string(),
            });
        }
        let body = response.error_for_status()?.text().await?;

        let holdings = extract_holdings(&body, fund_id)?;
        debug!("Extracted {} holdings for {}", holdings.len(), fund_id);

        Ok(FundHoldings::new(fund_id, holdings))
    }
}

/// Extracts holdings from a fund page document.
///
/// Reads every table row with at least two cells: first cell is the holding
/// name, last cell is the weight text. Rows with a recognized non-holding
/// label are dropped; rows whose weight cannot be normalized are skipped
/// with a warning.
fn extract_holdings(html: &str, fund_id: &str) -> Result<Vec<Holding>, HoldingsDataError> {
    let row_selector = parse_selector("table tr", fund_id)?;
    let cell_selector = parse_selector("td, th", fund_id)?;

    let document = Html::parse_document(html);
    let mut holdings = Vec::new();
    let mut saw_row = false;

    for row in document.select(&row_selector) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        if cells.len() < 2 {
            continue;
        }
        saw_row = true;

        let name = cells[0].clone();
        let weight_text = &cells[cells.len() - 1];

        if name.is_empty() || is_non_holding_label(&name) {
            continue;
        }
        // Header rows carry column labels instead of a percentage.
        match parse_weight_percent(weight_text) {
            Ok(weight) => holdings.push(Holding::new(name, weight)),
            Err(err) => {
                warn!("Skipping row '{}' for {}: {}", name, fund_id, err);
            }
        }
    }

    if !saw_row {
        return Err(HoldingsDataError::ExtractionFailed {
            fund_id: fund_id.to_string(),
            message: "no holdings table found in fund page".to_string(),
        });
    }

    Ok(holdings)
}

fn is_non_holding_label(name: &str) -> bool {
    let lowered = name.to_lowercase();
    NON_HOLDING_LABELS
        .iter()
        .any(|label| lowered.contains(label))
}

fn parse_selector(css: &str, fund_id: &str) -> Result<Selector, HoldingsDataError> {
    Selector::parse(css).map_err(|err| HoldingsDataError::ExtractionFailed {
        fund_id: fund_id.to_string(),
        message: format!("invalid selector '{}': {}", css, err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const FUND_PAGE: &str = r#"
        <html><body>
        <h1>Vanguard S&amp;P 500 UCITS ETF</h1>
        <table>
            <tr><th>Holding</th><th>Weight</th></tr>
            <tr><td>Apple Inc</td><td>7.12%</td></tr>
            <tr><td>Microsoft Corp</td><td>6.54%</td></tr>
            <tr><td>Tiny Position Ltd</td><td>&lt;0.01%</td></tr>
            <tr><td>Annual yield</td><td>1.34%</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_extract_holdings_from_fund_page() {
        let holdings = extract_holdings(FUND_PAGE, "VUAG").unwrap();
        assert_eq!(holdings.len(), 3);
        assert_eq!(holdings[0], Holding::new("Apple Inc", dec!(7.12)));
        assert_eq!(holdings[1], Holding::new("Microsoft Corp", dec!(6.54)));
        // "Less than" display becomes the cutoff floor.
        assert_eq!(holdings[2], Holding::new("Tiny Position Ltd", dec!(0.01)));
    }

    #[test]
    fn test_annual_yield_row_is_dropped() {
        let holdings = extract_holdings(FUND_PAGE, "VUAG").unwrap();
        assert!(holdings.iter().all(|h| h.name != "Annual yield"));
    }

    #[test]
    fn test_header_row_is_skipped() {
        let holdings = extract_holdings(FUND_PAGE, "VUAG").unwrap();
        assert!(holdings.iter().all(|h| h.name != "Holding"));
    }

    #[test]
    fn test_malformed_weight_row_is_skipped() {
        let html = r#"
            <table>
                <tr><td>Apple Inc</td><td>7.12%</td></tr>
                <tr><td>Broken Row</td><td>n/a</td></tr>
            </table>
        "#;
        let holdings = extract_holdings(html, "VUAG").unwrap();
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].name, "Apple Inc");
    }

    #[test]
    fn test_page_without_table_fails() {
        let err = extract_holdings("<html><body><p>404</p></body></html>", "NOPE").unwrap_err();
        assert!(matches!(err, HoldingsDataError::ExtractionFailed { .. }));
    }

    #[test]
    fn test_fund_url() {
        assert_eq!(
            InvestEngineProvider::fund_url("VUAG"),
            "https://investengine.com/etfs/VUAG/"
        );
    }
}
