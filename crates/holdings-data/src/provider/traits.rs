//! Holdings provider trait definition.
//!
//! This module defines the core `HoldingsProvider` trait that all
//! acquisition platforms must implement.

use async_trait::async_trait;

use crate::errors::HoldingsDataError;
use crate::models::FundHoldings;

use super::platform::Platform;

/// Trait for ETF holdings providers.
///
/// Implement this trait to add support for a new data-source platform.
/// A provider owns everything source-specific: resolving a fund identifier
/// to a document, extracting holding names and weight texts, and normalizing
/// weights to positive `Decimal` percentages. The `FundHoldings` it returns
/// is ready for the overlap engine as-is.
#[async_trait]
pub trait HoldingsProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "INVESTENGINE" or "LOCAL_CSV".
    /// Used for logging and error messages.
    fn id(&self) -> &'static str;

    /// The platform this provider serves.
    fn platform(&self) -> Platform;

    /// Resolve a fund identifier to its holdings.
    ///
    /// Holdings are returned in the order the platform listed them, with
    /// weights already normalized. Rows whose weight cannot be parsed are
    /// skipped with a warning rather than failing the fetch; a fund that
    /// cannot be resolved at all is an error.
    async fn fetch_holdings(&self, fund_id: &str) -> Result<FundHoldings, HoldingsDataError>;
}
