//! Holdings models shared by all acquisition platforms.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single position within an ETF.
///
/// The name is the matching key used downstream; it is kept exactly as the
/// source platform reported it (case-sensitive, no normalization). The
/// weight is the position's percentage of the fund's net assets (nominally
/// 0-100; no upper bound is enforced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Name of the instrument as reported by the source platform
    pub name: String,
    /// Percentage of the fund's net assets held in this instrument
    pub weight_percent: Decimal,
}

impl Holding {
    pub fn new(name: impl Into<String>, weight_percent: Decimal) -> Self {
        Self {
            name: name.into(),
            weight_percent,
        }
    }
}

/// An ETF's identifier plus its holdings in source order.
///
/// Built once per fund per run by a provider and immutable afterward. The
/// holding list is accepted as the platform reported it: duplicate names are
/// not deduplicated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundHoldings {
    /// Ticker or display name, used as an index key and for report titles
    pub fund_id: String,
    /// Holdings in the order the source platform listed them
    pub holdings: Vec<Holding>,
}

impl FundHoldings {
    pub fn new(fund_id: impl Into<String>, holdings: Vec<Holding>) -> Self {
        Self {
            fund_id: fund_id.into(),
            holdings,
        }
    }

    /// Number of holdings in this fund.
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Whether the fund resolved to zero holdings.
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
