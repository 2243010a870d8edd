//! Overlap models: matched holdings and per-pair results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A holding name present in both compared funds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedHolding {
    /// Holding name (the matching key, exactly as the funds report it)
    pub name: String,
    /// Which two funds contributed the match (descriptive only)
    pub combined_label: String,
    /// Arithmetic mean of the two funds' weight percentages for this holding
    pub average_weight_percent: Decimal,
}

/// Result of comparing two funds' holdings.
///
/// Matched holdings appear in the order they were discovered, which is fund
/// A's holding order. Similarity is count-based: the fraction of a fund's
/// holdings whose names also appear in the other fund, as a percentage of
/// that fund's holding count. It is deliberately not weight-adjusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapResult {
    /// Identifier of the first compared fund
    pub fund_a_id: String,
    /// Identifier of the second compared fund
    pub fund_b_id: String,
    /// Shared holdings in fund A's holding order
    pub matched_holdings: Vec<MatchedHolding>,
    /// 100 * matches / |A| (0-100 for well-formed inputs)
    pub fund_a_similarity_percent: Decimal,
    /// 100 * matches / |B| (0-100 for well-formed inputs)
    pub fund_b_similarity_percent: Decimal,
}

impl OverlapResult {
    /// Number of shared holdings found.
    pub fn match_count(&self) -> usize {
        self.matched_holdings.len()
    }

    /// Report section title for this pair.
    pub fn title(&self) -> String {
        format!(
            "Comparison between {} and {}",
            self.fund_a_id, self.fund_b_id
        )
    }
}
