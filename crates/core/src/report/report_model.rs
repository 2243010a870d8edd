//! Report models: display-rounded rows assembled from overlap results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::overlap::OverlapResult;

/// One matched holding as it appears in the report table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    /// Holding name shared by both funds
    pub common_share: String,
    /// Averaged exposure, rounded to 2 decimal places for display
    pub weight_percent: Decimal,
}

/// One titled report section for a compared pair.
///
/// Carries display-rounded values only; the unrounded figures live in the
/// [`OverlapResult`] this was assembled from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSection {
    /// Section title, `"Comparison between <A> and <B>"`
    pub title: String,
    /// One row per matched holding, in discovery order
    pub rows: Vec<ReportRow>,
    /// Count of shared holdings
    pub common_share_count: usize,
    /// Label for fund A's similarity column, `"<A> % Similar"`
    pub fund_a_label: String,
    /// Label for fund B's similarity column, `"<B> % Similar"`
    pub fund_b_label: String,
    /// Fund A similarity, rounded to 2 decimal places
    pub fund_a_similarity_percent: Decimal,
    /// Fund B similarity, rounded to 2 decimal places
    pub fund_b_similarity_percent: Decimal,
}

impl ReportSection {
    /// Assembles a report section from an overlap result, applying display
    /// rounding.
    pub fn from_overlap(result: &OverlapResult) -> Self {
        let rows = result
            .matched_holdings
            .iter()
            .map(|matched| ReportRow {
                common_share: matched.name.clone(),
                weight_percent: matched.average_weight_percent.round_dp(2),
            })
            .collect();

        Self {
            title: result.title(),
            rows,
            common_share_count: result.match_count(),
            fund_a_label: format!("{} % Similar", result.fund_a_id),
            fund_b_label: format!("{} % Similar", result.fund_b_id),
            fund_a_similarity_percent: result.fund_a_similarity_percent.round_dp(2),
            fund_b_similarity_percent: result.fund_b_similarity_percent.round_dp(2),
        }
    }
}
