//! Overlap engine: matches holdings by name and scores similarity.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use etf_overlap_holdings_data::{FundHoldings, Holding};

use crate::errors::{Error, Result};

use super::{MatchedHolding, OverlapResult};

/// Computes the overlap between two funds' holdings.
///
/// For each holding in fund A, the first holding in fund B with an equal
/// name (exact, case-sensitive) yields one [`MatchedHolding`] whose weight
/// is the arithmetic mean of the two sides. A name index over fund B
/// replaces the naive nested scan; because the index keeps only the first
/// occurrence of each name in B's original order, the result is identical
/// to scanning B front-to-back per A-holding. Duplicate names in A each
/// match independently, possibly against the same B holding.
///
/// Fails with [`Error::EmptyHoldings`] when either fund has no holdings:
/// similarity scoring divides by the holding count, and a silent zero or
/// NaN score would misread as "no overlap".
///
/// Pure function: no side effects, safe to call concurrently across pairs.
pub fn compute_overlap(fund_a: &FundHoldings, fund_b: &FundHoldings) -> Result<OverlapResult> {
    if fund_a.is_empty() {
        return Err(Error::EmptyHoldings(fund_a.fund_id.clone()));
    }
    if fund_b.is_empty() {
        return Err(Error::EmptyHoldings(fund_b.fund_id.clone()));
    }

    // First occurrence of each name in B's original order wins.
    let mut b_by_name: HashMap<&str, &Holding> = HashMap::with_capacity(fund_b.len());
    for holding in &fund_b.holdings {
        b_by_name.entry(holding.name.as_str()).or_insert(holding);
    }

    let combined_label = format!("{} / {}", fund_a.fund_id, fund_b.fund_id);
    let mut matched_holdings = Vec::new();
    for holding in &fund_a.holdings {
        if let Some(other) = b_by_name.get(holding.name.as_str()) {
            matched_holdings.push(MatchedHolding {
                name: holding.name.clone(),
                combined_label: combined_label.clone(),
                average_weight_percent: (holding.weight_percent + other.weight_percent)
                    / Decimal::TWO,
            });
        }
    }

    let match_count = matched_holdings.len();
    debug!(
        "{} and {} share {} of {}/{} holdings",
        fund_a.fund_id,
        fund_b.fund_id,
        match_count,
        fund_a.len(),
        fund_b.len()
    );

    Ok(OverlapResult {
        fund_a_id: fund_a.fund_id.clone(),
        fund_b_id: fund_b.fund_id.clone(),
        matched_holdings,
        fund_a_similarity_percent: similarity_percent(match_count, fund_a.len()),
        fund_b_similarity_percent: similarity_percent(match_count, fund_b.len()),
    })
}

/// Count-based similarity: 100 * matches / total.
///
/// Callers guarantee `total > 0`; `compute_overlap` rejects empty funds
/// before scoring.
fn similarity_percent(matches: usize, total: usize) -> Decimal {
    Decimal::from(matches) * Decimal::ONE_HUNDRED / Decimal::from(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fund(id: &str, holdings: &[(&str, Decimal)]) -> FundHoldings {
        FundHoldings::new(
            id,
            holdings
                .iter()
                .map(|(name, weight)| Holding::new(*name, *weight))
                .collect(),
        )
    }

    #[test]
    fn test_worked_example() {
        let fund_a = fund(
            "FundA",
            &[("AAPL", dec!(10.0)), ("MSFT", dec!(8.0)), ("GOOG", dec!(5.0))],
        );
        let fund_b = fund(
            "FundB",
            &[("AAPL", dec!(12.0)), ("AMZN", dec!(7.0)), ("MSFT", dec!(4.0))],
        );

        let result = compute_overlap(&fund_a, &fund_b).unwrap();

        assert_eq!(result.match_count(), 2);
        assert_eq!(result.matched_holdings[0].name, "AAPL");
        assert_eq!(result.matched_holdings[0].average_weight_percent, dec!(11.0));
        assert_eq!(result.matched_holdings[1].name, "MSFT");
        assert_eq!(result.matched_holdings[1].average_weight_percent, dec!(6.0));
        assert_eq!(result.fund_a_similarity_percent.round_dp(2), dec!(66.67));
        assert_eq!(result.fund_b_similarity_percent.round_dp(2), dec!(66.67));
    }

    #[test]
    fn test_matches_follow_fund_a_order() {
        let fund_a = fund("A", &[("X", dec!(1)), ("Y", dec!(2)), ("Z", dec!(3))]);
        let fund_b = fund("B", &[("Z", dec!(3)), ("X", dec!(1))]);

        let result = compute_overlap(&fund_a, &fund_b).unwrap();
        let names: Vec<&str> = result
            .matched_holdings
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["X", "Z"]);
    }

    #[test]
    fn test_match_count_bounded_by_smaller_fund() {
        let fund_a = fund("A", &[("X", dec!(1)), ("Y", dec!(2)), ("Z", dec!(3))]);
        let fund_b = fund("B", &[("X", dec!(4))]);

        let result = compute_overlap(&fund_a, &fund_b).unwrap();
        assert!(result.match_count() <= fund_a.len().min(fund_b.len()));
        assert_eq!(result.match_count(), 1);
    }

    #[test]
    fn test_similarity_is_exact_count_ratio() {
        let fund_a = fund("A", &[("X", dec!(1)), ("Y", dec!(2)), ("Z", dec!(3)), ("W", dec!(4))]);
        let fund_b = fund("B", &[("X", dec!(4)), ("Y", dec!(5))]);

        let result = compute_overlap(&fund_a, &fund_b).unwrap();
        // 100 * 2 / 4 and 100 * 2 / 2, exactly.
        assert_eq!(result.fund_a_similarity_percent, dec!(50));
        assert_eq!(result.fund_b_similarity_percent, dec!(100));
    }

    #[test]
    fn test_membership_symmetric_under_swap() {
        let fund_a = fund("A", &[("AAPL", dec!(10)), ("MSFT", dec!(8)), ("GOOG", dec!(5))]);
        let fund_b = fund("B", &[("MSFT", dec!(4)), ("AAPL", dec!(12))]);

        let ab = compute_overlap(&fund_a, &fund_b).unwrap();
        let ba = compute_overlap(&fund_b, &fund_a).unwrap();

        let mut ab_names: Vec<&str> =
            ab.matched_holdings.iter().map(|m| m.name.as_str()).collect();
        let mut ba_names: Vec<&str> =
            ba.matched_holdings.iter().map(|m| m.name.as_str()).collect();
        ab_names.sort_unstable();
        ba_names.sort_unstable();
        assert_eq!(ab_names, ba_names);

        // Averages commute; similarity percentages swap roles.
        assert_eq!(ab.fund_a_similarity_percent, ba.fund_b_similarity_percent);
        assert_eq!(ab.fund_b_similarity_percent, ba.fund_a_similarity_percent);
        for name in ab_names {
            let ab_avg = ab
                .matched_holdings
                .iter()
                .find(|m| m.name == name)
                .map(|m| m.average_weight_percent);
            let ba_avg = ba
                .matched_holdings
                .iter()
                .find(|m| m.name == name)
                .map(|m| m.average_weight_percent);
            assert_eq!(ab_avg, ba_avg);
        }
    }

    #[test]
    fn test_self_comparison_scores_exactly_100() {
        let fund_a = fund("A", &[("X", dec!(1)), ("Y", dec!(2)), ("Z", dec!(3))]);

        let result = compute_overlap(&fund_a, &fund_a).unwrap();
        assert_eq!(result.match_count(), 3);
        assert_eq!(result.fund_a_similarity_percent, dec!(100));
        assert_eq!(result.fund_b_similarity_percent, dec!(100));
        for matched in &result.matched_holdings {
            // Self-match averages to the holding's own weight.
            let original = fund_a
                .holdings
                .iter()
                .find(|h| h.name == matched.name)
                .unwrap();
            assert_eq!(matched.average_weight_percent, original.weight_percent);
        }
    }

    #[test]
    fn test_empty_fund_a_is_an_error() {
        let fund_a = fund("Empty", &[]);
        let fund_b = fund("B", &[("X", dec!(1))]);

        let err = compute_overlap(&fund_a, &fund_b).unwrap_err();
        assert!(matches!(err, Error::EmptyHoldings(id) if id == "Empty"));
    }

    #[test]
    fn test_empty_fund_b_is_an_error() {
        let fund_a = fund("A", &[("X", dec!(1))]);
        let fund_b = fund("Empty", &[]);

        let err = compute_overlap(&fund_a, &fund_b).unwrap_err();
        assert!(matches!(err, Error::EmptyHoldings(id) if id == "Empty"));
    }

    #[test]
    fn test_duplicate_in_fund_b_uses_first_occurrence() {
        let fund_a = fund("A", &[("X", dec!(1.0))]);
        let fund_b = fund("B", &[("X", dec!(2.0)), ("X", dec!(9.0))]);

        let result = compute_overlap(&fund_a, &fund_b).unwrap();
        assert_eq!(result.match_count(), 1);
        assert_eq!(result.matched_holdings[0].average_weight_percent, dec!(1.5));
    }

    #[test]
    fn test_duplicates_in_fund_a_match_independently() {
        let fund_a = fund("A", &[("X", dec!(1.0)), ("X", dec!(3.0))]);
        let fund_b = fund("B", &[("X", dec!(2.0))]);

        let result = compute_overlap(&fund_a, &fund_b).unwrap();
        // Both A-occurrences match B's single X.
        assert_eq!(result.match_count(), 2);
        assert_eq!(result.matched_holdings[0].average_weight_percent, dec!(1.5));
        assert_eq!(result.matched_holdings[1].average_weight_percent, dec!(2.5));
    }

    #[test]
    fn test_no_overlap() {
        let fund_a = fund("A", &[("X", dec!(1))]);
        let fund_b = fund("B", &[("Y", dec!(2))]);

        let result = compute_overlap(&fund_a, &fund_b).unwrap();
        assert!(result.matched_holdings.is_empty());
        assert_eq!(result.fund_a_similarity_percent, Decimal::ZERO);
        assert_eq!(result.fund_b_similarity_percent, Decimal::ZERO);
    }

    #[test]
    fn test_combined_label_names_both_funds() {
        let fund_a = fund("VUAG", &[("AAPL", dec!(7))]);
        let fund_b = fund("SPXP", &[("AAPL", dec!(6))]);

        let result = compute_overlap(&fund_a, &fund_b).unwrap();
        assert_eq!(result.matched_holdings[0].combined_label, "VUAG / SPXP");
        assert_eq!(result.title(), "Comparison between VUAG and SPXP");
    }
}
