//! Weight-percentage text normalization.
//!
//! Source platforms display weights in a handful of formats: `"5.32%"`,
//! `"0.8"`, `"1,234.5%"`, and a "less than" marker (`"<0.01%"`) for
//! positions too small to display. Everything downstream assumes weights are
//! already positive numeric percentages, so normalization happens here, at
//! the acquisition boundary.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::HoldingsDataError;

/// Floor value substituted for a "less than" weight display (`"<0.01%"`).
pub const LESS_THAN_FLOOR: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Normalizes a weight-percentage display string to a `Decimal`.
///
/// Strips a trailing `%` and thousands separators. A leading `<` ("less
/// than" display) becomes [`LESS_THAN_FLOOR`] regardless of the displayed
/// figure. Negative values are rejected.
pub fn parse_weight_percent(raw: &str) -> Result<Decimal, HoldingsDataError> {
    let trimmed = raw.trim();

    if let Some(rest) = trimmed.strip_prefix('<') {
        // Sanity-check that the remainder is itself a number before
        // substituting the floor, so "<abc" still fails loudly.
        parse_plain(rest, raw)?;
        return Ok(LESS_THAN_FLOOR);
    }

    parse_plain(trimmed, raw)
}

fn parse_plain(text: &str, raw: &str) -> Result<Decimal, HoldingsDataError> {
    let cleaned: String = text
        .trim()
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    let value =
        Decimal::from_str(cleaned.trim()).map_err(|_| HoldingsDataError::MalformedWeight {
            raw: raw.to_string(),
        })?;

    if value.is_sign_negative() {
        return Err(HoldingsDataError::NegativeWeight {
            raw: raw.to_string(),
        });
    }

    Ok(value)
}
