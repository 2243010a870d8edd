//! ETF Overlap Holdings Data Crate
//!
//! This crate provides platform-agnostic ETF holdings acquisition for the
//! ETF overlap calculator.
//!
//! # Overview
//!
//! The holdings data crate supports:
//! - Multiple data-source platforms: InvestEngine fund pages, local CSV files
//! - A platform-agnostic provider trait for adding new sources
//! - Weight-percentage text normalization ("5.32%", "<0.01%", "1,234.5")
//!
//! Every provider resolves a fund identifier to a [`FundHoldings`] value: the
//! fund's label plus its holdings in source order, with weights already
//! normalized to positive `Decimal` percentages. Downstream consumers never
//! re-validate this data beyond rejecting empty holding lists.
//!
//! # Core Types
//!
//! - [`Holding`] - A single position with its percentage weight of fund assets
//! - [`FundHoldings`] - A fund identifier plus its ordered holdings
//! - [`Platform`] - Closed set of supported data-source platforms
//! - [`HoldingsProvider`] - Trait implemented once per platform

pub mod errors;
pub mod models;
pub mod normalize;
pub mod provider;

pub use errors::HoldingsDataError;

pub use models::{FundHoldings, Holding};

pub use normalize::parse_weight_percent;

pub use provider::invest_engine::InvestEngineProvider;
pub use provider::local_csv::CsvFileProvider;
pub use provider::{HoldingsProvider, Platform};
