//! Holdings provider abstractions and implementations.
//!
//! This module contains:
//! - The `HoldingsProvider` trait that all acquisition platforms implement
//! - The closed `Platform` enum of supported data sources
//! - Concrete provider implementations (InvestEngine, local CSV)
//!
//! # Architecture
//!
//! The provider system is designed to be:
//! - **Platform-agnostic**: The overlap engine doesn't know about specific platforms
//! - **Extensible**: New platforms can be added by implementing `HoldingsProvider`
//! - **Forgiving at row level**: A malformed holding row is skipped with a
//!   warning; only a fund that cannot be resolved at all fails the fetch

mod platform;
mod traits;

// Provider implementations
pub mod invest_engine;
pub mod local_csv;

// Re-exports
pub use platform::Platform;
pub use traits::HoldingsProvider;
