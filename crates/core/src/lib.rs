//! ETF Overlap Core - Overlap engine and report assembly.
//!
//! This crate contains the core business logic for the ETF overlap
//! calculator: pairwise overlap computation over already-acquired holdings,
//! pair enumeration, and CSV report assembly. It is platform-agnostic;
//! holdings acquisition lives in the `etf-overlap-holdings-data` crate.

pub mod errors;
pub mod overlap;
pub mod report;

// Re-export common types from the overlap module
pub use overlap::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
