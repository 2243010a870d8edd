//! Pairwise overlap computation between ETF holding sets.

mod overlap_model;
mod overlap_service;
mod pairs;

pub use overlap_model::*;
pub use overlap_service::*;
pub use pairs::*;
