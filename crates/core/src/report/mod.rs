//! Report assembly: tabular sections per compared pair and CSV output.

mod report_model;
mod report_service;

pub use report_model::*;
pub use report_service::*;
