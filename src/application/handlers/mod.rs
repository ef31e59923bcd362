//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod analysis;

pub use analysis::{AnalyzeDecisionHandler, AnalyzeDecisionQuery, AnalyzeDecisionResult};
