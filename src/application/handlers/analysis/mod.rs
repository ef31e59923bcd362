//! Analysis query handlers.
//!
//! Read-only handlers that load decision data and compute ballot statistics.

mod analyze_decision;

pub use analyze_decision::{AnalyzeDecisionHandler, AnalyzeDecisionQuery, AnalyzeDecisionResult};
