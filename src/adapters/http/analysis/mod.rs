//! Analysis HTTP adapter module.
//!
//! Provides the REST endpoint for per-ballot decision statistics.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{AnalysisApiError, AnalysisAppState};
pub use routes::analysis_routes;
