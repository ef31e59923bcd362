//! HTTP routes for analysis endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_decision_stats, health, AnalysisAppState};

/// Creates the analysis router with all routes.
pub fn analysis_routes(state: AnalysisAppState) -> Router {
    Router::new()
        // GET /api/decisions/:decision_id/stats
        .route("/api/decisions/:decision_id/stats", get(get_decision_stats))
        .route("/health", get(health))
        .with_state(state)
}
