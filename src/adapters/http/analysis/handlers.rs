//! HTTP handlers for analysis endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::application::handlers::{AnalyzeDecisionHandler, AnalyzeDecisionQuery};
use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::DecisionId;
use crate::ports::DecisionReader;

use super::dto::{BallotAnalysis, ErrorResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analysis API error that implements IntoResponse.
#[derive(Debug)]
pub enum AnalysisApiError {
    BadRequest(String),
    NotFound(String),
    MissingVote {
        message: String,
        criterion_id: i32,
        ballot_id: i32,
    },
    Unprocessable(String),
    Internal(String),
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AnalysisApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            AnalysisApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            AnalysisApiError::MissingVote {
                message,
                criterion_id,
                ballot_id,
            } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::missing_vote(
                    message,
                    json!({ "criterion_id": criterion_id, "ballot_id": ballot_id }),
                ),
            ),
            AnalysisApiError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorResponse::computation(msg))
            }
            AnalysisApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<AnalysisError> for AnalysisApiError {
    fn from(error: AnalysisError) -> Self {
        match &error {
            AnalysisError::DecisionNotFound(_) => AnalysisApiError::NotFound(error.to_string()),
            AnalysisError::MissingVote {
                criterion_id,
                ballot_id,
            } => AnalysisApiError::MissingVote {
                message: error.to_string(),
                criterion_id: criterion_id.value(),
                ballot_id: ballot_id.value(),
            },
            AnalysisError::Computation(_) => AnalysisApiError::Unprocessable(error.to_string()),
            AnalysisError::DecisionUnavailable { .. }
            | AnalysisError::BallotsUnavailable { .. }
            | AnalysisError::CriteriaUnavailable { .. }
            | AnalysisError::VotesUnavailable { .. } => {
                AnalysisApiError::Internal(error.to_string())
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing analysis dependencies.
#[derive(Clone)]
pub struct AnalysisAppState {
    pub decision_reader: Arc<dyn DecisionReader>,
}

impl AnalysisAppState {
    pub fn new(decision_reader: Arc<dyn DecisionReader>) -> Self {
        Self { decision_reader }
    }

    pub fn analyze_decision_handler(&self) -> AnalyzeDecisionHandler {
        AnalyzeDecisionHandler::new(self.decision_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/decisions/:decision_id/stats
///
/// Returns one statistics entry per ballot of the decision.
pub async fn get_decision_stats(
    State(state): State<AnalysisAppState>,
    Path(decision_id_str): Path<String>,
) -> Result<Json<Vec<BallotAnalysis>>, AnalysisApiError> {
    let decision_id: DecisionId = decision_id_str
        .parse()
        .map_err(|_| AnalysisApiError::BadRequest("Invalid decision ID format".to_string()))?;

    let handler = state.analyze_decision_handler();
    let analyses = handler.handle(AnalyzeDecisionQuery { decision_id }).await?;

    Ok(Json(analyses))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
