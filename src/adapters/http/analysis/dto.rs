//! HTTP DTOs for analysis endpoints.
//!
//! Analysis is read-only and the domain records already serialize with
//! their public field names, so they are re-exported as response bodies.

pub use crate::domain::analysis::BallotAnalysis;

use serde::Serialize;

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn missing_vote(message: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            details: Some(details),
            ..Self::new("MISSING_VOTE", message)
        }
    }

    pub fn computation(message: impl Into<String>) -> Self {
        Self::new("COMPUTATION_ERROR", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::not_found("decision 4 not found")).unwrap();
        assert_eq!(json, json!({"code": "NOT_FOUND", "message": "decision 4 not found"}));
    }

    #[test]
    fn missing_vote_response_carries_ids() {
        let err = ErrorResponse::missing_vote("missing", json!({"criterion_id": 1, "ballot_id": 2}));
        let json = serde_json::to_value(err).unwrap();
        assert_eq!(json["code"], "MISSING_VOTE");
        assert_eq!(json["details"]["ballot_id"], 2);
    }
}
