//! Error types for ballot analysis.

use thiserror::Error;

use crate::domain::foundation::{BallotId, CriterionId, DecisionId, DomainError};

/// Invalid input reaching a statistical computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatisticsError {
    #[error("cannot compute statistics over an empty sample")]
    EmptySample,

    #[error("criterion {criterion_id} has zero weight, vote percentage is undefined")]
    ZeroCriterionWeight { criterion_id: CriterionId },
}

/// Failure of a whole decision analysis.
///
/// Any variant aborts the analysis; no partial result is ever produced.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error("decision {0} not found")]
    DecisionNotFound(DecisionId),

    #[error("failed to load decision {decision_id}: {source}")]
    DecisionUnavailable {
        decision_id: DecisionId,
        #[source]
        source: DomainError,
    },

    #[error("failed to load ballots for decision {decision_id}: {source}")]
    BallotsUnavailable {
        decision_id: DecisionId,
        #[source]
        source: DomainError,
    },

    #[error("failed to load criteria for decision {decision_id}: {source}")]
    CriteriaUnavailable {
        decision_id: DecisionId,
        #[source]
        source: DomainError,
    },

    #[error("failed to load votes for ballot {ballot_id}: {source}")]
    VotesUnavailable {
        ballot_id: BallotId,
        #[source]
        source: DomainError,
    },

    #[error("missing vote for criterion id {criterion_id} ballot id {ballot_id}")]
    MissingVote {
        criterion_id: CriterionId,
        ballot_id: BallotId,
    },

    #[error(transparent)]
    Computation(#[from] StatisticsError),
}

impl AnalysisError {
    /// True for every lookup failure at the storage boundary.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AnalysisError::DecisionNotFound(_)
                | AnalysisError::DecisionUnavailable { .. }
                | AnalysisError::BallotsUnavailable { .. }
                | AnalysisError::CriteriaUnavailable { .. }
                | AnalysisError::VotesUnavailable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn missing_vote_names_the_pair() {
        let err = AnalysisError::MissingVote {
            criterion_id: CriterionId::new(3),
            ballot_id: BallotId::new(8),
        };
        assert_eq!(err.to_string(), "missing vote for criterion id 3 ballot id 8");
        assert!(!err.is_not_found());
    }

    #[test]
    fn query_failures_are_not_found() {
        let err = AnalysisError::VotesUnavailable {
            ballot_id: BallotId::new(2),
            source: DomainError::database("connection reset"),
        };
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "failed to load votes for ballot 2: [DATABASE_ERROR] connection reset"
        );
    }

    #[test]
    fn computation_error_is_transparent() {
        let err: AnalysisError = StatisticsError::EmptySample.into();
        assert_eq!(err.to_string(), "cannot compute statistics over an empty sample");
        assert!(!err.is_not_found());
    }

    #[test]
    fn decision_not_found_displays_id() {
        let err = AnalysisError::DecisionNotFound(DecisionId::new(5));
        assert_eq!(err.to_string(), "decision 5 not found");
        assert!(err.is_not_found());

        let source = DomainError::new(ErrorCode::DatabaseError, "timeout");
        let err = AnalysisError::DecisionUnavailable {
            decision_id: DecisionId::new(5),
            source,
        };
        assert!(err.is_not_found());
    }
}
