//! AnalyzeDecisionHandler - Query handler computing ballot statistics for a decision.
//!
//! Loads the decision, its ballots, its criteria, and each ballot's votes
//! through the `DecisionReader` port, then hands the snapshot to
//! `BallotAnalyzer`. Reads are sequential; nothing is cached.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::analysis::{
    AnalysisError, BallotAnalysis, BallotAnalyzer, BallotVotes, DecisionSnapshot,
};
use crate::domain::foundation::DecisionId;
use crate::ports::DecisionReader;

/// Query to analyze every ballot of a decision.
#[derive(Debug, Clone)]
pub struct AnalyzeDecisionQuery {
    pub decision_id: DecisionId,
}

/// Result of a successful analysis: one entry per ballot, in ballot order.
pub type AnalyzeDecisionResult = Vec<BallotAnalysis>;

/// Handler for the decision analysis query.
pub struct AnalyzeDecisionHandler {
    reader: Arc<dyn DecisionReader>,
}

impl AnalyzeDecisionHandler {
    pub fn new(reader: Arc<dyn DecisionReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: AnalyzeDecisionQuery,
    ) -> Result<AnalyzeDecisionResult, AnalysisError> {
        let decision_id = query.decision_id;
        debug!(decision_id = %decision_id, "Analyzing decision ballots");

        let result = self
            .load_snapshot(decision_id)
            .await
            .and_then(|snapshot| BallotAnalyzer::analyze(&snapshot));

        match &result {
            Ok(analyses) => {
                debug!(
                    decision_id = %decision_id,
                    ballots = analyses.len(),
                    "Decision analysis complete"
                );
            }
            Err(e) => {
                warn!(decision_id = %decision_id, "Decision analysis failed: {}", e);
            }
        }

        result
    }

    async fn load_snapshot(&self, decision_id: DecisionId) -> Result<DecisionSnapshot, AnalysisError> {
        let decision = self
            .reader
            .get_decision(decision_id)
            .await
            .map_err(|source| AnalysisError::DecisionUnavailable {
                decision_id,
                source,
            })?
            .ok_or(AnalysisError::DecisionNotFound(decision_id))?;

        let ballots = self
            .reader
            .list_ballots(decision_id)
            .await
            .map_err(|source| AnalysisError::BallotsUnavailable {
                decision_id,
                source,
            })?;

        let criteria = self
            .reader
            .list_criteria(decision_id)
            .await
            .map_err(|source| AnalysisError::CriteriaUnavailable {
                decision_id,
                source,
            })?;

        let mut ballot_votes = Vec::with_capacity(ballots.len());
        for ballot in ballots {
            let votes = self
                .reader
                .list_votes(ballot.id)
                .await
                .map_err(|source| AnalysisError::VotesUnavailable {
                    ballot_id: ballot.id,
                    source,
                })?;
            ballot_votes.push(BallotVotes { ballot, votes });
        }

        Ok(DecisionSnapshot {
            decision,
            criteria,
            ballots: ballot_votes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::StatisticsError;
    use crate::domain::decision::{Ballot, Criterion, Decision, Vote};
    use crate::domain::foundation::{BallotId, CriterionId, DomainError, ErrorCode};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    #[derive(Clone, Copy, PartialEq)]
    enum FailAt {
        Nothing,
        Decision,
        Ballots,
        Criteria,
        Votes(i32),
    }

    struct MockDecisionReader {
        decision: Option<Decision>,
        ballots: Vec<Ballot>,
        criteria: Vec<Criterion>,
        votes: Vec<Vote>,
        fail_at: FailAt,
        vote_queries: AtomicUsize,
    }

    impl MockDecisionReader {
        fn new() -> Self {
            Self {
                decision: Some(Decision::new(DecisionId::new(1), "Team offsite").unwrap()),
                ballots: vec![],
                criteria: vec![],
                votes: vec![],
                fail_at: FailAt::Nothing,
                vote_queries: AtomicUsize::new(0),
            }
        }

        fn with_criteria(mut self, weights: &[i32]) -> Self {
            self.criteria = weights
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let id = i as i32 + 1;
                    Criterion::new(CriterionId::new(id), DecisionId::new(1), format!("c{}", id), *w)
                        .unwrap()
                })
                .collect();
            self
        }

        fn with_ballot(mut self, id: i32, votes: &[i32]) -> Self {
            self.ballots
                .push(Ballot::new(BallotId::new(id), DecisionId::new(1), format!("b{}", id)).unwrap());
            for (i, weight) in votes.iter().enumerate() {
                self.votes.push(Vote {
                    criterion_id: CriterionId::new(i as i32 + 1),
                    ballot_id: BallotId::new(id),
                    weight: *weight,
                });
            }
            self
        }

        fn without_decision(mut self) -> Self {
            self.decision = None;
            self
        }

        fn failing_at(mut self, fail_at: FailAt) -> Self {
            self.fail_at = fail_at;
            self
        }

        fn simulated() -> DomainError {
            DomainError::new(ErrorCode::DatabaseError, "Simulated failure")
        }
    }

    #[async_trait]
    impl DecisionReader for MockDecisionReader {
        async fn get_decision(&self, _id: DecisionId) -> Result<Option<Decision>, DomainError> {
            if self.fail_at == FailAt::Decision {
                return Err(Self::simulated());
            }
            Ok(self.decision.clone())
        }

        async fn list_ballots(&self, _id: DecisionId) -> Result<Vec<Ballot>, DomainError> {
            if self.fail_at == FailAt::Ballots {
                return Err(Self::simulated());
            }
            Ok(self.ballots.clone())
        }

        async fn list_criteria(&self, _id: DecisionId) -> Result<Vec<Criterion>, DomainError> {
            if self.fail_at == FailAt::Criteria {
                return Err(Self::simulated());
            }
            Ok(self.criteria.clone())
        }

        async fn list_votes(&self, ballot_id: BallotId) -> Result<Vec<Vote>, DomainError> {
            self.vote_queries.fetch_add(1, Ordering::SeqCst);
            if self.fail_at == FailAt::Votes(ballot_id.value()) {
                return Err(Self::simulated());
            }
            Ok(self
                .votes
                .iter()
                .filter(|v| v.ballot_id == ballot_id)
                .copied()
                .collect())
        }
    }

    fn query() -> AnalyzeDecisionQuery {
        AnalyzeDecisionQuery {
            decision_id: DecisionId::new(1),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_analyze_returns_one_entry_per_ballot() {
        let reader = Arc::new(
            MockDecisionReader::new()
                .with_criteria(&[10, 20, 30])
                .with_ballot(1, &[5, 20, 15])
                .with_ballot(2, &[10, 10, 10]),
        );
        let handler = AnalyzeDecisionHandler::new(reader.clone());

        let result = handler.handle(query()).await.unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|a| a.statistics.len() == 3));
        assert_eq!(result[0].median, 15.0);
        assert_eq!(result[1].population_variance, 0.0);
        assert_eq!(reader.vote_queries.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_analyze_unknown_decision_is_not_found() {
        let reader = Arc::new(MockDecisionReader::new().without_decision());
        let handler = AnalyzeDecisionHandler::new(reader);

        let err = handler.handle(query()).await.unwrap_err();
        assert!(matches!(err, AnalysisError::DecisionNotFound(id) if id == DecisionId::new(1)));
    }

    #[tokio::test]
    async fn test_analyze_propagates_decision_lookup_failure() {
        let reader = Arc::new(MockDecisionReader::new().failing_at(FailAt::Decision));
        let handler = AnalyzeDecisionHandler::new(reader);

        let err = handler.handle(query()).await.unwrap_err();
        assert!(matches!(err, AnalysisError::DecisionUnavailable { .. }));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_analyze_propagates_ballot_query_failure() {
        let reader = Arc::new(
            MockDecisionReader::new()
                .with_criteria(&[10])
                .with_ballot(1, &[5])
                .failing_at(FailAt::Ballots),
        );
        let handler = AnalyzeDecisionHandler::new(reader);

        let err = handler.handle(query()).await.unwrap_err();
        assert!(matches!(err, AnalysisError::BallotsUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_analyze_propagates_criteria_query_failure() {
        let reader = Arc::new(
            MockDecisionReader::new()
                .with_criteria(&[10])
                .with_ballot(1, &[5])
                .failing_at(FailAt::Criteria),
        );
        let handler = AnalyzeDecisionHandler::new(reader);

        let err = handler.handle(query()).await.unwrap_err();
        assert!(matches!(err, AnalysisError::CriteriaUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_analyze_stops_at_first_vote_query_failure() {
        let reader = Arc::new(
            MockDecisionReader::new()
                .with_criteria(&[10])
                .with_ballot(1, &[5])
                .with_ballot(2, &[6])
                .with_ballot(3, &[7])
                .failing_at(FailAt::Votes(2)),
        );
        let handler = AnalyzeDecisionHandler::new(reader.clone());

        let err = handler.handle(query()).await.unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::VotesUnavailable { ballot_id, .. } if ballot_id == BallotId::new(2)
        ));
        assert_eq!(reader.vote_queries.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_analyze_reports_missing_vote() {
        let reader = Arc::new(
            MockDecisionReader::new()
                .with_criteria(&[10, 20, 30])
                .with_ballot(1, &[5, 20, 15])
                .with_ballot(2, &[5, 20]),
        );
        let handler = AnalyzeDecisionHandler::new(reader);

        let err = handler.handle(query()).await.unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::MissingVote { criterion_id, ballot_id }
                if criterion_id == CriterionId::new(3) && ballot_id == BallotId::new(2)
        ));
    }

    #[tokio::test]
    async fn test_analyze_decision_without_criteria_fails() {
        let reader = Arc::new(MockDecisionReader::new().with_ballot(1, &[]));
        let handler = AnalyzeDecisionHandler::new(reader);

        let err = handler.handle(query()).await.unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Computation(StatisticsError::EmptySample)
        ));
    }

    #[tokio::test]
    async fn test_analyze_decision_without_ballots_is_empty() {
        let reader = Arc::new(MockDecisionReader::new().with_criteria(&[10, 20]));
        let handler = AnalyzeDecisionHandler::new(reader.clone());

        let result = handler.handle(query()).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(reader.vote_queries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_analyze_is_idempotent() {
        let reader = Arc::new(
            MockDecisionReader::new()
                .with_criteria(&[10, 20, 30])
                .with_ballot(1, &[5, 20, 15])
                .with_ballot(2, &[1, 2, 3]),
        );
        let handler = AnalyzeDecisionHandler::new(reader);

        let first = handler.handle(query()).await.unwrap();
        let second = handler.handle(query()).await.unwrap();
        assert_eq!(first, second);
    }
}
