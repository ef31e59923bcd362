//! In-memory decision store.
//!
//! Implements `DecisionReader` over process-local state and exposes the
//! validated write operations that keep that state analyzable. Used by tests
//! and local development; rows are returned in insertion order.

use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::decision::{Ballot, Criterion, Decision, Vote};
use crate::domain::foundation::{BallotId, CriterionId, DecisionId, DomainError, ErrorCode};
use crate::ports::DecisionReader;

#[derive(Default)]
struct StoreState {
    decisions: Vec<Decision>,
    criteria: Vec<Criterion>,
    ballots: Vec<Ballot>,
    votes: Vec<Vote>,
    last_decision_id: i32,
    last_criterion_id: i32,
    last_ballot_id: i32,
}

impl StoreState {
    fn require_decision(&self, id: DecisionId, owned: &str) -> Result<(), DomainError> {
        if self.decisions.iter().any(|d| d.id == id) {
            return Ok(());
        }
        Err(DomainError::new(
            ErrorCode::DecisionNotFound,
            format!(
                "decision {} does not exist, {} should belong to an existing decision",
                id, owned
            ),
        ))
    }
}

/// Decision storage held entirely in memory.
///
/// Identifiers are assigned sequentially per entity kind, starting at 1.
#[derive(Default)]
pub struct InMemoryDecisionStore {
    state: RwLock<StoreState>,
}

impl InMemoryDecisionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decision.
    pub fn create_decision(&self, name: impl Into<String>) -> Result<Decision, DomainError> {
        let mut state = self.write()?;
        let decision = Decision::new(DecisionId::new(state.last_decision_id + 1), name)?;
        state.last_decision_id += 1;
        state.decisions.push(decision.clone());
        Ok(decision)
    }

    /// Creates a criterion under an existing decision.
    ///
    /// The weight must be strictly positive.
    pub fn create_criterion(
        &self,
        decision_id: DecisionId,
        name: impl Into<String>,
        weight: i32,
    ) -> Result<Criterion, DomainError> {
        let mut state = self.write()?;
        state.require_decision(decision_id, "criterion")?;

        let id = CriterionId::new(state.last_criterion_id + 1);
        let criterion = Criterion::new(id, decision_id, name, weight)?;
        state.last_criterion_id += 1;
        state.criteria.push(criterion.clone());
        Ok(criterion)
    }

    /// Creates a ballot under an existing decision.
    pub fn create_ballot(
        &self,
        decision_id: DecisionId,
        name: impl Into<String>,
    ) -> Result<Ballot, DomainError> {
        let mut state = self.write()?;
        state.require_decision(decision_id, "ballot")?;

        let id = BallotId::new(state.last_ballot_id + 1);
        let ballot = Ballot::new(id, decision_id, name)?;
        state.last_ballot_id += 1;
        state.ballots.push(ballot.clone());
        Ok(ballot)
    }

    /// Casts a vote for a criterion on a ballot.
    ///
    /// Rejects duplicates for the same pair, unknown criteria or ballots, and
    /// pairs that belong to different decisions.
    pub fn cast_vote(
        &self,
        criterion_id: CriterionId,
        ballot_id: BallotId,
        weight: i32,
    ) -> Result<Vote, DomainError> {
        let mut state = self.write()?;

        if state.votes.iter().any(|v| v.matches(criterion_id, ballot_id)) {
            return Err(DomainError::new(ErrorCode::DuplicateVote, "vote already exists")
                .with_detail("criterion_id", criterion_id.to_string())
                .with_detail("ballot_id", ballot_id.to_string()));
        }

        let criterion = state
            .criteria
            .iter()
            .find(|c| c.id == criterion_id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::CriterionNotFound,
                    format!(
                        "criterion {} does not exist, can't create a vote without an owner",
                        criterion_id
                    ),
                )
            })?;

        let ballot = state
            .ballots
            .iter()
            .find(|b| b.id == ballot_id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::BallotNotFound,
                    format!(
                        "ballot {} does not exist, can't create a vote without an owner",
                        ballot_id
                    ),
                )
            })?;

        let vote = Vote::cast(criterion, ballot, weight)?;
        state.votes.push(vote);
        Ok(vote)
    }

    /// Removes the vote for a pair. Removing a vote that does not exist is a no-op.
    pub fn delete_vote(
        &self,
        criterion_id: CriterionId,
        ballot_id: BallotId,
    ) -> Result<(), DomainError> {
        let mut state = self.write()?;
        state.votes.retain(|v| !v.matches(criterion_id, ballot_id));
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, DomainError> {
        self.state
            .read()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "decision store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, DomainError> {
        self.state
            .write()
            .map_err(|_| DomainError::new(ErrorCode::InternalError, "decision store lock poisoned"))
    }
}

#[async_trait]
impl DecisionReader for InMemoryDecisionStore {
    async fn get_decision(&self, id: DecisionId) -> Result<Option<Decision>, DomainError> {
        Ok(self.read()?.decisions.iter().find(|d| d.id == id).cloned())
    }

    async fn list_ballots(&self, decision_id: DecisionId) -> Result<Vec<Ballot>, DomainError> {
        Ok(self
            .read()?
            .ballots
            .iter()
            .filter(|b| b.decision_id == decision_id)
            .cloned()
            .collect())
    }

    async fn list_criteria(&self, decision_id: DecisionId) -> Result<Vec<Criterion>, DomainError> {
        Ok(self
            .read()?
            .criteria
            .iter()
            .filter(|c| c.decision_id == decision_id)
            .cloned()
            .collect())
    }

    async fn list_votes(&self, ballot_id: BallotId) -> Result<Vec<Vote>, DomainError> {
        Ok(self
            .read()?
            .votes
            .iter()
            .filter(|v| v.ballot_id == ballot_id)
            .copied()
            .collect())
    }
}
