//! Decision reader port (read side).
//!
//! Defines the four reads the ballot analysis needs. Implementations return
//! rows in a stable order; callers keep that order as-is.

use async_trait::async_trait;

use crate::domain::decision::{Ballot, Criterion, Decision, Vote};
use crate::domain::foundation::{BallotId, DecisionId, DomainError};

/// Reader port for decision records.
#[async_trait]
pub trait DecisionReader: Send + Sync {
    /// Get a decision by ID.
    ///
    /// Returns `None` if not found.
    async fn get_decision(&self, id: DecisionId) -> Result<Option<Decision>, DomainError>;

    /// List all ballots belonging to a decision.
    async fn list_ballots(&self, decision_id: DecisionId) -> Result<Vec<Ballot>, DomainError>;

    /// List all criteria belonging to a decision.
    async fn list_criteria(&self, decision_id: DecisionId) -> Result<Vec<Criterion>, DomainError>;

    /// List every vote cast on a ballot.
    async fn list_votes(&self, ballot_id: BallotId) -> Result<Vec<Vote>, DomainError>;
}
