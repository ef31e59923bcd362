//! PostgreSQL implementation of DecisionReader.
//!
//! Rows are ordered by primary key so callers see a stable retrieval order.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::decision::{Ballot, Criterion, Decision, Vote};
use crate::domain::foundation::{BallotId, CriterionId, DecisionId, DomainError};
use crate::ports::DecisionReader;

/// PostgreSQL implementation of the DecisionReader port.
#[derive(Clone)]
pub struct PostgresDecisionReader {
    pool: PgPool,
}

impl PostgresDecisionReader {
    /// Creates a new PostgresDecisionReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DecisionReader for PostgresDecisionReader {
    async fn get_decision(&self, id: DecisionId) -> Result<Option<Decision>, DomainError> {
        let row = sqlx::query("SELECT decision_id, name FROM decision WHERE decision_id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch decision: {}", e)))?;

        row.map(row_to_decision).transpose()
    }

    async fn list_ballots(&self, decision_id: DecisionId) -> Result<Vec<Ballot>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT ballot_id, decision_id, name
            FROM ballot
            WHERE decision_id = $1
            ORDER BY ballot_id
            "#,
        )
        .bind(decision_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list ballots: {}", e)))?;

        rows.into_iter().map(row_to_ballot).collect()
    }

    async fn list_criteria(&self, decision_id: DecisionId) -> Result<Vec<Criterion>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT criterion_id, decision_id, name, weight
            FROM criterion
            WHERE decision_id = $1
            ORDER BY criterion_id
            "#,
        )
        .bind(decision_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list criteria: {}", e)))?;

        rows.into_iter().map(row_to_criterion).collect()
    }

    async fn list_votes(&self, ballot_id: BallotId) -> Result<Vec<Vote>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT criterion_id, ballot_id, weight
            FROM vote
            WHERE ballot_id = $1
            ORDER BY criterion_id
            "#,
        )
        .bind(ballot_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list votes: {}", e)))?;

        rows.into_iter().map(row_to_vote).collect()
    }
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

// Rows are taken as stored; creation-time rules are not re-applied here.

fn row_to_decision(row: PgRow) -> Result<Decision, DomainError> {
    Ok(Decision {
        id: DecisionId::new(column(&row, "decision_id")?),
        name: column(&row, "name")?,
    })
}

fn row_to_ballot(row: PgRow) -> Result<Ballot, DomainError> {
    Ok(Ballot {
        id: BallotId::new(column(&row, "ballot_id")?),
        decision_id: DecisionId::new(column(&row, "decision_id")?),
        name: column(&row, "name")?,
    })
}

fn row_to_criterion(row: PgRow) -> Result<Criterion, DomainError> {
    Ok(Criterion {
        id: CriterionId::new(column(&row, "criterion_id")?),
        decision_id: DecisionId::new(column(&row, "decision_id")?),
        name: column(&row, "name")?,
        weight: column(&row, "weight")?,
    })
}

fn row_to_vote(row: PgRow) -> Result<Vote, DomainError> {
    Ok(Vote {
        criterion_id: CriterionId::new(column(&row, "criterion_id")?),
        ballot_id: BallotId::new(column(&row, "ballot_id")?),
        weight: column(&row, "weight")?,
    })
}
