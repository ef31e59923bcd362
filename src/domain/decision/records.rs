//! Plain decision records as returned by the data-access port.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    BallotId, CriterionId, CriterionWeight, DecisionId, DomainError, ErrorCode, ValidationError,
};

/// Top-level entity under which criteria and ballots are organized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    #[serde(rename = "decision_id")]
    pub id: DecisionId,
    pub name: String,
}

impl Decision {
    /// Creates a decision record, rejecting an empty name.
    pub fn new(id: DecisionId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = non_empty("name", name.into())?;
        Ok(Self { id, name })
    }
}

/// A named, weighted dimension on which ballots are scored.
///
/// `weight` is kept as the raw stored value. New criteria are validated
/// through [`CriterionWeight`], but rows written before that rule existed
/// may still carry zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    #[serde(rename = "criterion_id")]
    pub id: CriterionId,
    pub decision_id: DecisionId,
    pub name: String,
    pub weight: i32,
}

impl Criterion {
    /// Creates a criterion record, enforcing a non-empty name and a
    /// strictly positive weight.
    pub fn new(
        id: CriterionId,
        decision_id: DecisionId,
        name: impl Into<String>,
        weight: i32,
    ) -> Result<Self, ValidationError> {
        let name = non_empty("name", name.into())?;
        let weight = CriterionWeight::try_new(weight)?;
        Ok(Self {
            id,
            decision_id,
            name,
            weight: weight.value(),
        })
    }
}

/// A named entity receiving weighted votes across a decision's criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    #[serde(rename = "ballot_id")]
    pub id: BallotId,
    pub decision_id: DecisionId,
    pub name: String,
}

impl Ballot {
    /// Creates a ballot record, rejecting an empty name.
    pub fn new(
        id: BallotId,
        decision_id: DecisionId,
        name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = non_empty("name", name.into())?;
        Ok(Self {
            id,
            decision_id,
            name,
        })
    }
}

/// A single weighted score linking one criterion to one ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub criterion_id: CriterionId,
    pub ballot_id: BallotId,
    pub weight: i32,
}

impl Vote {
    /// Creates a vote after checking that its criterion and ballot belong
    /// to the same decision.
    pub fn cast(criterion: &Criterion, ballot: &Ballot, weight: i32) -> Result<Self, DomainError> {
        if criterion.decision_id != ballot.decision_id {
            return Err(DomainError::new(
                ErrorCode::DecisionMismatch,
                format!(
                    "criterion belongs to decision {} while ballot belongs to decision {}",
                    criterion.decision_id, ballot.decision_id
                ),
            )
            .with_detail("criterion_id", criterion.id.to_string())
            .with_detail("ballot_id", ballot.id.to_string()));
        }

        Ok(Self {
            criterion_id: criterion.id,
            ballot_id: ballot.id,
            weight,
        })
    }

    /// Returns true if this vote is keyed by the given pair.
    pub fn matches(&self, criterion_id: CriterionId, ballot_id: BallotId) -> bool {
        self.criterion_id == criterion_id && self.ballot_id == ballot_id
    }
}

fn non_empty(field: &str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(value)
}
