//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the ballot statistics domain.

mod errors;
mod ids;
mod weight;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BallotId, CriterionId, DecisionId};
pub use weight::CriterionWeight;
