//! Criterion weight value object (strictly positive).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// The target weight of a criterion.
///
/// Votes are expressed relative to this value, so it must be strictly
/// positive. Zero and negative weights are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct CriterionWeight(i32);

impl CriterionWeight {
    /// Smallest accepted weight.
    pub const MIN: i32 = 1;

    /// Creates a CriterionWeight, returning error if not strictly positive.
    pub fn try_new(value: i32) -> Result<Self, ValidationError> {
        if value < Self::MIN {
            return Err(ValidationError::out_of_range(
                "weight",
                Self::MIN,
                i32::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as i32.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for CriterionWeight {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<CriterionWeight> for i32 {
    fn from(weight: CriterionWeight) -> Self {
        weight.0
    }
}

impl fmt::Display for CriterionWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
