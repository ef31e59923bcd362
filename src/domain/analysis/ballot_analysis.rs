//! Per-ballot analysis records returned to callers.
//!
//! Field names are serialized exactly as the existing frontend expects them.

use serde::Serialize;

use super::statistics::SampleSummary;
use crate::domain::decision::{Ballot, Criterion};
use crate::domain::foundation::{BallotId, CriterionId, DecisionId};

/// One criterion's vote on a ballot, with the vote as a share of the
/// criterion's target weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallotStatistic {
    pub criterion_id: CriterionId,
    pub criterion_name: String,
    pub criterion_weight: i32,
    pub voted: i32,
    pub perc: f64,
}

impl BallotStatistic {
    /// Builds the row for `criterion` given the voted weight.
    ///
    /// The caller must have rejected zero-weight criteria.
    pub(crate) fn new(criterion: &Criterion, voted: i32) -> Self {
        Self {
            criterion_id: criterion.id,
            criterion_name: criterion.name.clone(),
            criterion_weight: criterion.weight,
            voted,
            perc: percentage_of(voted, criterion.weight),
        }
    }
}

/// `voted / weight * 100`.
pub fn percentage_of(voted: i32, weight: i32) -> f64 {
    (f64::from(voted) / f64::from(weight)) * 100.0
}

/// Statistical summary of all votes cast on one ballot.
///
/// `average` and `mean` hold the same value; both are kept because
/// consumers read both keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallotAnalysis {
    pub decision_id: DecisionId,
    pub ballot_id: BallotId,
    pub ballot_name: String,
    pub statistics: Vec<BallotStatistic>,
    #[serde(rename = "min_vote")]
    pub min: f64,
    #[serde(rename = "max_vote")]
    pub max: f64,
    #[serde(rename = "avg_vote")]
    pub average: f64,
    #[serde(rename = "mean_vote")]
    pub mean: f64,
    #[serde(rename = "median_vote")]
    pub median: f64,
    #[serde(rename = "population_variance_vote")]
    pub population_variance: f64,
    #[serde(rename = "sample_variance_vote")]
    pub sample_variance: f64,
    #[serde(rename = "median_absolute_deviation_population_vote")]
    pub median_absolute_deviation_population: f64,
    #[serde(rename = "standard_deviation_population_vote")]
    pub standard_deviation_population: f64,
    #[serde(rename = "standard_deviation_sample_vote")]
    pub standard_deviation_sample: f64,
}

impl BallotAnalysis {
    pub(crate) fn new(
        decision_id: DecisionId,
        ballot: &Ballot,
        statistics: Vec<BallotStatistic>,
        summary: SampleSummary,
    ) -> Self {
        Self {
            decision_id,
            ballot_id: ballot.id,
            ballot_name: ballot.name.clone(),
            statistics,
            min: summary.min,
            max: summary.max,
            average: summary.mean,
            mean: summary.mean,
            median: summary.median,
            population_variance: summary.population_variance,
            sample_variance: summary.sample_variance,
            median_absolute_deviation_population: summary.median_absolute_deviation_population,
            standard_deviation_population: summary.standard_deviation_population,
            standard_deviation_sample: summary.standard_deviation_sample,
        }
    }

    /// The voted weights in criterion order.
    pub fn voted_values(&self) -> Vec<i32> {
        self.statistics.iter().map(|s| s.voted).collect()
    }
}
