//! Ballot Analyzer - Joins decision records and computes per-ballot statistics.

use super::{AnalysisError, BallotAnalysis, BallotStatistic, StatisticsError, VoteSample};
use crate::domain::decision::{Ballot, Criterion, Decision, Vote};

/// A ballot together with the votes fetched for it.
#[derive(Debug, Clone)]
pub struct BallotVotes {
    pub ballot: Ballot,
    pub votes: Vec<Vote>,
}

/// Everything needed to analyze one decision, in retrieval order.
#[derive(Debug, Clone)]
pub struct DecisionSnapshot {
    pub decision: Decision,
    pub criteria: Vec<Criterion>,
    pub ballots: Vec<BallotVotes>,
}

/// Per-ballot statistics over a decision snapshot.
pub struct BallotAnalyzer;

impl BallotAnalyzer {
    /// Analyzes every ballot of the snapshot.
    ///
    /// # Algorithm
    /// 1. Join: for each ballot, for each criterion, find the matching vote.
    ///    Every ballot is joined before anything is computed.
    /// 2. Statistics: build the [`BallotStatistic`] rows and summarize the
    ///    voted values of each ballot.
    ///
    /// Ballot and criterion order is taken from the snapshot as-is.
    ///
    /// # Errors
    /// - `MissingVote` for the first (ballot, criterion) pair without a vote
    /// - `Computation(ZeroCriterionWeight)` if a criterion has zero weight
    /// - `Computation(EmptySample)` if the decision has ballots but no criteria
    pub fn analyze(snapshot: &DecisionSnapshot) -> Result<Vec<BallotAnalysis>, AnalysisError> {
        let joined = snapshot
            .ballots
            .iter()
            .map(|entry| -> Result<_, AnalysisError> {
                let pairs = Self::join_ballot(entry, &snapshot.criteria)?;
                Ok((&entry.ballot, pairs))
            })
            .collect::<Result<Vec<_>, AnalysisError>>()?;

        joined
            .into_iter()
            .map(|(ballot, pairs)| -> Result<BallotAnalysis, AnalysisError> {
                let stats = Self::ballot_statistics(&pairs)?;
                let sample = VoteSample::from_votes(stats.iter().map(|s| s.voted))?;
                Ok(BallotAnalysis::new(
                    snapshot.decision.id,
                    ballot,
                    stats,
                    sample.summarize(),
                ))
            })
            .collect()
    }

    fn join_ballot<'a>(
        entry: &'a BallotVotes,
        criteria: &'a [Criterion],
    ) -> Result<Vec<(&'a Criterion, &'a Vote)>, AnalysisError> {
        let ballot_id = entry.ballot.id;

        criteria
            .iter()
            .map(|criterion| {
                entry
                    .votes
                    .iter()
                    .find(|v| v.matches(criterion.id, ballot_id))
                    .map(|vote| (criterion, vote))
                    .ok_or(AnalysisError::MissingVote {
                        criterion_id: criterion.id,
                        ballot_id,
                    })
            })
            .collect()
    }

    fn ballot_statistics(
        pairs: &[(&Criterion, &Vote)],
    ) -> Result<Vec<BallotStatistic>, StatisticsError> {
        pairs
            .iter()
            .map(|(criterion, vote)| {
                if criterion.weight == 0 {
                    return Err(StatisticsError::ZeroCriterionWeight {
                        criterion_id: criterion.id,
                    });
                }
                Ok(BallotStatistic::new(criterion, vote.weight))
            })
            .collect()
    }
}
