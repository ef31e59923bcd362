//! Analysis Module - Per-ballot vote statistics for a decision.
//!
//! # Components
//!
//! - `VoteSample` - Non-empty numeric sample with descriptive statistics
//! - `BallotStatistic` / `BallotAnalysis` - Output records, one per ballot
//! - `BallotAnalyzer` - Joins criteria and votes, then summarizes each ballot
//!
//! Everything here is pure. Loading the records is the job of the
//! `DecisionReader` port and the application handler that drives it.

mod ballot_analysis;
mod ballot_analyzer;
mod errors;
mod statistics;

pub use ballot_analysis::{percentage_of, BallotAnalysis, BallotStatistic};
pub use ballot_analyzer::{BallotAnalyzer, BallotVotes, DecisionSnapshot};
pub use errors::{AnalysisError, StatisticsError};
pub use statistics::{SampleSummary, VoteSample};
