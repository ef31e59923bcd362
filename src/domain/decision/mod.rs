//! Decision module - the records participants create and vote on.
//!
//! A decision owns criteria (weighted dimensions) and ballots (the things
//! being scored). A vote links one criterion to one ballot.

mod records;

pub use records::{Ballot, Criterion, Decision, Vote};
