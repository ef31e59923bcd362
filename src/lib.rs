//! Ballot Stats - Weighted ballot voting with per-ballot statistics.
//!
//! Participants weigh a decision's criteria and cast weighted votes on its
//! ballots. This crate computes, for every ballot, how its votes compare to
//! the criteria's target weights along with central tendency and dispersion
//! of the votes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
