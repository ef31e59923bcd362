//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, weights, errors)
//! - `decision` - Decisions, criteria, ballots, and votes
//! - `analysis` - Pure per-ballot statistics over a decision

pub mod analysis;
pub mod decision;
pub mod foundation;
