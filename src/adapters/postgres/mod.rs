//! PostgreSQL adapters - Database implementations for reader ports.
//!
//! - `PostgresDecisionReader` - Decision, ballot, criterion, and vote queries

mod decision_reader;

pub use decision_reader::PostgresDecisionReader;
