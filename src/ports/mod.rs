//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionReader` - Read access to decisions, criteria, ballots, votes

mod decision_reader;

pub use decision_reader::DecisionReader;
