//! In-memory adapters for tests and local development.

mod decision_store;

pub use decision_store::InMemoryDecisionStore;
