//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST endpoints
//! - `memory` - In-memory decision store
//! - `postgres` - PostgreSQL readers

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryDecisionStore;
pub use postgres::PostgresDecisionReader;
