//! Runtime settings for the ballot-stats server.
//!
//! Settings come from `BALLOT_STATS__<SECTION>__<KEY>` environment variables,
//! optionally seeded from a `.env` file:
//!
//! ```text
//! BALLOT_STATS__DATABASE__URL=postgresql://localhost/ballots
//! BALLOT_STATS__SERVER__PORT=3000
//! BALLOT_STATS__SERVER__ENVIRONMENT=production
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "BALLOT_STATS";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Reads and validates settings from the process environment.
    ///
    /// # Errors
    ///
    /// `ConfigError::Source` when a variable is missing or has the wrong
    /// type, `ConfigError::Invalid` when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()
    }
}
