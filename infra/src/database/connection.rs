//! MySQL connection pool management.

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use gz_shared::config::DatabaseConfig;

/// Wrapper around the SQLx MySQL pool, built from [`DatabaseConfig`]
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Connect to MySQL using the given configuration.
    ///
    /// # Arguments
    /// * `config` - Connection URL and pool sizing parameters
    ///
    /// # Returns
    /// A connected pool, or the underlying SQLx error
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .connect(&config.url)
            .await?;

        info!(
            max_connections = config.max_connections,
            "database pool established"
        );

        Ok(Self { pool })
    }

    /// Clone the inner pool handle for repository construction
    pub fn pool(&self) -> MySqlPool {
        self.pool.clone()
    }

    /// Verify the pool can reach the database
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
