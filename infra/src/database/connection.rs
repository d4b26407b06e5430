//! Database connection pool management
//!
//! Connection pooling using SQLx with MySQL, plus health checks and
//! idempotent schema setup.

use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    MySqlPool,
};
use std::str::FromStr;
use std::time::Duration;

use otp_shared::config::DatabaseConfig;

use super::schema::SCHEMA_STATEMENTS;
use crate::InfrastructureError;

const SUPPORTED_SCHEMES: [&str; 2] = ["mysql://", "mariadb://"];

/// MySQL pool shared by the repositories
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
    config: DatabaseConfig,
}

impl DatabasePool {
    /// Connect using `config`
    ///
    /// The pool keeps one warm connection and tests connections before
    /// handing them out.
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let connect_options = Self::connect_options(&config)?;

        tracing::info!(
            max_connections = config.max_connections,
            acquire_timeout_secs = config.connect_timeout,
            "Opening MySQL pool"
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "db_pool_failed", "Could not open MySQL pool");
                InfrastructureError::Database(e)
            })?;

        Ok(Self { pool, config })
    }

    /// Parse connection options from the configured URL
    pub fn connect_options(
        config: &DatabaseConfig,
    ) -> Result<MySqlConnectOptions, InfrastructureError> {
        let url = config.url.trim();
        if !SUPPORTED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
            let scheme = url.split("://").next().unwrap_or_default();
            return Err(InfrastructureError::Config(format!(
                "Unsupported database URL scheme '{}', expected mysql://",
                scheme
            )));
        }

        MySqlConnectOptions::from_str(url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))
    }

    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Round-trip `SELECT 1`
    ///
    /// `Ok(false)` means the server answered with an unexpected value.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let value: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, event = "db_health_failed", "Database health check failed");
                InfrastructureError::Database(e)
            })?;

        if value != 1 {
            tracing::warn!(value, "Database health check returned unexpected value");
        }
        Ok(value == 1)
    }

    /// Create the tables the service needs if they do not exist yet
    pub async fn ensure_schema(&self) -> Result<(), InfrastructureError> {
        tracing::info!("Ensuring database schema");

        for statement in SCHEMA_STATEMENTS {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        tracing::info!("Database schema ready");
        Ok(())
    }

    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }

    /// Wait for checked-out connections and close the pool
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("MySQL pool closed");
    }
}

/// Snapshot of pool usage
#[derive(Debug, Clone)]
pub struct PoolStatistics {
    pub connections: u32,
    pub idle_connections: usize,
    pub max_connections: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "mysql pool {}/{} connections, {} idle",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
