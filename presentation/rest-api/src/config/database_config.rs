use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_STATEMENT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// Database settings read from the environment
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub pool: DatabaseConfig,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS (default: 5)
    /// - DATABASE_ACQUIRE_TIMEOUT_SECS (default: 30)
    /// - DATABASE_STATEMENT_TIMEOUT_SECS (default: 30)
    /// - DATABASE_MIGRATIONS_PATH (default: "./migrations")
    ///
    /// # Errors
    /// Returns error if DATABASE_URL is missing or a numeric variable does not parse
    pub fn from_env() -> anyhow::Result<Self> {
        let connection_string = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let pool = DatabaseConfig {
            connection_string,
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            acquire_timeout: Duration::from_secs(env_or(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?),
            statement_timeout: Duration::from_secs(env_or(
                "DATABASE_STATEMENT_TIMEOUT_SECS",
                DEFAULT_STATEMENT_TIMEOUT_SECS,
            )?),
        };

        Ok(Self {
            pool,
            migrations_path: env::var("DATABASE_MIGRATIONS_PATH")
                .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }
}

fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => parse_setting(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_setting<T>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{key} has an invalid value: {raw}"))
}

/// Connect the pool and apply pending migrations
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&settings.pool).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_numeric_setting() {
        let value: u32 = parse_setting("DATABASE_MAX_CONNECTIONS", " 12 ").unwrap();
        assert_eq!(value, 12);
    }

    #[test]
    fn should_name_the_variable_on_parse_failure() {
        let error = parse_setting::<u64>("DATABASE_STATEMENT_TIMEOUT_SECS", "soon").unwrap_err();
        assert!(error.to_string().contains("DATABASE_STATEMENT_TIMEOUT_SECS"));
    }
}
