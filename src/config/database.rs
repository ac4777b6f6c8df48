//! Storage configuration
//!
//! A PostgreSQL URL selects the sqlx-backed repositories; without one the
//! server keeps events, conversations, tasks and vendor profiles in memory.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Hard ceiling on pool size.
const MAX_POOL_CONNECTIONS: u32 = 100;

/// Where planner data lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage<'a> {
    Memory,
    Postgres(&'a str),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://` URL; blank means in-memory.
    pub url: Option<String>,

    pub pool: PoolConfig,

    /// Apply `migrations/` before serving.
    pub run_migrations: bool,
}

/// sqlx pool sizing and connection lifetimes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

impl DatabaseConfig {
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    pub fn storage(&self) -> Storage<'_> {
        match self.url() {
            Some(url) => Storage::Postgres(url),
            None => Storage::Memory,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Storage::Postgres(url) = self.storage() {
            if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
                return Err(ValidationError::InvalidDatabaseUrl);
            }
            self.pool.validate()?;
        }
        Ok(())
    }
}

impl PoolConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.max_connections == 0 || self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > MAX_POOL_CONNECTIONS {
            return Err(ValidationError::PoolSizeTooLarge(MAX_POOL_CONNECTIONS));
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            min_connections: 1,
            max_connections: 10,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postgres(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn no_url_selects_memory_storage() {
        let config = DatabaseConfig::default();
        assert_eq!(config.storage(), Storage::Memory);
        assert!(!config.run_migrations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_url_selects_memory_storage() {
        assert_eq!(postgres("   ").storage(), Storage::Memory);
    }

    #[test]
    fn url_selects_postgres_storage() {
        let config = postgres(" postgresql://planam@localhost/planam ");
        assert_eq!(
            config.storage(),
            Storage::Postgres("postgresql://planam@localhost/planam")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_postgres_url_is_rejected() {
        assert!(matches!(
            postgres("mysql://localhost/planam").validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        ));
    }

    #[test]
    fn pool_bounds_are_checked_only_for_postgres() {
        let mut config = DatabaseConfig::default();
        config.pool.max_connections = 0;
        assert!(config.validate().is_ok());

        config.url = Some("postgres://localhost/planam".to_string());
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPoolSize)
        ));

        config.pool.max_connections = 150;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::PoolSizeTooLarge(100))
        ));
    }

    #[test]
    fn pool_durations() {
        let pool = PoolConfig {
            acquire_timeout_secs: 5,
            ..Default::default()
        };
        assert_eq!(pool.acquire_timeout(), Duration::from_secs(5));
        assert_eq!(pool.idle_timeout(), Duration::from_secs(600));
        assert_eq!(pool.max_lifetime(), Duration::from_secs(1800));
    }
}
