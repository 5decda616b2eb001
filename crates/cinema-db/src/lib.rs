use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::env;
use std::time::Duration;

pub mod entities;
pub mod error;
pub mod repositories;

/// Re-export for convenience
pub use sea_orm;

pub use error::StoreError;

const DEFAULT_DATABASE_URL: &str = "sqlite://cinema.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Self {
            url,
            max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            min_connections: env_or("DB_MIN_CONNECTIONS", 1),
            connect_timeout_secs: env_or("DB_CONNECT_TIMEOUT", 8),
            idle_timeout_secs: env_or("DB_IDLE_TIMEOUT", 300),
        }
    }

    /// A private in-memory SQLite database.
    ///
    /// Every SQLite connection to `:memory:` opens its own database, so the
    /// pool is pinned to exactly one connection.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_secs: 8,
            idle_timeout_secs: 300,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Close the underlying pool. Clones share the pool, so this closes it for
    /// every holder. Called once, after the server has stopped.
    pub async fn close(&self) -> Result<(), DbErr> {
        self.db.clone().close().await
    }
}

/// Connect to the database and return a connection pool
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(&config.url);
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    tracing::debug!(max = config.max_connections, "opening database pool");
    Database::connect(opt).await
}
