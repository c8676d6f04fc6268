//! Server state and configuration

use crate::db::UserRepository;
use audit_trail::AuditRecorder;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Postgres connection string
    pub database_url: String,
    /// Secret used to sign bearer tokens
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_ttl_seconds: i64,
    /// Maximum number of pooled database connections
    pub max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// `PINPEOPLE_DATABASE_URL` takes precedence over `DATABASE_URL`.
    /// A missing `PINPEOPLE_JWT_SECRET` falls back to a development-only
    /// secret and logs a warning.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("PINPEOPLE_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .map_err(|_| {
                anyhow::anyhow!("PINPEOPLE_DATABASE_URL or DATABASE_URL must be set")
            })?;

        let jwt_secret = match std::env::var("PINPEOPLE_JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!(
                    "PINPEOPLE_JWT_SECRET not set, using development secret; \
                     do not run this configuration in production"
                );
                "pinpeople-dev-secret".to_string()
            }
        };

        let token_ttl_seconds = std::env::var("PINPEOPLE_TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        let max_connections = std::env::var("PINPEOPLE_DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            database_url,
            jwt_secret,
            token_ttl_seconds,
            max_connections,
        })
    }
}

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct PinPeopleServer {
    pub config: Arc<ServerConfig>,
    pub db_pool: PgPool,
    pub users: UserRepository,
    pub audit: AuditRecorder,
}

impl PinPeopleServer {
    /// Connect to the database and build the shared state
    pub async fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "Connected to database"
        );

        Ok(Self::new_with_pool(config, db_pool))
    }

    /// Build the shared state around an existing pool
    ///
    /// Used by tests that bring their own connection.
    pub fn new_with_pool(config: ServerConfig, db_pool: PgPool) -> Self {
        Self {
            config: Arc::new(config),
            users: UserRepository::new(db_pool.clone()),
            audit: AuditRecorder::new(db_pool.clone()),
            db_pool,
        }
    }
}
