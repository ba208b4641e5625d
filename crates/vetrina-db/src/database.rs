use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use vetrina_core::AppError;

use crate::client_repository::ClientRepository;
use crate::config::DatabaseConfig;
use crate::contact_repository::ContactRepository;
use crate::newsletter_repository::NewsletterRepository;
use crate::project_repository::ProjectRepository;

/// Central database facade — owns the connection pool, runs migrations,
/// and vends repository instances.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the SQLite database with the given configuration, creating the
    /// file if it does not exist yet.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| AppError::Config(format!("Invalid DATABASE_URL '{}': {e}", config.url)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect: {e}")))?;

        Ok(Self { pool })
    }

    /// Create a `Database` from an existing pool (useful for testing).
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run all pending migrations, creating the schema on a fresh database.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
        tracing::info!("database migrations complete");
        Ok(())
    }

    /// Get a [`ProjectRepository`] backed by this pool.
    pub fn project_repo(&self) -> ProjectRepository {
        ProjectRepository::new(self.pool.clone())
    }

    /// Get a [`ClientRepository`] backed by this pool.
    pub fn client_repo(&self) -> ClientRepository {
        ClientRepository::new(self.pool.clone())
    }

    /// Get a [`ContactRepository`] backed by this pool.
    pub fn contact_repo(&self) -> ContactRepository {
        ContactRepository::new(self.pool.clone())
    }

    /// Get a [`NewsletterRepository`] backed by this pool.
    pub fn newsletter_repo(&self) -> NewsletterRepository {
        NewsletterRepository::new(self.pool.clone())
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
