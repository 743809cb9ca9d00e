//! Suite-scoped database harness for integration tests.
//!
//! One [`TestDb`] is created per suite. It connects to the store named by
//! `TEST_DATABASE_URL` (falling back to `DATABASE_URL`), and degrades to a
//! full no-op when neither is set, so suites run anywhere without special
//! casing.

use std::collections::HashMap;

use common::env::{first_non_empty, process_vars};
use common::error::{Result, StorylineError};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

/// Tables purged by [`TestDb::reset`], in deletion order.
///
/// `stories` references both `assets` and `users`, and `assets` references
/// `users`: dependents first, owning rows last.
pub const RESET_TABLES: [&str; 3] = ["stories", "assets", "users"];

/// Resolve the connection string for the test store.
///
/// Prefers `TEST_DATABASE_URL` over `DATABASE_URL`. Unset and empty values
/// both count as absent.
pub fn resolve_database_url(vars: &HashMap<String, String>) -> Option<String> {
    first_non_empty(vars, &["TEST_DATABASE_URL", "DATABASE_URL"])
}

/// Suite-scoped handle to the test database.
///
/// Holds at most one connection pool, shared by every test in the suite.
/// When no connection string is configured the pool stays absent and all
/// store operations succeed as no-ops; callers that need the store itself
/// check [`TestDb::is_enabled`] first.
pub struct TestDb {
    pool: Option<PgPool>,
}

impl TestDb {
    /// Connect according to the process environment.
    ///
    /// Fail-fast: a configured but unreachable store propagates the
    /// connection error and fails the suite. There is no retry.
    pub async fn setup() -> Result<Self> {
        Self::from_vars(&process_vars()).await
    }

    /// Connect according to an explicit variable map (for testing).
    pub async fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let Some(url) = resolve_database_url(vars) else {
            debug!("No test database configured, harness runs as a no-op");
            return Ok(Self { pool: None });
        };

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .map_err(|e| {
                StorylineError::Database(format!("Failed to connect to test database: {}", e))
            })?;

        info!("Test database connection established");

        Ok(Self { pool: Some(pool) })
    }

    /// Wrap an externally managed pool (e.g. one provisioned by `#[sqlx::test]`).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Whether a store is attached to this suite.
    pub fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    /// The shared pool, when one exists. Callers must handle absence.
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Apply the workspace migrations to the attached store.
    ///
    /// Explicit rather than part of [`TestDb::setup`]: suites pointed at a
    /// pre-migrated store connect without touching the schema.
    pub async fn migrate(&self) -> Result<()> {
        let Some(pool) = &self.pool else {
            return Ok(());
        };

        sqlx::migrate!("../../migrations")
            .run(pool)
            .await
            .map_err(|e| StorylineError::Database(format!("Failed to run migrations: {}", e)))?;

        info!("Test database migrations applied");
        Ok(())
    }

    /// Delete every row from the application tables, dependents first.
    ///
    /// Runs before each test so the body starts from a known-clean store.
    /// Unconditional delete-all, no retry; a failure propagates so the test
    /// aborts instead of running against leftover state.
    pub async fn reset(&self) -> Result<()> {
        let Some(pool) = &self.pool else {
            return Ok(());
        };

        // Order matters: stories reference assets and users, assets
        // reference users.
        sqlx::query("DELETE FROM stories")
            .execute(pool)
            .await
            .map_err(|e| StorylineError::Database(format!("Failed to clear stories: {}", e)))?;

        sqlx::query("DELETE FROM assets")
            .execute(pool)
            .await
            .map_err(|e| StorylineError::Database(format!("Failed to clear assets: {}", e)))?;

        sqlx::query("DELETE FROM users")
            .execute(pool)
            .await
            .map_err(|e| StorylineError::Database(format!("Failed to clear users: {}", e)))?;

        debug!("Application tables cleared");
        Ok(())
    }

    /// Release the suite's connection handle.
    ///
    /// Consumes `self` so a closed handle cannot leak into a later suite.
    pub async fn close(self) {
        if let Some(pool) = self.pool {
            pool.close().await;
            info!("Test database connection closed");
        }
    }
}
