//! # Storyline Test Utilities
//!
//! Shared test utilities for Storyline integration suites.
//!
//! This crate provides:
//! - Suite-scoped database harness ([`TestDb`]) with per-test cleanup
//! - Seed fixtures for the application tables
//! - Quiet tracing installation for test processes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use story_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> anyhow::Result<()> {
//!     init_quiet_tracing();
//!
//!     let db = TestDb::setup().await?;
//!     db.reset().await?;
//!
//!     // test body runs against a known-clean store; when no connection
//!     // string is configured the harness is a no-op and `db.is_enabled()`
//!     // is false
//!
//!     db.close().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Live-database suite
//!
//! The integration tests that need a real Postgres are feature gated, so a
//! bare `cargo test` runs zero of them:
//!
//! ```bash
//! # Unit tests only, no database required
//! cargo test -p story-test-utils
//!
//! # Full suite against a running Postgres
//! DATABASE_URL=postgres://localhost/storyline_test \
//!     cargo test -p story-test-utils --features live-db
//! ```

pub mod db_harness;
pub mod fixtures;
pub mod logging;

// Re-export commonly used items
pub use db_harness::*;
pub use fixtures::*;
pub use logging::*;
