//! Seed fixtures for the application tables.
//!
//! Inserts use randomized handles so fixtures can be layered inside one test
//! without colliding on unique columns.

use common::error::{Result, StorylineError};
use sqlx::PgPool;
use uuid::Uuid;

/// Rows created by [`seed_graph`]: one user owning one asset and one story
/// that references both. The maximal dependency shape the reset order has to
/// handle.
#[derive(Debug, Clone, Copy)]
pub struct SeedGraph {
    pub user_id: Uuid,
    pub asset_id: Uuid,
    pub story_id: Uuid,
}

/// Insert a user with a unique handle.
pub async fn seed_user(pool: &PgPool) -> Result<Uuid> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO users (id, handle, display_name)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(id)
    .bind(format!("user-{}", id.simple()))
    .bind("Test User")
    .execute(pool)
    .await
    .map_err(|e| StorylineError::Database(format!("Failed to seed user: {}", e)))?;

    Ok(id)
}

/// Insert an asset owned by `owner_id`.
pub async fn seed_asset(pool: &PgPool, owner_id: Uuid) -> Result<Uuid> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO assets (id, owner_id, storage_path, content_type)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(format!("assets/{}.png", id.simple()))
    .bind("image/png")
    .execute(pool)
    .await
    .map_err(|e| StorylineError::Database(format!("Failed to seed asset: {}", e)))?;

    Ok(id)
}

/// Insert a story by `author_id`, optionally fronted by a cover asset.
pub async fn seed_story(
    pool: &PgPool,
    author_id: Uuid,
    cover_asset_id: Option<Uuid>,
) -> Result<Uuid> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO stories (id, author_id, cover_asset_id, title)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id)
    .bind(author_id)
    .bind(cover_asset_id)
    .bind("Test Story")
    .execute(pool)
    .await
    .map_err(|e| StorylineError::Database(format!("Failed to seed story: {}", e)))?;

    Ok(id)
}

/// Seed a full dependency graph: user, asset owned by the user, story
/// referencing both.
pub async fn seed_graph(pool: &PgPool) -> Result<SeedGraph> {
    let user_id = seed_user(pool).await?;
    let asset_id = seed_asset(pool, user_id).await?;
    let story_id = seed_story(pool, user_id, Some(asset_id)).await?;

    Ok(SeedGraph {
        user_id,
        asset_id,
        story_id,
    })
}

/// Count rows in one of the application tables.
pub async fn row_count(pool: &PgPool, table: &str) -> Result<i64> {
    // Static statements only; identifiers cannot be bound as parameters.
    let statement = match table {
        "users" => "SELECT COUNT(*) FROM users",
        "assets" => "SELECT COUNT(*) FROM assets",
        "stories" => "SELECT COUNT(*) FROM stories",
        other => {
            return Err(StorylineError::Internal(format!(
                "Unknown table: {}",
                other
            )))
        }
    };

    let count: (i64,) = sqlx::query_as(statement)
        .fetch_one(pool)
        .await
        .map_err(|e| StorylineError::Database(format!("Failed to count {}: {}", table, e)))?;

    Ok(count.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_row_count_rejects_unknown_table() {
        // Connection options are lazy, so building a pool does not require a
        // reachable server; the unknown-table check fires before any query.
        let pool = PgPool::connect_lazy("postgres://localhost/unused")
            .expect("lazy pool construction");

        let result = row_count(&pool, "audit_log").await;
        assert!(matches!(result, Err(StorylineError::Internal(_))));
    }
}
