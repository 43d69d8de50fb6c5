//! SQL for the `favorites` table

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// A `favorites` row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FavoriteRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub movie_id: String,
    pub created_at: DateTime<Utc>,
}

pub struct FavoriteRepository;

impl FavoriteRepository {
    /// Add a movie to a user's favorites
    pub async fn create(pool: &PgPool, user_id: Uuid, movie_id: &str) -> Result<FavoriteRecord> {
        let favorite = sqlx::query_as::<_, FavoriteRecord>(
            r#"
            INSERT INTO favorites (user_id, movie_id)
            VALUES ($1, $2)
            RETURNING id, user_id, movie_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(movie_id)
        .fetch_one(pool)
        .await?;

        Ok(favorite)
    }

    /// Find a favorite by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<FavoriteRecord>> {
        let favorite = sqlx::query_as::<_, FavoriteRecord>(
            r#"
            SELECT id, user_id, movie_id, created_at
            FROM favorites
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(favorite)
    }

    /// Check whether the user already favorited the movie
    pub async fn exists(pool: &PgPool, user_id: Uuid, movie_id: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = $1 AND movie_id = $2)
            "#,
        )
        .bind(user_id)
        .bind(movie_id)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// List a user's favorites, newest first
    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<FavoriteRecord>> {
        let favorites = sqlx::query_as::<_, FavoriteRecord>(
            r#"
            SELECT id, user_id, movie_id, created_at
            FROM favorites
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(favorites)
    }

    /// Delete a favorite by ID
    pub async fn delete_by_id(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM favorites
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // Exercised against a live database by the suites in tests/.
}
