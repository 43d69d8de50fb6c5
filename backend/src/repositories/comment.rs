//! SQL for the `comments` table
//!
//! Threads are one level deep: a comment either has no parent or points
//! at a top-level comment.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// A `comments` row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentRecord {
    pub id: Uuid,
    pub text: String,
    pub user_id: Uuid,
    pub movie_id: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Comment joined with its author's display fields
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentWithAuthorRecord {
    pub id: Uuid,
    pub text: String,
    pub user_id: Uuid,
    pub movie_id: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub author_name: String,
}

/// Input for creating a comment
#[derive(Debug, Clone)]
pub struct CreateComment {
    pub text: String,
    pub user_id: Uuid,
    pub movie_id: String,
    pub parent_id: Option<Uuid>,
}

pub struct CommentRepository;

impl CommentRepository {
    /// Create a comment or reply
    pub async fn create(pool: &PgPool, input: CreateComment) -> Result<CommentRecord> {
        let comment = sqlx::query_as::<_, CommentRecord>(
            r#"
            INSERT INTO comments (text, user_id, movie_id, parent_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, text, user_id, movie_id, parent_id, created_at
            "#,
        )
        .bind(&input.text)
        .bind(input.user_id)
        .bind(&input.movie_id)
        .bind(input.parent_id)
        .fetch_one(pool)
        .await?;

        Ok(comment)
    }

    /// Find a comment by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<CommentRecord>> {
        let comment = sqlx::query_as::<_, CommentRecord>(
            r#"
            SELECT id, text, user_id, movie_id, parent_id, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(comment)
    }

    /// Top-level comments for a movie with their authors, newest first
    pub async fn list_top_level_with_author(
        pool: &PgPool,
        movie_id: &str,
    ) -> Result<Vec<CommentWithAuthorRecord>> {
        let comments = sqlx::query_as::<_, CommentWithAuthorRecord>(
            r#"
            SELECT c.id, c.text, c.user_id, c.movie_id, c.parent_id, c.created_at,
                   u.name AS author_name
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.movie_id = $1 AND c.parent_id IS NULL
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await?;

        Ok(comments)
    }

    /// Replies to the given parents with their authors, oldest first
    pub async fn list_replies_with_author(
        pool: &PgPool,
        parent_ids: &[Uuid],
    ) -> Result<Vec<CommentWithAuthorRecord>> {
        let replies = sqlx::query_as::<_, CommentWithAuthorRecord>(
            r#"
            SELECT c.id, c.text, c.user_id, c.movie_id, c.parent_id, c.created_at,
                   u.name AS author_name
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.parent_id = ANY($1)
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(parent_ids)
        .fetch_all(pool)
        .await?;

        Ok(replies)
    }

    /// Delete a comment by ID (replies cascade)
    pub async fn delete_by_id(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
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
