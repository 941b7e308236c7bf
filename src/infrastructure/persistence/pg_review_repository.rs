//! PostgreSQL implementation of review repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{NewReview, Review};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    comment: String,
    rating: i32,
    created_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review::new(row.id, row.comment, row.rating, row.created_at)
    }
}

/// PostgreSQL repository for reviews.
pub struct PgReviewRepository {
    pool: Arc<PgPool>,
}

impl PgReviewRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Review>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ReviewRow>(
            "SELECT id, comment, rating, created_at FROM reviews WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        // ANY() does not preserve order; restore the caller's sequence.
        let mut by_id: HashMap<i64, Review> =
            rows.into_iter().map(|r| (r.id, Review::from(r))).collect();

        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    async fn create(&self, new_review: NewReview) -> Result<Review, AppError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            INSERT INTO reviews (comment, rating)
            VALUES ($1, $2)
            RETURNING id, comment, rating, created_at
            "#,
        )
        .bind(new_review.comment)
        .bind(new_review.rating)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<Review>, AppError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            "DELETE FROM reviews WHERE id = $1 RETURNING id, comment, rating, created_at",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Review::from))
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query("DELETE FROM reviews WHERE id = ANY($1)")
            .bind(ids)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
