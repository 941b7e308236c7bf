//! PostgreSQL implementation of listing repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Listing, ListingPatch, NewListing};
use crate::domain::repositories::ListingRepository;
use crate::error::AppError;

const LISTING_COLUMNS: &str =
    "id, title, description, price, location, country, reviews, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct ListingRow {
    id: i64,
    title: String,
    description: String,
    price: f64,
    location: String,
    country: String,
    reviews: Vec<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ListingRow> for Listing {
    fn from(row: ListingRow) -> Self {
        Listing {
            id: row.id,
            title: row.title,
            description: row.description,
            price: row.price,
            location: row.location,
            country: row.country,
            reviews: row.reviews,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for listings.
///
/// The review sequence is a `BIGINT[]` column, mutated with `array_append`
/// and `array_remove` so concurrent review posts on the same listing do not
/// overwrite each other.
pub struct PgListingRepository {
    pool: Arc<PgPool>,
}

impl PgListingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingRepository for PgListingRepository {
    async fn find_all(&self) -> Result<Vec<Listing>, AppError> {
        let rows = sqlx::query_as::<_, ListingRow>(&format!(
            "SELECT {LISTING_COLUMNS} FROM listings ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Listing::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Listing>, AppError> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            "SELECT {LISTING_COLUMNS} FROM listings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Listing::from))
    }

    async fn create(&self, new_listing: NewListing) -> Result<Listing, AppError> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            r#"
            INSERT INTO listings (title, description, price, location, country)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {LISTING_COLUMNS}
            "#
        ))
        .bind(new_listing.title)
        .bind(new_listing.description)
        .bind(new_listing.price)
        .bind(new_listing.location)
        .bind(new_listing.country)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update_by_id(
        &self,
        id: i64,
        patch: ListingPatch,
    ) -> Result<Option<Listing>, AppError> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            r#"
            UPDATE listings
            SET title       = COALESCE($2, title),
                description = COALESCE($3, description),
                price       = COALESCE($4, price),
                location    = COALESCE($5, location),
                country     = COALESCE($6, country),
                updated_at  = NOW()
            WHERE id = $1
            RETURNING {LISTING_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.price)
        .bind(patch.location)
        .bind(patch.country)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Listing::from))
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<Listing>, AppError> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            "DELETE FROM listings WHERE id = $1 RETURNING {LISTING_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Listing::from))
    }

    async fn push_review(&self, listing_id: i64, review_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE listings
            SET reviews = array_append(reviews, $2), updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(listing_id)
        .bind(review_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn pull_review(&self, listing_id: i64, review_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE listings
            SET reviews = array_remove(reviews, $2), updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(listing_id)
        .bind(review_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM listings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
