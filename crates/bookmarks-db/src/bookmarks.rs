//! PostgreSQL bookmark repository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use tracing::debug;
use uuid::Uuid;

use bookmarks_core::{
    new_v7, Bookmark, BookmarkRepository, CreateBookmarkRequest, Error, Result,
    UpdateBookmarkRequest,
};

/// PostgreSQL implementation of BookmarkRepository.
#[derive(Clone)]
pub struct PgBookmarkRepository {
    pool: Pool<Postgres>,
}

impl PgBookmarkRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn parse_row(row: &PgRow) -> Bookmark {
        Bookmark {
            id: row.get("id"),
            title: row.get("title"),
            url: row.get("url"),
            rating: row.get("rating"),
            description: row.get("description"),
        }
    }
}

#[async_trait]
impl BookmarkRepository for PgBookmarkRepository {
    async fn list(&self) -> Result<Vec<Bookmark>> {
        let rows = sqlx::query(
            "SELECT id, title, url, rating, description
             FROM bookmarks
             ORDER BY created_at_utc, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            component = "bookmarks",
            op = "list",
            result_count = rows.len(),
            "Listed bookmarks"
        );
        Ok(rows.iter().map(Self::parse_row).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Bookmark>> {
        let row = sqlx::query(
            "SELECT id, title, url, rating, description
             FROM bookmarks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.as_ref().map(Self::parse_row))
    }

    async fn insert(&self, req: CreateBookmarkRequest) -> Result<Bookmark> {
        let id = new_v7();
        let row = sqlx::query(
            "INSERT INTO bookmarks (id, title, url, rating, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, url, rating, description",
        )
        .bind(id)
        .bind(&req.title)
        .bind(&req.url)
        .bind(req.rating)
        .bind(&req.description)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(Self::parse_row(&row))
    }

    async fn update(&self, id: Uuid, req: UpdateBookmarkRequest) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE bookmarks SET
                title = COALESCE($1, title),
                url = COALESCE($2, url),
                rating = COALESCE($3, rating),
                description = COALESCE($4, description)
             WHERE id = $5",
        )
        .bind(&req.title)
        .bind(&req.url)
        .bind(req.rating)
        .bind(&req.description)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(result.rows_affected())
    }
}
