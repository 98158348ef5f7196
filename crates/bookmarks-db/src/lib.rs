//! # bookmarks-db
//!
//! Storage backends for the bookmarks API.
//!
//! This crate provides:
//! - Connection pool management
//! - [`PgBookmarkRepository`], the PostgreSQL backend
//! - [`InMemoryBookmarkRepository`], a process-local backend for development
//!   and tests
//! - Embedded schema migrations (`migrations` feature)
//!
//! ## Example
//!
//! ```rust,ignore
//! use bookmarks_db::{BookmarkRepository, CreateBookmarkRequest, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/bookmarks").await?;
//!
//!     let bookmark = db.bookmarks.insert(CreateBookmarkRequest {
//!         title: "Rust".to_string(),
//!         url: "https://www.rust-lang.org".to_string(),
//!         rating: 5,
//!         description: None,
//!     }).await?;
//!
//!     println!("Created bookmark: {}", bookmark.id);
//!     Ok(())
//! }
//! ```
pub mod bookmarks;
pub mod memory;
pub mod pool;

// Test fixtures for integration tests
pub mod test_fixtures;

// Re-export core types
pub use bookmarks_core::*;

pub use bookmarks::PgBookmarkRepository;
pub use memory::InMemoryBookmarkRepository;
pub use pool::{create_pool, create_pool_with_config, log_pool_metrics, PoolConfig};

/// Database context holding the pool and the bookmark repository.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Bookmark repository for CRUD operations.
    pub bookmarks: PgBookmarkRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            bookmarks: PgBookmarkRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }
}
