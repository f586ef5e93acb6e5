use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

use super::{SqliteSaleRepository, SqliteSellerRepository};
use crate::storage::Connection;

/// SqliteConnection manages the pool shared by all repositories
#[derive(Clone)]
pub struct SqliteConnection {
    pool: Arc<SqlitePool>,
}

impl SqliteConnection {
    /// Open (creating if missing) the database at `url` and apply the schema
    pub async fn new(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid SQLite URL: {}", url))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::setup_schema(&pool).await?;
        info!("Database ready: {}", url);

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Private in-memory database. A single connection keeps it alive for the
    /// lifetime of the pool.
    pub async fn in_memory() -> Result<Self> {
        Self::new("sqlite::memory:", 1).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        debug!("Applying database schema");

        // `name_normalized` carries the uniqueness guarantee at the storage level
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sellers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                name_normalized TEXT NOT NULL UNIQUE
            );
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create sellers table")?;

        // Amounts are decimal text, dates days since 0001-01-01; no cascade from sellers
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sales (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                seller_id INTEGER NOT NULL,
                sale_date INTEGER NOT NULL,
                amount TEXT NOT NULL,
                FOREIGN KEY (seller_id) REFERENCES sellers (id)
            );
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create sales table")?;

        // Create index for per-seller period queries
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_sales_seller_date
            ON sales(seller_id, sale_date);
            "#,
        )
        .execute(pool)
        .await
        .context("Failed to create sales index")?;

        Ok(())
    }
}

impl Connection for SqliteConnection {
    type SellerRepository = SqliteSellerRepository;
    type SaleRepository = SqliteSaleRepository;

    fn create_seller_repository(&self) -> Self::SellerRepository {
        SqliteSellerRepository::new(self.clone())
    }

    fn create_sale_repository(&self) -> Self::SaleRepository {
        SqliteSaleRepository::new(self.clone())
    }
}
