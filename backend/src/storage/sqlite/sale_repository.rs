use anyhow::{anyhow, Context};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::str::FromStr;

use super::{map_sqlx_error, SqliteConnection};
use crate::domain::models::{Sale, SaleDraft, SaleId, SellerId};
use crate::storage::{SaleStorage, StorageError, StorageResult};

/// Repository for sale operations
#[derive(Clone)]
pub struct SqliteSaleRepository {
    db: SqliteConnection,
}

impl SqliteSaleRepository {
    pub fn new(db: SqliteConnection) -> Self {
        Self { db }
    }

    fn row_to_sale(row: &SqliteRow) -> StorageResult<Sale> {
        let id: i64 = row.get("id");
        let days: i32 = row.get("sale_date");
        let raw_amount: String = row.get("amount");

        let date = NaiveDate::from_num_days_from_ce_opt(days)
            .ok_or_else(|| anyhow!("Invalid day number {} stored for sale {}", days, id))?;
        let amount = Decimal::from_str(&raw_amount)
            .with_context(|| format!("Invalid amount {:?} stored for sale {}", raw_amount, id))?;

        Ok(Sale {
            id: SaleId(id),
            seller_id: SellerId(row.get("seller_id")),
            date,
            amount,
        })
    }

    fn rows_to_sales(rows: &[SqliteRow]) -> StorageResult<Vec<Sale>> {
        rows.iter().map(Self::row_to_sale).collect()
    }
}

/// Dates are stored as days since 0001-01-01 so SQL comparisons follow
/// calendar order for every representable year
fn day_number(date: NaiveDate) -> i32 {
    date.num_days_from_ce()
}

#[async_trait]
impl SaleStorage for SqliteSaleRepository {
    async fn get_sale(&self, sale_id: SaleId) -> StorageResult<Option<Sale>> {
        let row = sqlx::query("SELECT id, seller_id, sale_date, amount FROM sales WHERE id = ?")
            .bind(sale_id.0)
            .fetch_optional(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(Self::row_to_sale).transpose()
    }

    async fn list_sales(&self) -> StorageResult<Vec<Sale>> {
        let rows = sqlx::query("SELECT id, seller_id, sale_date, amount FROM sales ORDER BY id")
            .fetch_all(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;

        Self::rows_to_sales(&rows)
    }

    async fn list_sales_by_seller(&self, seller_id: SellerId) -> StorageResult<Vec<Sale>> {
        let rows = sqlx::query(
            r#"
            SELECT id, seller_id, sale_date, amount
            FROM sales
            WHERE seller_id = ?
            ORDER BY sale_date, id
            "#,
        )
        .bind(seller_id.0)
        .fetch_all(self.db.pool())
        .await
        .map_err(map_sqlx_error)?;

        Self::rows_to_sales(&rows)
    }

    async fn list_sales_in_range(
        &self,
        seller_id: SellerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StorageResult<Vec<Sale>> {
        let rows = sqlx::query(
            r#"
            SELECT id, seller_id, sale_date, amount
            FROM sales
            WHERE seller_id = ? AND sale_date BETWEEN ? AND ?
            ORDER BY sale_date, id
            "#,
        )
        .bind(seller_id.0)
        .bind(day_number(start))
        .bind(day_number(end))
        .fetch_all(self.db.pool())
        .await
        .map_err(map_sqlx_error)?;

        Self::rows_to_sales(&rows)
    }

    async fn insert_sale(&self, draft: &SaleDraft) -> StorageResult<Sale> {
        let result = sqlx::query("INSERT INTO sales (seller_id, sale_date, amount) VALUES (?, ?, ?)")
            .bind(draft.seller_id().0)
            .bind(day_number(draft.date()))
            .bind(draft.amount().to_string())
            .execute(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(Sale {
            id: SaleId(result.last_insert_rowid()),
            seller_id: draft.seller_id(),
            date: draft.date(),
            amount: draft.amount(),
        })
    }

    async fn update_sale(&self, sale: &Sale) -> StorageResult<Sale> {
        let result = sqlx::query("UPDATE sales SET seller_id = ?, sale_date = ?, amount = ? WHERE id = ?")
            .bind(sale.seller_id.0)
            .bind(day_number(sale.date))
            .bind(sale.amount.to_string())
            .bind(sale.id.0)
            .execute(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::Backend(anyhow!("No sale row with id {}", sale.id)));
        }

        Ok(sale.clone())
    }

    async fn delete_sale(&self, sale: &Sale) -> StorageResult<()> {
        sqlx::query("DELETE FROM sales WHERE id = ?")
            .bind(sale.id.0)
            .execute(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
