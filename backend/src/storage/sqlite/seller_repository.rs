use anyhow::anyhow;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{map_sqlx_error, SqliteConnection};
use crate::domain::models::{Seller, SellerDraft, SellerId};
use crate::storage::{SellerStorage, StorageError, StorageResult};

/// Repository for seller operations
#[derive(Clone)]
pub struct SqliteSellerRepository {
    db: SqliteConnection,
}

impl SqliteSellerRepository {
    pub fn new(db: SqliteConnection) -> Self {
        Self { db }
    }

    fn row_to_seller(row: &SqliteRow) -> Seller {
        Seller {
            id: SellerId(row.get("id")),
            name: row.get("name"),
        }
    }
}

#[async_trait]
impl SellerStorage for SqliteSellerRepository {
    async fn get_seller(&self, seller_id: SellerId) -> StorageResult<Option<Seller>> {
        let row = sqlx::query("SELECT id, name FROM sellers WHERE id = ?")
            .bind(seller_id.0)
            .fetch_optional(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.as_ref().map(Self::row_to_seller))
    }

    async fn list_sellers(&self) -> StorageResult<Vec<Seller>> {
        let rows = sqlx::query("SELECT id, name FROM sellers ORDER BY id")
            .fetch_all(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(Self::row_to_seller).collect())
    }

    async fn find_by_normalized_name(&self, normalized_name: &str) -> StorageResult<Option<Seller>> {
        let row = sqlx::query("SELECT id, name FROM sellers WHERE name_normalized = ?")
            .bind(normalized_name)
            .fetch_optional(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.as_ref().map(Self::row_to_seller))
    }

    async fn insert_seller(&self, draft: &SellerDraft) -> StorageResult<Seller> {
        let result = sqlx::query("INSERT INTO sellers (name, name_normalized) VALUES (?, ?)")
            .bind(draft.name())
            .bind(draft.normalized_name())
            .execute(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(Seller {
            id: SellerId(result.last_insert_rowid()),
            name: draft.name().to_string(),
        })
    }

    async fn update_seller(&self, seller: &Seller) -> StorageResult<Seller> {
        let result = sqlx::query("UPDATE sellers SET name = ?, name_normalized = ? WHERE id = ?")
            .bind(&seller.name)
            .bind(seller.normalized_name())
            .bind(seller.id.0)
            .execute(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::Backend(anyhow!("No seller row with id {}", seller.id)));
        }

        Ok(seller.clone())
    }

    async fn delete_seller(&self, seller: &Seller) -> StorageResult<()> {
        sqlx::query("DELETE FROM sellers WHERE id = ?")
            .bind(seller.id.0)
            .execute(self.db.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Connection;

    async fn setup_test() -> SqliteSellerRepository {
        let connection = SqliteConnection::in_memory().await.expect("Failed to create test database");
        connection.create_seller_repository()
    }

    #[tokio::test]
    async fn test_insert_assigns_ids_and_keeps_display_name() {
        let repo = setup_test().await;

        let first = repo.insert_seller(&SellerDraft::new("Roberto").unwrap()).await.unwrap();
        let second = repo.insert_seller(&SellerDraft::new(" Ana Paula ").unwrap()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(second.name, "Ana Paula");

        let stored = repo.get_seller(second.id).await.unwrap().expect("Seller should exist");
        assert_eq!(stored, second);
    }

    #[tokio::test]
    async fn test_find_by_normalized_name() {
        let repo = setup_test().await;
        let seller = repo.insert_seller(&SellerDraft::new("Bob").unwrap()).await.unwrap();

        let found = repo.find_by_normalized_name("bob").await.unwrap();
        assert_eq!(found, Some(seller));

        assert!(repo.find_by_normalized_name("Bob").await.unwrap().is_none());
        assert!(repo.find_by_normalized_name("alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unique_normalized_name_is_enforced_by_storage() {
        let repo = setup_test().await;
        repo.insert_seller(&SellerDraft::new("Bob").unwrap()).await.unwrap();

        let result = repo.insert_seller(&SellerDraft::new(" BOB ").unwrap()).await;
        assert!(matches!(result, Err(StorageError::ConstraintViolation(_))));
    }

    #[tokio::test]
    async fn test_update_and_list() {
        let repo = setup_test().await;
        let mut bob = repo.insert_seller(&SellerDraft::new("Bob").unwrap()).await.unwrap();
        let alice = repo.insert_seller(&SellerDraft::new("Alice").unwrap()).await.unwrap();

        bob.update_from(SellerDraft::new("Robert").unwrap());
        repo.update_seller(&bob).await.unwrap();

        let sellers = repo.list_sellers().await.unwrap();
        assert_eq!(sellers, vec![bob.clone(), alice]);
        assert_eq!(repo.find_by_normalized_name("robert").await.unwrap(), Some(bob));
        assert!(repo.find_by_normalized_name("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_row_fails() {
        let repo = setup_test().await;
        let ghost = Seller { id: SellerId(99), name: "Ghost".to_string() };

        assert!(matches!(repo.update_seller(&ghost).await, Err(StorageError::Backend(_))));
    }

    #[tokio::test]
    async fn test_delete_seller() {
        let repo = setup_test().await;
        let seller = repo.insert_seller(&SellerDraft::new("Bob").unwrap()).await.unwrap();

        repo.delete_seller(&seller).await.unwrap();

        assert!(repo.get_seller(seller.id).await.unwrap().is_none());
        assert!(repo.list_sellers().await.unwrap().is_empty());
    }
}
