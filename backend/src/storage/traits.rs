//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::{Sale, SaleDraft, SaleId, Seller, SellerDraft, SellerId};

/// Failures reported by a storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend refused a write because of one of its constraints
    /// (unique name, foreign key, check)
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Trait defining the interface for seller storage operations
#[async_trait]
pub trait SellerStorage: Send + Sync {
    /// Retrieve a specific seller by ID
    async fn get_seller(&self, seller_id: SellerId) -> StorageResult<Option<Seller>>;

    /// List all sellers ordered by ID
    async fn list_sellers(&self) -> StorageResult<Vec<Seller>>;

    /// Find the seller whose normalized name equals `normalized_name`
    async fn find_by_normalized_name(&self, normalized_name: &str) -> StorageResult<Option<Seller>>;

    /// Store a new seller; the backend assigns its ID
    async fn insert_seller(&self, draft: &SellerDraft) -> StorageResult<Seller>;

    /// Persist the current fields of an existing seller
    async fn update_seller(&self, seller: &Seller) -> StorageResult<Seller>;

    /// Delete an existing seller
    async fn delete_seller(&self, seller: &Seller) -> StorageResult<()>;
}

/// Trait defining the interface for sale storage operations
#[async_trait]
pub trait SaleStorage: Send + Sync {
    /// Retrieve a specific sale by ID
    async fn get_sale(&self, sale_id: SaleId) -> StorageResult<Option<Sale>>;

    /// List all sales ordered by ID
    async fn list_sales(&self) -> StorageResult<Vec<Sale>>;

    /// List every sale of one seller ordered by date, then ID
    async fn list_sales_by_seller(&self, seller_id: SellerId) -> StorageResult<Vec<Sale>>;

    /// List the sales of one seller dated within `[start, end]`, both inclusive
    async fn list_sales_in_range(
        &self,
        seller_id: SellerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StorageResult<Vec<Sale>>;

    /// Store a new sale; the backend assigns its ID
    async fn insert_sale(&self, draft: &SaleDraft) -> StorageResult<Sale>;

    /// Persist the current fields of an existing sale
    async fn update_sale(&self, sale: &Sale) -> StorageResult<Sale>;

    /// Delete an existing sale
    async fn delete_sale(&self, sale: &Sale) -> StorageResult<()>;
}

/// Trait defining the interface for storage connections
///
/// Creates the repositories the domain services work with, so services stay
/// independent of the concrete backend.
pub trait Connection: Send + Sync + Clone {
    type SellerRepository: SellerStorage + Clone;
    type SaleRepository: SaleStorage + Clone;

    fn create_seller_repository(&self) -> Self::SellerRepository;

    fn create_sale_repository(&self) -> Self::SaleRepository;
}
