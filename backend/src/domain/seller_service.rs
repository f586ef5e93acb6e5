use tracing::{info, warn};

use crate::domain::commands::sellers::{CreateSellerCommand, UpdateSellerCommand};
use crate::domain::lookup::find_seller_or_fail;
use crate::domain::models::{Seller, SellerDraft, SellerId};
use crate::domain::{SalesError, SellerNameGuard};
use crate::storage::{Connection, SellerStorage};

/// Service for managing sellers
#[derive(Clone)]
pub struct SellerService<C: Connection> {
    seller_repository: C::SellerRepository,
    name_guard: SellerNameGuard<C::SellerRepository>,
}

impl<C: Connection> SellerService<C> {
    pub fn new(connection: &C) -> Self {
        let seller_repository = connection.create_seller_repository();
        Self {
            name_guard: SellerNameGuard::new(seller_repository.clone()),
            seller_repository,
        }
    }

    /// Create a new seller with a unique name
    pub async fn create_seller(&self, command: CreateSellerCommand) -> Result<Seller, SalesError> {
        info!("Creating seller: name={:?}", command.name);

        let draft = SellerDraft::new(&command.name).map_err(|err| {
            warn!("Rejected seller name {:?}: {}", command.name, err);
            err
        })?;
        self.name_guard.validate_unique_name(draft.name(), None).await?;

        let seller = self.seller_repository.insert_seller(&draft).await?;

        info!("Created seller: {} with ID: {}", seller.name, seller.id);
        Ok(seller)
    }

    pub async fn get_seller(&self, seller_id: SellerId) -> Result<Seller, SalesError> {
        info!("Getting seller: {}", seller_id);
        find_seller_or_fail(&self.seller_repository, seller_id).await
    }

    pub async fn list_sellers(&self) -> Result<Vec<Seller>, SalesError> {
        info!("Listing all sellers");

        let sellers = self.seller_repository.list_sellers().await?;

        info!("Found {} sellers", sellers.len());
        Ok(sellers)
    }

    /// Replace a seller's name, keeping its ID
    pub async fn update_seller(&self, command: UpdateSellerCommand) -> Result<Seller, SalesError> {
        info!("Updating seller: {}", command.seller_id);

        let mut seller = find_seller_or_fail(&self.seller_repository, command.seller_id).await?;

        let draft = SellerDraft::new(&command.name).map_err(|err| {
            warn!("Rejected new name {:?} for seller {}: {}", command.name, seller.id, err);
            err
        })?;
        self.name_guard
            .validate_unique_name(draft.name(), Some(seller.id))
            .await?;

        seller.update_from(draft);
        let seller = self.seller_repository.update_seller(&seller).await?;

        info!("Updated seller: {} with ID: {}", seller.name, seller.id);
        Ok(seller)
    }

    /// Delete a seller. Sellers that still have sales are refused by storage.
    pub async fn delete_seller(&self, seller_id: SellerId) -> Result<(), SalesError> {
        info!("Deleting seller: {}", seller_id);

        let seller = find_seller_or_fail(&self.seller_repository, seller_id).await?;
        self.seller_repository.delete_seller(&seller).await?;

        info!("Deleted seller: {} with ID: {}", seller.name, seller.id);
        Ok(())
    }
}
