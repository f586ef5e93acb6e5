use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use tracing::{info, warn};

use crate::domain::commands::sales::{CreateSaleCommand, UpdateSaleCommand};
use crate::domain::lookup::{find_sale_or_fail, find_seller_or_fail};
use crate::domain::models::{SaleDetails, SaleDraft, SaleId, SellerId};
use crate::domain::SalesError;
use crate::storage::{Connection, SaleStorage, SellerStorage};

/// Service for recording and maintaining sales
#[derive(Clone)]
pub struct SaleService<C: Connection> {
    sale_repository: C::SaleRepository,
    seller_repository: C::SellerRepository,
}

impl<C: Connection> SaleService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            sale_repository: connection.create_sale_repository(),
            seller_repository: connection.create_seller_repository(),
        }
    }

    /// Record a sale for an existing seller
    pub async fn create_sale(&self, command: CreateSaleCommand) -> Result<SaleDetails, SalesError> {
        info!(
            "Creating sale: seller={}, date={}, amount={}",
            command.seller_id, command.date, command.amount
        );

        let seller = find_seller_or_fail(&self.seller_repository, command.seller_id).await?;
        let draft = SaleDraft::new(seller.id, command.date, command.amount, today()).map_err(|err| {
            warn!("Rejected sale for seller {}: {}", seller.id, err);
            err
        })?;

        let sale = self.sale_repository.insert_sale(&draft).await?;

        info!("Created sale {} for seller {}", sale.id, seller.id);
        Ok(SaleDetails { sale, seller_name: seller.name })
    }

    pub async fn get_sale(&self, sale_id: SaleId) -> Result<SaleDetails, SalesError> {
        info!("Getting sale: {}", sale_id);

        let sale = find_sale_or_fail(&self.sale_repository, sale_id).await?;
        let seller = find_seller_or_fail(&self.seller_repository, sale.seller_id).await?;

        Ok(SaleDetails { sale, seller_name: seller.name })
    }

    pub async fn list_sales(&self) -> Result<Vec<SaleDetails>, SalesError> {
        info!("Listing all sales");

        let sales = self.sale_repository.list_sales().await?;
        let names: HashMap<SellerId, String> = self
            .seller_repository
            .list_sellers()
            .await?
            .into_iter()
            .map(|seller| (seller.id, seller.name))
            .collect();

        let details = sales
            .into_iter()
            .map(|sale| match names.get(&sale.seller_id) {
                Some(name) => Ok(SaleDetails { seller_name: name.clone(), sale }),
                None => {
                    warn!("Sale {} references missing seller {}", sale.id, sale.seller_id);
                    Err(SalesError::SellerNotFound(sale.seller_id))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!("Found {} sales", details.len());
        Ok(details)
    }

    /// All sales of one seller, oldest first
    pub async fn list_sales_by_seller(&self, seller_id: SellerId) -> Result<Vec<SaleDetails>, SalesError> {
        info!("Listing sales of seller: {}", seller_id);

        let seller = find_seller_or_fail(&self.seller_repository, seller_id).await?;
        let sales = self.sale_repository.list_sales_by_seller(seller.id).await?;

        info!("Found {} sales for seller {}", sales.len(), seller.id);
        Ok(sales
            .into_iter()
            .map(|sale| SaleDetails { sale, seller_name: seller.name.clone() })
            .collect())
    }

    /// Replace date, amount and seller of an existing sale, keeping its ID
    pub async fn update_sale(&self, command: UpdateSaleCommand) -> Result<SaleDetails, SalesError> {
        info!("Updating sale: {}", command.sale_id);

        let mut sale = find_sale_or_fail(&self.sale_repository, command.sale_id).await?;
        let seller = find_seller_or_fail(&self.seller_repository, command.seller_id).await?;
        let draft = SaleDraft::new(seller.id, command.date, command.amount, today()).map_err(|err| {
            warn!("Rejected update of sale {}: {}", sale.id, err);
            err
        })?;

        sale.update_from(draft);
        let sale = self.sale_repository.update_sale(&sale).await?;

        info!("Updated sale {} for seller {}", sale.id, seller.id);
        Ok(SaleDetails { sale, seller_name: seller.name })
    }

    pub async fn delete_sale(&self, sale_id: SaleId) -> Result<(), SalesError> {
        info!("Deleting sale: {}", sale_id);

        let sale = find_sale_or_fail(&self.sale_repository, sale_id).await?;
        self.sale_repository.delete_sale(&sale).await?;

        info!("Deleted sale: {}", sale.id);
        Ok(())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
