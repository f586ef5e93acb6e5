//! Lookup-or-fail helpers shared by every service.

use tracing::warn;

use crate::domain::models::{Sale, SaleId, Seller, SellerId};
use crate::domain::SalesError;
use crate::storage::{SaleStorage, SellerStorage};

pub async fn find_seller_or_fail<S>(sellers: &S, seller_id: SellerId) -> Result<Seller, SalesError>
where
    S: SellerStorage + ?Sized,
{
    sellers.get_seller(seller_id).await?.ok_or_else(|| {
        warn!("Seller not found: {}", seller_id);
        SalesError::SellerNotFound(seller_id)
    })
}

pub async fn find_sale_or_fail<S>(sales: &S, sale_id: SaleId) -> Result<Sale, SalesError>
where
    S: SaleStorage + ?Sized,
{
    sales.get_sale(sale_id).await?.ok_or_else(|| {
        warn!("Sale not found: {}", sale_id);
        SalesError::SaleNotFound(sale_id)
    })
}
