use shared::{CreateSaleRequest, Sale as SharedSale, SaleListResponse, UpdateSaleRequest};

use crate::domain::commands::sales::{CreateSaleCommand, UpdateSaleCommand};
use crate::domain::models::{SaleDetails, SaleId, SellerId};

/// Mapper to convert between shared Sale DTOs and domain sale models.
pub struct SaleMapper;

impl SaleMapper {
    pub fn to_create_command(request: CreateSaleRequest) -> CreateSaleCommand {
        CreateSaleCommand {
            date: request.date,
            amount: request.amount,
            seller_id: SellerId(request.seller_id),
        }
    }

    pub fn to_update_command(sale_id: i64, request: UpdateSaleRequest) -> UpdateSaleCommand {
        UpdateSaleCommand {
            sale_id: SaleId(sale_id),
            date: request.date,
            amount: request.amount,
            seller_id: SellerId(request.seller_id),
        }
    }

    pub fn to_dto(details: SaleDetails) -> SharedSale {
        SharedSale {
            id: details.sale.id.0,
            date: details.sale.date,
            amount: details.sale.amount,
            seller_id: details.sale.seller_id.0,
            seller_name: details.seller_name,
        }
    }

    pub fn to_list_dto(sales: Vec<SaleDetails>) -> SaleListResponse {
        SaleListResponse {
            sales: sales.into_iter().map(Self::to_dto).collect(),
        }
    }
}
