use shared::{
    CreateSellerRequest, Seller as SharedSeller, SellerListResponse, UpdateSellerRequest,
};

use crate::domain::commands::sellers::{CreateSellerCommand, UpdateSellerCommand};
use crate::domain::models::{Seller as DomainSeller, SellerId};

/// Mapper to convert between shared Seller DTOs and domain Seller models.
pub struct SellerMapper;

impl SellerMapper {
    pub fn to_create_command(request: CreateSellerRequest) -> CreateSellerCommand {
        CreateSellerCommand { name: request.name }
    }

    pub fn to_update_command(seller_id: i64, request: UpdateSellerRequest) -> UpdateSellerCommand {
        UpdateSellerCommand {
            seller_id: SellerId(seller_id),
            name: request.name,
        }
    }

    /// Converts a domain Seller model to a shared Seller DTO.
    pub fn to_dto(domain: DomainSeller) -> SharedSeller {
        SharedSeller {
            id: domain.id.0,
            name: domain.name,
        }
    }

    pub fn to_list_dto(sellers: Vec<DomainSeller>) -> SellerListResponse {
        SellerListResponse {
            sellers: sellers.into_iter().map(Self::to_dto).collect(),
        }
    }
}
