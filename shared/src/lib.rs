use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A seller as seen by API consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: i64,
    /// Display name, trimmed but with its original casing
    pub name: String,
}

/// Request for creating a new seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSellerRequest {
    pub name: String,
}

/// Request for replacing a seller's name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSellerRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerListResponse {
    pub sellers: Vec<Seller>,
}

/// A sale together with a snapshot of its seller's name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    /// Calendar date of the sale (YYYY-MM-DD on the wire)
    pub date: NaiveDate,
    /// Sale value, always positive
    pub amount: Decimal,
    pub seller_id: i64,
    pub seller_name: String,
}

/// Request for recording a new sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSaleRequest {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub seller_id: i64,
}

/// Request for replacing every mutable field of an existing sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSaleRequest {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub seller_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleListResponse {
    pub sales: Vec<Sale>,
}

/// Inclusive date range for the period statistics query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummaryRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Aggregated sales figures of one seller over a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummaryResponse {
    pub seller_id: i64,
    pub seller_name: String,
    pub total_amount: Decimal,
    /// Total divided by the inclusive day count, rounded half-up to cents
    pub daily_average: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub day_count: u32,
    pub sale_count: u64,
}
