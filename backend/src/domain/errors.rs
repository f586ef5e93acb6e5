use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::models::{SaleId, SellerId};
use crate::storage::StorageError;

/// Every way a domain operation can fail.
///
/// All variants are terminal for the operation that produced them; nothing
/// in the domain layer retries.
#[derive(Debug, thiserror::Error)]
pub enum SalesError {
    #[error("Seller not found with ID: {0}")]
    SellerNotFound(SellerId),
    #[error("Sale not found with ID: {0}")]
    SaleNotFound(SaleId),
    #[error("A seller named \"{0}\" already exists")]
    DuplicateName(String),
    #[error("Period end {end} is before period start {start}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },
    #[error("Sale amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),
    #[error("Invalid seller name: {0}")]
    InvalidName(String),
    #[error("Sale date {0} is in the future")]
    FutureSaleDate(NaiveDate),
    #[error("Sale total exceeds the representable amount range")]
    AmountOverflow,
    #[error("Storage rejected the change: {0}")]
    ConstraintViolation(String),
    #[error("Storage failure: {0:#}")]
    Storage(anyhow::Error),
}

impl SalesError {
    /// Stable identifier for mapping the failure onto a transport status
    pub fn code(&self) -> &'static str {
        match self {
            SalesError::SellerNotFound(_) => "SELLER_NOT_FOUND",
            SalesError::SaleNotFound(_) => "SALE_NOT_FOUND",
            SalesError::DuplicateName(_) => "DUPLICATE_NAME",
            SalesError::InvalidPeriod { .. } => "INVALID_PERIOD",
            SalesError::InvalidAmount(_) => "INVALID_AMOUNT",
            SalesError::InvalidName(_) => "INVALID_NAME",
            SalesError::FutureSaleDate(_) => "FUTURE_SALE_DATE",
            SalesError::AmountOverflow => "AMOUNT_OVERFLOW",
            SalesError::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            SalesError::Storage(_) => "STORAGE_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SalesError::SellerNotFound(_) | SalesError::SaleNotFound(_))
    }
}

impl From<StorageError> for SalesError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConstraintViolation(message) => SalesError::ConstraintViolation(message),
            StorageError::Backend(source) => SalesError::Storage(source),
        }
    }
}
