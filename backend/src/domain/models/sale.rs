use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::SellerId;
use crate::domain::SalesError;

/// Store-assigned sale identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(pub i64);

impl fmt::Display for SaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single sale. The seller is referenced by id only; many sales may point
/// at the same seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub seller_id: SellerId,
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl Sale {
    /// Replace the mutable fields with those of `draft`; the id is kept.
    pub fn update_from(&mut self, draft: SaleDraft) {
        self.seller_id = draft.seller_id;
        self.date = draft.date;
        self.amount = draft.amount;
    }
}

/// Validated sale fields that have not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleDraft {
    seller_id: SellerId,
    date: NaiveDate,
    amount: Decimal,
}

impl SaleDraft {
    /// `today` is the latest date a sale may carry
    pub fn new(
        seller_id: SellerId,
        date: NaiveDate,
        amount: Decimal,
        today: NaiveDate,
    ) -> Result<Self, SalesError> {
        if amount <= Decimal::ZERO {
            return Err(SalesError::InvalidAmount(amount));
        }
        if date > today {
            return Err(SalesError::FutureSaleDate(date));
        }
        Ok(Self { seller_id, date, amount })
    }

    pub fn seller_id(&self) -> SellerId {
        self.seller_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// A sale paired with its seller's display name at read time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleDetails {
    pub sale: Sale,
    pub seller_name: String,
}
