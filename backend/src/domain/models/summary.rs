use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SellerId;

/// Sales figures of one seller over a period.
///
/// Seller id and name are copied at computation time; later renames do not
/// affect an already computed summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub seller_id: SellerId,
    pub seller_name: String,
    pub total_amount: Decimal,
    pub daily_average: Decimal,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub day_count: u32,
    pub sale_count: u64,
}
