//! Exact decimal arithmetic for sale amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use std::num::NonZeroU32;

use crate::domain::SalesError;

/// Fractional digits kept for averages
pub const CENT_SCALE: u32 = 2;

/// Exact sum of `amounts`; fails instead of overflowing `Decimal`
pub fn total<I>(amounts: I) -> Result<Decimal, SalesError>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or(SalesError::AmountOverflow)
}

/// `total / day_count`, rounded half-up to cents and always carrying two
/// fractional digits (`0.00`, `100.25`)
pub fn daily_average(total: Decimal, day_count: NonZeroU32) -> Decimal {
    let mut average = (total / Decimal::from(day_count.get()))
        .round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    average.rescale(CENT_SCALE);
    average
}
