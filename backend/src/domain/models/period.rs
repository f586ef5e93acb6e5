use chrono::NaiveDate;
use std::num::NonZeroU32;

use crate::domain::SalesError;

/// Inclusive date range used as an aggregation parameter.
///
/// Only constructible through [`Period::new`], so `end >= start` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SalesError> {
        if end < start {
            return Err(SalesError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, counting both boundaries
    pub fn day_count(&self) -> NonZeroU32 {
        let elapsed = (self.end - self.start).num_days();
        let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);
        NonZeroU32::MIN.saturating_add(elapsed)
    }
}
