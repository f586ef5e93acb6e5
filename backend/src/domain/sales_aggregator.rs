//! Period statistics over a seller's sales.
//!
//! Read-only: resolves the seller, validates the period, fetches the sales
//! dated inside it and reduces them to a [`PeriodSummary`].

use tracing::{info, warn};

use crate::domain::commands::reports::PeriodSummaryQuery;
use crate::domain::lookup::find_seller_or_fail;
use crate::domain::models::{money, Period, PeriodSummary};
use crate::domain::SalesError;
use crate::storage::{Connection, SaleStorage};

#[derive(Clone)]
pub struct SalesAggregator<C: Connection> {
    seller_repository: C::SellerRepository,
    sale_repository: C::SaleRepository,
}

impl<C: Connection> SalesAggregator<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            seller_repository: connection.create_seller_repository(),
            sale_repository: connection.create_sale_repository(),
        }
    }

    /// Total and daily average of a seller's sales over an inclusive period.
    ///
    /// Fails with `SellerNotFound` before anything else, then with
    /// `InvalidPeriod` when the period ends before it starts; in both cases
    /// no sales are queried.
    pub async fn compute_period_summary(
        &self,
        query: PeriodSummaryQuery,
    ) -> Result<PeriodSummary, SalesError> {
        info!(
            "Computing period summary: seller={}, start={}, end={}",
            query.seller_id, query.start_date, query.end_date
        );

        let seller = find_seller_or_fail(&self.seller_repository, query.seller_id).await?;
        let period = Period::new(query.start_date, query.end_date).map_err(|err| {
            warn!("Rejected period summary for seller {}: {}", seller.id, err);
            err
        })?;

        let sales = self
            .sale_repository
            .list_sales_in_range(seller.id, period.start(), period.end())
            .await?;

        let total_amount = money::total(sales.iter().map(|sale| sale.amount)).map_err(|err| {
            warn!("Sales total for seller {} overflowed over {} sales", seller.id, sales.len());
            err
        })?;
        let day_count = period.day_count();
        let daily_average = money::daily_average(total_amount, day_count);

        info!(
            "Seller {} sold {} over {} days in {} sales (daily average {})",
            seller.id,
            total_amount,
            day_count,
            sales.len(),
            daily_average
        );

        Ok(PeriodSummary {
            seller_id: seller.id,
            seller_name: seller.name,
            total_amount,
            daily_average,
            period_start: period.start(),
            period_end: period.end(),
            day_count: day_count.get(),
            sale_count: sales.len() as u64,
        })
    }
}
