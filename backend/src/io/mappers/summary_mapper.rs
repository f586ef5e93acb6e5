use shared::{PeriodSummaryRequest, PeriodSummaryResponse};

use crate::domain::commands::reports::PeriodSummaryQuery;
use crate::domain::models::{PeriodSummary, SellerId};

pub struct SummaryMapper;

impl SummaryMapper {
    pub fn to_query(seller_id: i64, request: PeriodSummaryRequest) -> PeriodSummaryQuery {
        PeriodSummaryQuery {
            seller_id: SellerId(seller_id),
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }

    pub fn to_dto(summary: PeriodSummary) -> PeriodSummaryResponse {
        PeriodSummaryResponse {
            seller_id: summary.seller_id.0,
            seller_name: summary.seller_name,
            total_amount: summary.total_amount,
            daily_average: summary.daily_average,
            start_date: summary.period_start,
            end_date: summary.period_end,
            day_count: summary.day_count,
            sale_count: summary.sale_count,
        }
    }
}
