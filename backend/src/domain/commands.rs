//! Domain-level command and query types
//! These structs are the typed inputs of the domain services. Callers holding
//! public DTOs from the `shared` crate convert them with the mappers in
//! `io::mappers`.

pub mod sellers {
    use crate::domain::models::SellerId;

    /// Input for creating a new seller.
    #[derive(Debug, Clone)]
    pub struct CreateSellerCommand {
        pub name: String,
    }

    /// Full replacement of a seller's name.
    #[derive(Debug, Clone)]
    pub struct UpdateSellerCommand {
        pub seller_id: SellerId,
        pub name: String,
    }
}

pub mod sales {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::domain::models::{SaleId, SellerId};

    /// Input for recording a new sale.
    #[derive(Debug, Clone)]
    pub struct CreateSaleCommand {
        pub date: NaiveDate,
        pub amount: Decimal,
        pub seller_id: SellerId,
    }

    /// Replaces every mutable field of an existing sale.
    #[derive(Debug, Clone)]
    pub struct UpdateSaleCommand {
        pub sale_id: SaleId,
        pub date: NaiveDate,
        pub amount: Decimal,
        pub seller_id: SellerId,
    }
}

pub mod reports {
    use chrono::NaiveDate;

    use crate::domain::models::SellerId;

    /// Period statistics for one seller. Both dates are inclusive.
    #[derive(Debug, Clone)]
    pub struct PeriodSummaryQuery {
        pub seller_id: SellerId,
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
    }
}
