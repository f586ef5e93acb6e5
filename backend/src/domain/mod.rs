//! # Domain Module
//!
//! Business rules for sellers, sales and period reporting.
//!
//! ## Module Organization
//!
//! - **models**: Sellers, sales, periods, money helpers and computed summaries
//! - **seller_name_guard**: The single authority on normalized seller-name uniqueness
//! - **seller_service** / **sale_service**: Lookup-or-fail, validation and persistence
//! - **sales_aggregator**: Totals and daily averages over an inclusive period
//! - **commands**: Typed inputs accepted by the services
//!
//! ## Business Rules
//!
//! - No two sellers share a name once trimmed and case folded
//! - Stored names keep their display casing
//! - Sale amounts are strictly positive and never in the future
//! - A period includes both of its boundary days and never ends before it starts
//! - Daily averages are rounded half-up to cents

pub mod commands;
pub mod errors;
pub mod lookup;
pub mod models;
pub mod sale_service;
pub mod sales_aggregator;
pub mod seller_name_guard;
pub mod seller_service;

pub use errors::SalesError;
pub use sale_service::SaleService;
pub use sales_aggregator::SalesAggregator;
pub use seller_name_guard::SellerNameGuard;
pub use seller_service::SellerService;
