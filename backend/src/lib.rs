//! # Sales Backend
//!
//! Seller and sale bookkeeping with period reporting.
//!
//! The crate is split into the same layers the rest of the workspace expects:
//! ```text
//! Transport (not part of this crate)
//!     ↓  shared DTOs
//! IO Layer (mappers between DTOs and domain commands/models)
//!     ↓
//! Domain Layer (validation, lifecycle, aggregation)
//!     ↓
//! Storage Layer (SQLite through sqlx)
//! ```
//!
//! `initialize_backend` wires a configured database into ready-to-use services.

pub mod config;
pub mod domain;
pub mod io;
pub mod logging;
pub mod storage;

use anyhow::{Context, Result};
use tracing::info;

pub use config::BackendConfig;
pub use domain::{SaleService, SalesAggregator, SalesError, SellerService};
pub use storage::SqliteConnection;

/// Services shared by every request handled on top of this crate
#[derive(Clone)]
pub struct AppState {
    pub seller_service: SellerService<SqliteConnection>,
    pub sale_service: SaleService<SqliteConnection>,
    pub sales_aggregator: SalesAggregator<SqliteConnection>,
}

impl AppState {
    /// Build every service on top of an already opened connection
    pub fn new(connection: SqliteConnection) -> Self {
        Self {
            seller_service: SellerService::new(&connection),
            sale_service: SaleService::new(&connection),
            sales_aggregator: SalesAggregator::new(&connection),
        }
    }
}

/// Open the configured database and set up all services
pub async fn initialize_backend(config: &BackendConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let connection = SqliteConnection::new(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    info!("Setting up domain services");
    Ok(AppState::new(connection))
}
