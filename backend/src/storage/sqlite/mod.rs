//! # SQLite Storage Module
//!
//! sqlx-backed implementation of the storage traits.
//!
//! - **connection.rs** - pool setup and schema
//! - **seller_repository.rs** / **sale_repository.rs** - trait implementations

pub mod connection;
pub mod sale_repository;
pub mod seller_repository;

pub use connection::SqliteConnection;
pub use sale_repository::SqliteSaleRepository;
pub use seller_repository::SqliteSellerRepository;

use crate::storage::StorageError;

/// Separate constraint failures from every other sqlx error
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation()
            || db_err.is_foreign_key_violation()
            || db_err.is_check_violation()
        {
            return StorageError::ConstraintViolation(db_err.message().to_string());
        }
    }
    StorageError::Backend(err.into())
}
