//! # Storage Module
//!
//! Persistence for sellers and sales.
//!
//! The domain layer only talks to the traits in [`traits`]; the SQLite
//! implementation in [`sqlite`] is the one shipped with the crate.
//!
//! ## Guarantees expected from a backend
//!
//! - **Atomic single-record writes** and at least read-committed reads
//! - **Store-assigned ids** on first insert
//! - **A unique constraint on normalized seller names**, so a lost race
//!   between two concurrent creates surfaces as a constraint violation
//! - **No cascading deletes**: removing a seller that still has sales is
//!   rejected

pub mod sqlite;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use sqlite::{SqliteConnection, SqliteSaleRepository, SqliteSellerRepository};
pub use traits::{Connection, SaleStorage, SellerStorage, StorageError, StorageResult};
