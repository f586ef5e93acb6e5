//! Test utilities: a fresh database per test plus a storage wrapper that
//! records every call, so tests can assert which queries and mutations an
//! operation reached.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use super::sqlite::{SqliteConnection, SqliteSaleRepository, SqliteSellerRepository};
use super::{Connection, SaleStorage, SellerStorage, StorageResult};
use crate::domain::models::{Sale, SaleDraft, SaleId, Seller, SellerDraft, SellerId};

/// Fresh in-memory database with seeding helpers
pub struct TestEnvironment {
    pub connection: SqliteConnection,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let connection = SqliteConnection::in_memory().await?;
        Ok(Self { connection })
    }

    pub async fn seed_seller(&self, name: &str) -> Seller {
        self.connection
            .create_seller_repository()
            .insert_seller(&SellerDraft::new(name).expect("Invalid seed name"))
            .await
            .expect("Failed to seed seller")
    }

    pub async fn seed_sale(&self, seller: &Seller, date: NaiveDate, amount: Decimal) -> Sale {
        let draft = SaleDraft::new(seller.id, date, amount, date).expect("Invalid seed sale");
        self.connection
            .create_sale_repository()
            .insert_sale(&draft)
            .await
            .expect("Failed to seed sale")
    }

    /// Wrap this environment's connection in a call recorder
    pub fn recording(&self) -> RecordingConnection {
        RecordingConnection::new(self.connection.clone())
    }
}

/// Captures formatted log lines emitted on the current thread while the
/// guard returned by [`LogCapture::install`] is alive.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log capture poisoned")).into_owned()
    }

    /// True when a WARN line containing `needle` was logged
    pub fn warned(&self, needle: &str) -> bool {
        self.output()
            .lines()
            .any(|line| line.contains("WARN") && line.contains(needle))
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log capture poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Ordered names of the storage methods that were invoked
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    fn record(&self, call: &'static str) {
        self.0.lock().expect("call log poisoned").push(call);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().expect("call log poisoned").clone()
    }

    pub fn contains(&self, call: &str) -> bool {
        self.calls().iter().any(|c| *c == call)
    }

    /// True when any insert, update or delete reached storage
    pub fn has_mutation(&self) -> bool {
        self.calls()
            .iter()
            .any(|c| c.starts_with("insert_") || c.starts_with("update_") || c.starts_with("delete_"))
    }
}

#[derive(Clone)]
pub struct RecordingConnection {
    inner: SqliteConnection,
    pub log: CallLog,
}

impl RecordingConnection {
    pub fn new(inner: SqliteConnection) -> Self {
        Self { inner, log: CallLog::default() }
    }
}

impl Connection for RecordingConnection {
    type SellerRepository = RecordingSellerRepository;
    type SaleRepository = RecordingSaleRepository;

    fn create_seller_repository(&self) -> Self::SellerRepository {
        RecordingSellerRepository {
            inner: self.inner.create_seller_repository(),
            log: self.log.clone(),
        }
    }

    fn create_sale_repository(&self) -> Self::SaleRepository {
        RecordingSaleRepository {
            inner: self.inner.create_sale_repository(),
            log: self.log.clone(),
        }
    }
}

#[derive(Clone)]
pub struct RecordingSellerRepository {
    inner: SqliteSellerRepository,
    log: CallLog,
}

#[async_trait]
impl SellerStorage for RecordingSellerRepository {
    async fn get_seller(&self, seller_id: SellerId) -> StorageResult<Option<Seller>> {
        self.log.record("get_seller");
        self.inner.get_seller(seller_id).await
    }

    async fn list_sellers(&self) -> StorageResult<Vec<Seller>> {
        self.log.record("list_sellers");
        self.inner.list_sellers().await
    }

    async fn find_by_normalized_name(&self, normalized_name: &str) -> StorageResult<Option<Seller>> {
        self.log.record("find_by_normalized_name");
        self.inner.find_by_normalized_name(normalized_name).await
    }

    async fn insert_seller(&self, draft: &SellerDraft) -> StorageResult<Seller> {
        self.log.record("insert_seller");
        self.inner.insert_seller(draft).await
    }

    async fn update_seller(&self, seller: &Seller) -> StorageResult<Seller> {
        self.log.record("update_seller");
        self.inner.update_seller(seller).await
    }

    async fn delete_seller(&self, seller: &Seller) -> StorageResult<()> {
        self.log.record("delete_seller");
        self.inner.delete_seller(seller).await
    }
}

#[derive(Clone)]
pub struct RecordingSaleRepository {
    inner: SqliteSaleRepository,
    log: CallLog,
}

#[async_trait]
impl SaleStorage for RecordingSaleRepository {
    async fn get_sale(&self, sale_id: SaleId) -> StorageResult<Option<Sale>> {
        self.log.record("get_sale");
        self.inner.get_sale(sale_id).await
    }

    async fn list_sales(&self) -> StorageResult<Vec<Sale>> {
        self.log.record("list_sales");
        self.inner.list_sales().await
    }

    async fn list_sales_by_seller(&self, seller_id: SellerId) -> StorageResult<Vec<Sale>> {
        self.log.record("list_sales_by_seller");
        self.inner.list_sales_by_seller(seller_id).await
    }

    async fn list_sales_in_range(
        &self,
        seller_id: SellerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StorageResult<Vec<Sale>> {
        self.log.record("list_sales_in_range");
        self.inner.list_sales_in_range(seller_id, start, end).await
    }

    async fn insert_sale(&self, draft: &SaleDraft) -> StorageResult<Sale> {
        self.log.record("insert_sale");
        self.inner.insert_sale(draft).await
    }

    async fn update_sale(&self, sale: &Sale) -> StorageResult<Sale> {
        self.log.record("update_sale");
        self.inner.update_sale(sale).await
    }

    async fn delete_sale(&self, sale: &Sale) -> StorageResult<()> {
        self.log.record("delete_sale");
        self.inner.delete_sale(sale).await
    }
}
