use crate::domain::ports::{RateCatalog, StoreUnavailable};
use crate::domain::rate::RateRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory rate catalog.
///
/// Uses `Arc<RwLock<HashMap<u32, RateRecord>>>` to allow shared concurrent
/// access. Keyed by maturity, so the store can never hold two records for
/// the same term. Ideal for testing or when persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryRateCatalog {
    rates: Arc<RwLock<HashMap<u32, RateRecord>>>,
}

impl InMemoryRateCatalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-seeded with the given records. Later records
    /// replace earlier ones sharing the same maturity.
    pub fn with_records(records: impl IntoIterator<Item = RateRecord>) -> Self {
        let rates = records
            .into_iter()
            .map(|record| (record.term_years, record))
            .collect();
        Self {
            rates: Arc::new(RwLock::new(rates)),
        }
    }

    /// Inserts the record, replacing any previous rate for its maturity.
    pub async fn upsert(&self, record: RateRecord) {
        let mut rates = self.rates.write().await;
        rates.insert(record.term_years, record);
    }
}

#[async_trait]
impl RateCatalog for InMemoryRateCatalog {
    async fn find_by_term(&self, term_years: u32) -> Result<Option<RateRecord>, StoreUnavailable> {
        let rates = self.rates.read().await;
        Ok(rates.get(&term_years).cloned())
    }

    async fn list_all(&self) -> Result<Vec<RateRecord>, StoreUnavailable> {
        let rates = self.rates.read().await;
        Ok(rates.values().cloned().collect())
    }
}
