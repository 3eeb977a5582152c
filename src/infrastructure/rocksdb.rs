use crate::domain::ports::{RateCatalog, StoreUnavailable};
use crate::domain::rate::RateRecord;
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing interest rate records.
pub const CF_RATES: &str = "rates";

/// A persistent rate catalog backed by RocksDB.
///
/// Records live in the "rates" column family, keyed by the big-endian
/// maturity and stored as JSON. Because the maturity is the key, upserting
/// a term overwrites the previous record and the one-rate-per-term rule
/// holds across restarts.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbRateCatalog {
    db: Arc<DB>,
}

impl RocksDbRateCatalog {
    /// Opens or creates a RocksDB instance at the specified path, ensuring
    /// the rates column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreUnavailable> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_rates = ColumnFamilyDescriptor::new(CF_RATES, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_rates])
            .map_err(StoreUnavailable::new)?;

        Ok(Self { db: Arc::new(db) })
    }

    fn rates_cf(&self) -> Result<&ColumnFamily, StoreUnavailable> {
        self.db.cf_handle(CF_RATES).ok_or_else(|| {
            StoreUnavailable::new(std::io::Error::other("rates column family not found"))
        })
    }

    /// Writes the record, replacing any stored rate for its maturity.
    pub async fn upsert(&self, record: RateRecord) -> Result<(), StoreUnavailable> {
        let cf = self.rates_cf()?;
        let key = record.term_years.to_be_bytes();
        let value = serde_json::to_vec(&record).map_err(StoreUnavailable::new)?;
        self.db.put_cf(cf, key, value).map_err(StoreUnavailable::new)
    }
}

#[async_trait]
impl RateCatalog for RocksDbRateCatalog {
    async fn find_by_term(&self, term_years: u32) -> Result<Option<RateRecord>, StoreUnavailable> {
        let cf = self.rates_cf()?;
        let key = term_years.to_be_bytes();

        match self.db.get_cf(cf, key).map_err(StoreUnavailable::new)? {
            Some(bytes) => {
                let record = serde_json::from_slice(&bytes).map_err(StoreUnavailable::new)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<RateRecord>, StoreUnavailable> {
        let cf = self.rates_cf()?;

        let mut records = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = item.map_err(StoreUnavailable::new)?;
            let record: RateRecord =
                serde_json::from_slice(&value).map_err(StoreUnavailable::new)?;
            records.push(record);
        }

        Ok(records)
    }
}
