use crate::domain::ports::{RateCatalog, RateCatalogRef, StoreUnavailable};
use crate::domain::rate::RateRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

struct CacheSlot<T> {
    value: T,
    stored_at: Instant,
}

impl<T> CacheSlot<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }

    fn is_fresh(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() < ttl
    }
}

/// Time-bounded read cache over any rate catalog.
///
/// Only successful reads are remembered: store failures and absent terms
/// always go back to the underlying catalog, so a cached value can lag the
/// store by at most the TTL but can never mask a record that exists. Expired
/// entries are re-fetched, and a failing re-fetch surfaces the failure
/// rather than serving stale data.
pub struct CachedRateCatalog {
    inner: RateCatalogRef,
    ttl: Duration,
    by_term: RwLock<HashMap<u32, CacheSlot<RateRecord>>>,
    listing: RwLock<Option<CacheSlot<Vec<RateRecord>>>>,
}

impl CachedRateCatalog {
    pub fn new(inner: RateCatalogRef, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            by_term: RwLock::new(HashMap::new()),
            listing: RwLock::new(None),
        }
    }
}

#[async_trait]
impl RateCatalog for CachedRateCatalog {
    async fn find_by_term(&self, term_years: u32) -> Result<Option<RateRecord>, StoreUnavailable> {
        {
            let cache = self.by_term.read().await;
            if let Some(slot) = cache.get(&term_years)
                && slot.is_fresh(self.ttl)
            {
                debug!(term_years, "rate cache hit");
                return Ok(Some(slot.value.clone()));
            }
        }

        let fetched = self.inner.find_by_term(term_years).await?;
        if let Some(record) = &fetched {
            let mut cache = self.by_term.write().await;
            cache.insert(term_years, CacheSlot::new(record.clone()));
        }
        Ok(fetched)
    }

    async fn list_all(&self) -> Result<Vec<RateRecord>, StoreUnavailable> {
        {
            let cache = self.listing.read().await;
            if let Some(slot) = cache.as_ref()
                && slot.is_fresh(self.ttl)
            {
                debug!("rate listing cache hit");
                return Ok(slot.value.clone());
            }
        }

        let fetched = self.inner.list_all().await?;
        let mut cache = self.listing.write().await;
        *cache = Some(CacheSlot::new(fetched.clone()));
        Ok(fetched)
    }
}
