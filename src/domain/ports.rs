use super::rate::RateRecord;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// The rate store could not answer at all.
///
/// Kept separate from "no record for that maturity" (`Ok(None)`) so callers
/// can tell a negative answer from no answer. Wraps whatever the backing
/// store reported.
#[derive(Debug, Error)]
#[error("rate store unavailable: {source}")]
pub struct StoreUnavailable {
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl StoreUnavailable {
    pub fn new<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            source: Box::new(source),
        }
    }
}

/// Store abstraction over interest rate records.
#[async_trait]
pub trait RateCatalog: Send + Sync {
    /// Exact-match lookup for the given maturity. No fallback to the
    /// nearest term: `Ok(None)` means the store answered and has nothing.
    async fn find_by_term(&self, term_years: u32) -> Result<Option<RateRecord>, StoreUnavailable>;

    /// Every record the store currently holds, in store order.
    async fn list_all(&self) -> Result<Vec<RateRecord>, StoreUnavailable>;
}

/// Shared handle to a rate catalog implementation.
pub type RateCatalogRef = Arc<dyn RateCatalog>;
