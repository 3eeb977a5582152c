use crate::domain::ports::{RateCatalog, RateCatalogRef};
use crate::domain::rate::RateSummary;
use crate::error::{MortgageError, Result};
use tracing::{debug, error};

/// Read path for the published interest rates.
///
/// Projects store records into their external shape. Any store failure is
/// reported as [`MortgageError::RateFetch`]; there is no partial listing.
pub struct RateQueryService {
    catalog: RateCatalogRef,
}

impl RateQueryService {
    pub fn new(catalog: RateCatalogRef) -> Self {
        Self { catalog }
    }

    pub async fn list_rates(&self) -> Result<Vec<RateSummary>> {
        debug!("fetching interest rates");

        let records = self.catalog.list_all().await.map_err(|e| {
            error!(error = %e, "interest rate listing failed");
            MortgageError::rate_fetch(e)
        })?;

        Ok(records.into_iter().map(RateSummary::from).collect())
    }
}
