use thiserror::Error;

pub type Result<T> = std::result::Result<T, MortgageError>;

/// Every failure a mortgage check or rate listing can surface.
///
/// The first three variants are business rejections raised at the point of
/// detection and passed through to the caller unchanged. `Calculation` and
/// `RateFetch` wrap unexpected failures (store outages, arithmetic edge
/// cases); the underlying cause stays available through `Error::source` for
/// diagnostics and is never echoed to callers.
#[derive(Debug, Error)]
pub enum MortgageError {
    /// Requested loan exceeds the income-based cap.
    #[error("Loan value exceeds maximum loan limit.")]
    LoanLimitExceeded,
    /// Requested loan exceeds the value of the collateral.
    #[error("Loan value exceeds home value.")]
    HomeValueExceeded,
    /// No rate record exists for the requested maturity.
    #[error("No interest rate found for the given maturity period.")]
    RateNotFound,
    /// The feasibility check failed for a non-business reason.
    #[error("An error occurred while calculating the mortgage.")]
    Calculation(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The rate listing failed against the underlying store.
    #[error("An error occurred while fetching interest rates.")]
    RateFetch(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl MortgageError {
    pub fn calculation<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Calculation(Box::new(source))
    }

    pub fn rate_fetch<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::RateFetch(Box::new(source))
    }
}
