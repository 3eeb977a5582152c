use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An interest rate record as owned by the external rate store.
///
/// There is at most one record per maturity; the store implementations key
/// on `term_years` so a duplicate seed simply replaces the previous record.
/// The engine only ever reads these.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RateRecord {
    /// Opaque store identifier.
    pub id: Uuid,
    /// Loan maturity this rate applies to, in years. Always positive.
    pub term_years: u32,
    /// Yearly rate as a percentage, e.g. `5.0` for 5%. Never negative.
    pub annual_rate_percent: Decimal,
    /// When the rate was last revised.
    pub last_updated: DateTime<Utc>,
}

impl RateRecord {
    pub fn new(term_years: u32, annual_rate_percent: Decimal, last_updated: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            term_years,
            annual_rate_percent,
            last_updated,
        }
    }
}

/// Externally visible projection of a [`RateRecord`].
///
/// Strips the store identifier and carries the public API field names.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RateSummary {
    #[serde(rename = "maturityPeriod")]
    pub term_years: u32,
    #[serde(rename = "interestRate", with = "rust_decimal::serde::float")]
    pub annual_rate_percent: Decimal,
    #[serde(rename = "lastUpdate")]
    pub last_updated: DateTime<Utc>,
}

impl From<RateRecord> for RateSummary {
    fn from(record: RateRecord) -> Self {
        Self {
            term_years: record.term_years,
            annual_rate_percent: record.annual_rate_percent,
            last_updated: record.last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_drops_the_store_identifier() {
        let record = RateRecord::new(30, dec!(5.0), Utc::now());
        let summary = RateSummary::from(record.clone());

        assert_eq!(summary.term_years, 30);
        assert_eq!(summary.annual_rate_percent, dec!(5.0));
        assert_eq!(summary.last_updated, record.last_updated);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["maturityPeriod"], 30);
        assert_eq!(json["interestRate"], 5.0);
    }

    #[test]
    fn test_each_record_gets_a_fresh_id() {
        let a = RateRecord::new(10, dec!(5.0), Utc::now());
        let b = RateRecord::new(10, dec!(5.0), Utc::now());
        assert_ne!(a.id, b.id);
    }
}
