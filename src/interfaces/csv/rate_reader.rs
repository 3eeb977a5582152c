use crate::domain::rate::RateRecord;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use thiserror::Error;

/// A seed row rejected before it could become a catalog record.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid rate row: {0}")]
    InvalidRow(String),
}

/// One row of the rate seed file.
///
/// `last_updated` is optional RFC 3339; an absent or empty field means the
/// record is stamped with the load time.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct RateSeedRow {
    pub term_years: u32,
    pub annual_rate_percent: Decimal,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl RateSeedRow {
    fn into_record(self) -> Result<RateRecord, SeedError> {
        if self.term_years == 0 {
            return Err(SeedError::InvalidRow(
                "term_years must be greater than 0".to_string(),
            ));
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(SeedError::InvalidRow(
                "annual_rate_percent must not be negative".to_string(),
            ));
        }

        Ok(RateRecord::new(
            self.term_years,
            self.annual_rate_percent,
            self.last_updated.unwrap_or_else(Utc::now),
        ))
    }
}

/// Reads rate records from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<RateRecord, SeedError>`. It handles whitespace trimming and
/// flexible record lengths automatically.
pub struct RateReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RateReader<R> {
    /// Creates a new `RateReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates seed rows.
    pub fn rates(self) -> impl Iterator<Item = Result<RateRecord, SeedError>> {
        self.reader
            .into_deserialize::<RateSeedRow>()
            .map(|row| row.map_err(SeedError::from).and_then(RateSeedRow::into_record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "term_years, annual_rate_percent, last_updated\n\
                    30, 5.0, 2026-01-15T10:00:00Z\n\
                    10, 4.25,";
        let reader = RateReader::new(data.as_bytes());
        let records: Vec<_> = reader.rates().collect();

        assert_eq!(records.len(), 2);

        let thirty = records[0].as_ref().unwrap();
        assert_eq!(thirty.term_years, 30);
        assert_eq!(thirty.annual_rate_percent, dec!(5.0));
        assert_eq!(
            thirty.last_updated,
            "2026-01-15T10:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );

        // Empty timestamp defaults to the load time.
        let ten = records[1].as_ref().unwrap();
        assert_eq!(ten.annual_rate_percent, dec!(4.25));
        assert!(ten.last_updated <= Utc::now());
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "term_years, annual_rate_percent, last_updated\nthirty, 5.0,";
        let reader = RateReader::new(data.as_bytes());
        let records: Vec<_> = reader.rates().collect();

        assert!(matches!(records[0], Err(SeedError::Csv(_))));
    }

    #[test]
    fn test_reader_rejects_zero_term() {
        let data = "term_years, annual_rate_percent, last_updated\n0, 5.0,";
        let reader = RateReader::new(data.as_bytes());
        let records: Vec<_> = reader.rates().collect();

        assert!(matches!(records[0], Err(SeedError::InvalidRow(_))));
    }

    #[test]
    fn test_reader_rejects_negative_rate() {
        let data = "term_years, annual_rate_percent, last_updated\n30, -1.0,";
        let reader = RateReader::new(data.as_bytes());
        let records: Vec<_> = reader.rates().collect();

        assert!(matches!(records[0], Err(SeedError::InvalidRow(_))));
    }

    #[test]
    fn test_zero_rate_rows_are_allowed() {
        let data = "term_years, annual_rate_percent, last_updated\n5, 0.0,";
        let reader = RateReader::new(data.as_bytes());
        let records: Vec<_> = reader.rates().collect();

        assert_eq!(records[0].as_ref().unwrap().annual_rate_percent, dec!(0.0));
    }
}
