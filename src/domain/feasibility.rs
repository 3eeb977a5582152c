use super::mortgage::MortgageApplication;
use crate::error::{MortgageError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default income multiplier for the affordability cap.
pub const DEFAULT_MAX_LOAN_MULTIPLIER: Decimal = dec!(4.5);

/// Applies the affordability and collateral rules to an application.
///
/// Affordability is checked first; the first violated rule decides the
/// rejection, so an application failing both is reported as exceeding the
/// loan limit. Pure: no side effects, no store access.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibilityValidator {
    max_loan_multiplier: Decimal,
}

impl Default for FeasibilityValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LOAN_MULTIPLIER)
    }
}

impl FeasibilityValidator {
    pub fn new(max_loan_multiplier: Decimal) -> Self {
        Self {
            max_loan_multiplier,
        }
    }

    pub fn max_loan_multiplier(&self) -> Decimal {
        self.max_loan_multiplier
    }

    pub fn validate(&self, application: &MortgageApplication) -> Result<()> {
        let loan = application.loan_amount.value();

        // If the cap itself overflows it exceeds any representable loan,
        // so only a computable cap can reject.
        if let Some(max_loan) = application.income.value().checked_mul(self.max_loan_multiplier)
            && loan > max_loan
        {
            return Err(MortgageError::LoanLimitExceeded);
        }

        if loan > application.home_value.value() {
            return Err(MortgageError::HomeValueExceeded);
        }

        Ok(())
    }
}
