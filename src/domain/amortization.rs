use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use thiserror::Error;

pub const MONTHS_IN_YEAR: u32 = 12;

/// Failures local to the payment computation. The engine wraps these; they
/// never reach callers directly.
#[derive(Debug, Error, PartialEq)]
pub enum AmortizationError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },
    #[error("arithmetic overflow computing {context}")]
    Overflow { context: String },
    #[error("division by zero computing {context}")]
    DivisionByZero { context: String },
}

/// Prices the constant monthly payment of a loan.
///
/// A trait so the repayment scheme can be swapped without touching the
/// engine; [`StandardMortgageCalculator`] is the one scheme shipped.
pub trait MortgageCalculator: Send + Sync {
    fn monthly_payment(
        &self,
        loan_amount: Decimal,
        annual_rate_percent: Decimal,
        term_years: u32,
    ) -> Result<Decimal, AmortizationError>;
}

/// Fixed-rate annuity pricing.
///
/// With `r` the monthly rate and `n` the number of payments:
///
/// ```text
/// payment = loan * r * (1 + r)^n / ((1 + r)^n - 1)
/// ```
///
/// A zero rate degenerates to straight-line repayment `loan / n`. All
/// arithmetic stays in `Decimal`; the result is intentionally unrounded so
/// the caller decides the output precision.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardMortgageCalculator;

impl MortgageCalculator for StandardMortgageCalculator {
    fn monthly_payment(
        &self,
        loan_amount: Decimal,
        annual_rate_percent: Decimal,
        term_years: u32,
    ) -> Result<Decimal, AmortizationError> {
        if term_years == 0 {
            return Err(AmortizationError::InvalidInput {
                field: "term_years".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if loan_amount <= Decimal::ZERO {
            return Err(AmortizationError::InvalidInput {
                field: "loan_amount".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if annual_rate_percent < Decimal::ZERO {
            return Err(AmortizationError::InvalidInput {
                field: "annual_rate_percent".into(),
                reason: "must not be negative".into(),
            });
        }

        let periods = term_years
            .checked_mul(MONTHS_IN_YEAR)
            .map(Decimal::from)
            .ok_or_else(|| AmortizationError::Overflow {
                context: "period count".into(),
            })?;
        let monthly_rate = annual_rate_percent / dec!(100) / Decimal::from(MONTHS_IN_YEAR);

        if monthly_rate.is_zero() {
            return Ok(loan_amount / periods);
        }

        let growth = (Decimal::ONE + monthly_rate)
            .checked_powd(periods)
            .ok_or_else(|| AmortizationError::Overflow {
                context: "growth factor".into(),
            })?;
        let annuity_denominator = growth - Decimal::ONE;
        if annuity_denominator.is_zero() {
            return Err(AmortizationError::DivisionByZero {
                context: "annuity factor".into(),
            });
        }

        loan_amount
            .checked_mul(monthly_rate)
            .and_then(|v| v.checked_mul(growth))
            .and_then(|v| v.checked_div(annuity_denominator))
            .ok_or_else(|| AmortizationError::Overflow {
                context: "monthly payment".into(),
            })
    }
}
