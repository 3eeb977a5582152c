use super::money::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A mortgage application as seen by the decision engine.
///
/// All monetary fields are known to be positive by construction; the
/// transport layer rejects anything else before an application is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageApplication {
    /// Applicant's gross yearly income.
    pub income: Amount,
    /// Requested loan principal.
    pub loan_amount: Amount,
    /// Market value of the home backing the loan.
    pub home_value: Amount,
    /// Loan maturity in years.
    pub term_years: u32,
}

/// Outcome of a successful feasibility check.
///
/// Produced once per request and never persisted. `feasible` is always
/// `true` here: an application that fails a rule is rejected with an error
/// instead of producing a decision.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct FeasibilityDecision {
    pub feasible: bool,
    /// Constant monthly payment, rounded to the cent.
    #[serde(rename = "monthlyCost", with = "rust_decimal::serde::float")]
    pub monthly_payment: Decimal,
}
