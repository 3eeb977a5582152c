use crate::domain::amortization::{MortgageCalculator, StandardMortgageCalculator};
use crate::domain::feasibility::FeasibilityValidator;
use crate::domain::mortgage::{FeasibilityDecision, MortgageApplication};
use crate::domain::ports::{RateCatalog, RateCatalogRef};
use crate::error::{MortgageError, Result};
use rust_decimal::RoundingStrategy;
use tracing::{error, info};

/// The main entry point for mortgage feasibility checks.
///
/// `MortgageEngine` runs every application through the same pipeline:
/// business validation, rate lookup, payment calculation, response assembly.
/// It owns the error translation policy: business rejections pass through
/// unchanged, anything unexpected in lookup or calculation is wrapped as
/// [`MortgageError::Calculation`] with its cause kept for diagnostics.
pub struct MortgageEngine {
    catalog: RateCatalogRef,
    calculator: Box<dyn MortgageCalculator>,
    validator: FeasibilityValidator,
}

impl MortgageEngine {
    /// Creates an engine with the standard annuity calculator and the
    /// default affordability multiplier.
    pub fn new(catalog: RateCatalogRef) -> Self {
        Self {
            catalog,
            calculator: Box::new(StandardMortgageCalculator),
            validator: FeasibilityValidator::default(),
        }
    }

    pub fn with_validator(mut self, validator: FeasibilityValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_calculator(mut self, calculator: Box<dyn MortgageCalculator>) -> Self {
        self.calculator = calculator;
        self
    }

    /// Checks one application and prices its monthly payment.
    ///
    /// The monthly payment is rounded to the cent here, at the response
    /// boundary; everything before runs at full precision.
    pub async fn check_mortgage(
        &self,
        application: &MortgageApplication,
    ) -> Result<FeasibilityDecision> {
        info!(
            income = %application.income,
            loan_value = %application.loan_amount,
            home_value = %application.home_value,
            maturity_years = application.term_years,
            "checking mortgage feasibility"
        );

        if let Err(e) = self.validator.validate(application) {
            info!(reason = %e, "mortgage application rejected");
            return Err(e);
        }

        let record = match self.catalog.find_by_term(application.term_years).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                info!(
                    maturity_years = application.term_years,
                    "no interest rate found for maturity period"
                );
                return Err(MortgageError::RateNotFound);
            }
            Err(e) => {
                error!(error = %e, "interest rate lookup failed");
                return Err(MortgageError::calculation(e));
            }
        };

        let payment = self
            .calculator
            .monthly_payment(
                application.loan_amount.value(),
                record.annual_rate_percent,
                application.term_years,
            )
            .map_err(|e| {
                error!(error = %e, "monthly payment calculation failed");
                MortgageError::calculation(e)
            })?;

        let monthly_payment =
            payment.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        info!(%monthly_payment, "mortgage application is feasible");

        Ok(FeasibilityDecision {
            feasible: true,
            monthly_payment,
        })
    }
}
