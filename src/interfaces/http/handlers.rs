use super::AppState;
use super::error::ApiError;
use crate::domain::money::Amount;
use crate::domain::mortgage::{FeasibilityDecision, MortgageApplication};
use crate::domain::rate::RateSummary;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

/// Wire shape of a mortgage check.
///
/// Every field is optional here so presence can be reported per field;
/// [`MortgageCheckRequest::into_application`] enforces the actual contract.
#[derive(Debug, Deserialize)]
pub struct MortgageCheckRequest {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub income: Option<Decimal>,
    #[serde(default, rename = "loanValue", with = "rust_decimal::serde::float_option")]
    pub loan_value: Option<Decimal>,
    #[serde(default, rename = "homeValue", with = "rust_decimal::serde::float_option")]
    pub home_value: Option<Decimal>,
    #[serde(default, rename = "maturityPeriod")]
    pub maturity_period: Option<i64>,
}

impl MortgageCheckRequest {
    /// Checks presence and positivity in field order; the first violation
    /// decides the reported message.
    pub fn into_application(self) -> Result<MortgageApplication, ApiError> {
        let income = require_positive(self.income, "Income")?;
        let loan_amount = require_positive(self.loan_value, "Loan value")?;
        let home_value = require_positive(self.home_value, "Home value")?;
        let term_years = require_term(self.maturity_period)?;

        Ok(MortgageApplication {
            income,
            loan_amount,
            home_value,
            term_years,
        })
    }
}

fn require_positive(value: Option<Decimal>, label: &str) -> Result<Amount, ApiError> {
    let value = value.ok_or_else(|| ApiError::Validation(format!("{label} is required")))?;
    Amount::new(value).map_err(|_| ApiError::Validation(format!("{label} must be greater than 0")))
}

fn require_term(value: Option<i64>) -> Result<u32, ApiError> {
    let value = value
        .ok_or_else(|| ApiError::Validation("Maturity period is required".to_string()))?;
    if value <= 0 {
        return Err(ApiError::Validation(
            "Maturity period must be greater than 0".to_string(),
        ));
    }
    u32::try_from(value)
        .map_err(|_| ApiError::Validation("Maturity period is out of range".to_string()))
}

pub async fn check_mortgage(
    State(state): State<AppState>,
    payload: Result<Json<MortgageCheckRequest>, JsonRejection>,
) -> Result<Json<FeasibilityDecision>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        info!(error = %rejection, "mortgage check body could not be read");
        ApiError::Validation("Request body is missing or malformed".to_string())
    })?;

    let application = request.into_application()?;
    let decision = state.engine.check_mortgage(&application).await?;
    Ok(Json(decision))
}

pub async fn list_interest_rates(
    State(state): State<AppState>,
) -> Result<Json<Vec<RateSummary>>, ApiError> {
    let rates = state.rates.list_rates().await?;
    Ok(Json(rates))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}
