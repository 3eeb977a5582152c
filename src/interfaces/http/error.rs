use crate::error::MortgageError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Error payload returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
    pub status: String,
}

/// A failed request: rejected at the boundary before the engine ran, or
/// classified by the engine itself.
#[derive(Debug)]
pub enum ApiError {
    /// The body failed presence or positivity validation.
    Validation(String),
    Engine(MortgageError),
}

impl From<MortgageError> for ApiError {
    fn from(err: MortgageError) -> Self {
        Self::Engine(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(message) => {
                info!(%message, "request rejected by validation");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message.clone())
            }
            ApiError::Engine(err) => {
                let (status, code) = match err {
                    MortgageError::LoanLimitExceeded => {
                        (StatusCode::BAD_REQUEST, "MAX_LOAN_EXCEEDED")
                    }
                    MortgageError::HomeValueExceeded => {
                        (StatusCode::BAD_REQUEST, "HOME_VALUE_EXCEEDED")
                    }
                    MortgageError::RateNotFound => {
                        (StatusCode::NOT_FOUND, "INTEREST_RATE_NOT_FOUND")
                    }
                    MortgageError::Calculation(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "MORTGAGE_CALCULATION_ERROR")
                    }
                    MortgageError::RateFetch(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "INTEREST_RATE_FETCH_ERROR")
                    }
                };
                if status.is_server_error() {
                    error!(error = %err, code, "mortgage request failed");
                } else {
                    info!(error = %err, code, "mortgage request rejected");
                }
                // The stable, documented message; never the wrapped cause.
                (status, code, err.to_string())
            }
        };

        let body = ErrorResponse {
            message,
            code: code.to_string(),
            status: status_name(status).to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Upper snake case status label carried in the error body.
fn status_name(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "BAD_REQUEST",
        StatusCode::NOT_FOUND => "NOT_FOUND",
        _ => "INTERNAL_SERVER_ERROR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_business_rejections_map_to_client_errors() {
        let (status, body) = render(ApiError::Engine(MortgageError::LoanLimitExceeded)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "MAX_LOAN_EXCEEDED");
        assert_eq!(body.status, "BAD_REQUEST");
        assert_eq!(body.message, "Loan value exceeds maximum loan limit.");

        let (status, body) = render(ApiError::Engine(MortgageError::HomeValueExceeded)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "HOME_VALUE_EXCEEDED");

        let (status, body) = render(ApiError::Engine(MortgageError::RateNotFound)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, "INTEREST_RATE_NOT_FOUND");
        assert_eq!(body.status, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_internal_failures_map_to_500_without_the_cause() {
        let cause = std::io::Error::other("rocksdb: io stall on /var/data");
        let (status, body) = render(ApiError::Engine(MortgageError::calculation(cause))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "MORTGAGE_CALCULATION_ERROR");
        assert_eq!(body.status, "INTERNAL_SERVER_ERROR");
        assert_eq!(body.message, "An error occurred while calculating the mortgage.");
        assert!(!body.message.contains("rocksdb"));

        let cause = std::io::Error::other("disk gone");
        let (status, body) = render(ApiError::Engine(MortgageError::rate_fetch(cause))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "INTEREST_RATE_FETCH_ERROR");
        assert_eq!(body.message, "An error occurred while fetching interest rates.");
    }

    #[tokio::test]
    async fn test_validation_rejections_carry_the_field_message() {
        let (status, body) = render(ApiError::Validation("Income is required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert_eq!(body.message, "Income is required");
    }
}
