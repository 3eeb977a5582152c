//! HTTP surface of the mortgage service: two versioned endpoints plus a
//! liveness probe, with request tracing attached at the router.

pub mod error;
pub mod handlers;

use crate::application::engine::MortgageEngine;
use crate::application::rates::RateQueryService;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared wiring handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MortgageEngine>,
    pub rates: Arc<RateQueryService>,
}

impl AppState {
    pub fn new(engine: MortgageEngine, rates: RateQueryService) -> Self {
        Self {
            engine: Arc::new(engine),
            rates: Arc::new(rates),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/interest-rates", get(handlers::list_interest_rates))
        .route("/api/v1/mortgage-check", post(handlers::check_mortgage))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
