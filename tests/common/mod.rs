use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use http_body_util::BodyExt;
use mortgage_engine::application::engine::MortgageEngine;
use mortgage_engine::application::rates::RateQueryService;
use mortgage_engine::domain::ports::RateCatalogRef;
use mortgage_engine::domain::rate::RateRecord;
use mortgage_engine::infrastructure::in_memory::InMemoryRateCatalog;
use mortgage_engine::interfaces::http::{AppState, router};
use rust_decimal::Decimal;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn rate(term_years: u32, annual_rate_percent: Decimal) -> RateRecord {
    RateRecord::new(term_years, annual_rate_percent, Utc::now())
}

pub fn router_from(catalog: RateCatalogRef) -> Router {
    let engine = MortgageEngine::new(Arc::clone(&catalog));
    let rates = RateQueryService::new(catalog);
    router(AppState::new(engine, rates))
}

pub fn router_with(records: impl IntoIterator<Item = RateRecord>) -> Router {
    router_from(Arc::new(InMemoryRateCatalog::with_records(records)))
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}
