//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `MortgageEngine`, the primary entry point for
//! feasibility checks, and the `RateQueryService` read path over the rate
//! catalog. Both are stateless and safe to share across requests.

pub mod engine;
pub mod rates;
