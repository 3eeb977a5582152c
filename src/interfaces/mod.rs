//! Inbound adapters: CSV seeding for the rate catalog and the HTTP API.

pub mod csv;
pub mod http;
