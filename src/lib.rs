//! mynova-list-server: HTTP API for the unified report list page
//!
//! Exposes the `/api/p01a04` endpoint set consumed by the list widget:
//! search + offset pagination, single fetch, create, patch update, bulk
//! delete, and CSV download. All data lives in an in-memory store seeded
//! with synthetic reports at startup.

pub mod http;
pub mod models;
pub mod store;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use store::ReportStore;
