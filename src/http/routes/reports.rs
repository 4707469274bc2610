//! Report list endpoints
//!
//! The `/p01a04` resource consumed by the unified list widget: paged
//! listing with search, single fetch, create, patch update, bulk delete,
//! and CSV download.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{
    ListParams, NewReport, OwnerName, Page, RegDate, Report, ReportPatch, ReportTitle,
};
use crate::store::export::{to_csv, EXPORT_FILENAME};

/// Create report request
#[derive(Deserialize)]
pub struct CreateReportRequest {
    pub title: String,
    pub owner: String,
    #[serde(rename = "regDate")]
    pub reg_date: Option<String>,
}

/// Update report request; absent fields are left untouched
#[derive(Deserialize)]
pub struct UpdateReportRequest {
    pub title: Option<String>,
    pub owner: Option<String>,
}

/// Create report response
#[derive(Serialize)]
pub struct CreateReportResponse {
    pub status: &'static str,
    pub id: u64,
}

/// Update report response
#[derive(Serialize)]
pub struct UpdateReportResponse {
    pub status: &'static str,
}

/// Bulk delete response; `count` echoes the number of ids requested
#[derive(Serialize)]
pub struct DeleteReportsResponse {
    pub status: &'static str,
    pub count: usize,
}

/// CSV export query params
#[derive(Deserialize, Default)]
pub struct ExportParams {
    pub search: Option<String>,
}

/// GET /p01a04 - list reports with search and pagination
async fn list_reports(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Report>>, ApiError> {
    let page = params.page_request()?;
    let result = state.store.list(page, params.search.as_deref()).await;
    Ok(Json(result))
}

/// GET /p01a04/{id} - fetch a single report
async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Report>, ApiError> {
    let report = state
        .store
        .get(id)
        .await
        .ok_or(ApiError::NotFound { resource: "report", id })?;

    Ok(Json(report))
}

/// POST /p01a04 - create a report
async fn create_report(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateReportRequest>,
) -> Result<(StatusCode, Json<CreateReportResponse>), ApiError> {
    let title = ReportTitle::new(&req.title)?;
    let owner = OwnerName::new(&req.owner)?;
    let reg_date = match req.reg_date.as_deref() {
        Some(date) => RegDate::new(date)?,
        None => RegDate::default(),
    };

    let id = state
        .store
        .create(NewReport { title, owner, reg_date })
        .await;
    tracing::info!(id, "report created");

    Ok((
        StatusCode::CREATED,
        Json(CreateReportResponse { status: "success", id }),
    ))
}

/// PUT /p01a04/{id} - patch title and/or owner
async fn update_report(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateReportRequest>,
) -> Result<Json<UpdateReportResponse>, ApiError> {
    let patch = ReportPatch {
        title: req.title.as_deref().map(ReportTitle::new).transpose()?,
        owner: req.owner.as_deref().map(OwnerName::new).transpose()?,
    };

    if !state.store.update(id, patch).await {
        return Err(ApiError::NotFound { resource: "report", id });
    }

    Ok(Json(UpdateReportResponse { status: "updated" }))
}

/// DELETE /p01a04 - bulk delete by id array
async fn delete_reports(
    State(state): State<Arc<AppState>>,
    Json(ids): Json<Vec<u64>>,
) -> Json<DeleteReportsResponse> {
    let removed = state.store.delete_many(&ids).await;
    tracing::debug!(requested = ids.len(), removed, "bulk delete");

    // count is the number of ids requested, not removed; missing ids
    // are a silent no-op for the caller
    Json(DeleteReportsResponse {
        status: "deleted",
        count: ids.len(),
    })
}

/// GET /p01a04/excel - download the (optionally filtered) list as CSV
async fn export_reports(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportParams>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    let reports = state.store.snapshot(params.search.as_deref()).await;
    let bytes = to_csv(&reports)?;
    tracing::debug!(rows = reports.len(), "CSV export");

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=UTF-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", EXPORT_FILENAME),
        ),
    ];

    Ok((headers, bytes))
}

/// Report routes, nested under /api by the server
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/p01a04",
            get(list_reports).post(create_report).delete(delete_reports),
        )
        .route("/p01a04/excel", get(export_reports))
        .route("/p01a04/{id}", get(get_report).put(update_report))
}
