//! Endpoint contract tests against the real router

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use mynova_list_server::{build_router, AppState, ReportStore};

fn app(seed: u32) -> Router {
    let state = Arc::new(AppState {
        store: ReportStore::seeded(seed),
    });
    build_router(state, false)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn list_defaults_to_first_page_of_ten() {
    let response = app(23).oneshot(get("/api/p01a04")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["page"], 0);
    assert_eq!(body["totalPages"], 3);

    let content = body["content"].as_array().unwrap();
    assert_eq!(content.len(), 10);
    assert_eq!(content[0]["id"], 1);
    assert_eq!(content[0]["title"], "Report 1");
    assert_eq!(content[0]["owner"], "Hong Gildong");
    assert_eq!(content[0]["regDate"], "2025-10-06");
}

#[tokio::test]
async fn list_paginates_and_echoes_page() {
    let response = app(23)
        .oneshot(get("/api/p01a04?page=2&size=10"))
        .await
        .unwrap();
    let body = body_json(response).await;

    assert_eq!(body["page"], 2);
    assert_eq!(body["totalPages"], 3);
    let content = body["content"].as_array().unwrap();
    assert_eq!(content.len(), 3);
    assert_eq!(content[0]["id"], 21);
}

#[tokio::test]
async fn list_page_past_end_is_empty() {
    let response = app(23)
        .oneshot(get("/api/p01a04?page=9&size=10"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["content"].as_array().unwrap().is_empty());
    assert_eq!(body["totalPages"], 3);
}

#[tokio::test]
async fn list_search_filters_before_paging() {
    // "Report 1" matches Report 1, 10-19 as substrings: 11 records
    let response = app(23)
        .oneshot(get("/api/p01a04?search=Report%201&size=10"))
        .await
        .unwrap();
    let body = body_json(response).await;

    assert_eq!(body["totalPages"], 2);
    let content = body["content"].as_array().unwrap();
    assert_eq!(content.len(), 10);
    assert_eq!(content[0]["id"], 1);
    assert_eq!(content[1]["id"], 10);
}

#[tokio::test]
async fn list_search_with_no_match_has_zero_pages() {
    let response = app(23)
        .oneshot(get("/api/p01a04?search=nothing"))
        .await
        .unwrap();
    let body = body_json(response).await;

    assert!(body["content"].as_array().unwrap().is_empty());
    assert_eq!(body["totalPages"], 0);
}

#[tokio::test]
async fn list_rejects_zero_size() {
    let response = app(5).oneshot(get("/api/p01a04?size=0")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn list_rejects_malformed_page_number() {
    let response = app(5).oneshot(get("/api/p01a04?page=abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_by_id_returns_report() {
    let response = app(5).oneshot(get("/api/p01a04/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], 3);
    assert_eq!(body["title"], "Report 3");
    assert_eq!(body["regDate"], "2025-10-06");
}

#[tokio::test]
async fn get_missing_id_is_404_with_error_body() {
    let response = app(5).oneshot(get("/api/p01a04/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
    assert!(body["message"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn get_non_numeric_id_is_client_error() {
    let response = app(5).oneshot(get("/api/p01a04/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_assigns_next_id() {
    let app = app(23);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/p01a04",
            json!({"title": "New report", "owner": "Kim"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["id"], 24);

    // Readable back, with the default registration date
    let response = app.oneshot(get("/api/p01a04/24")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["title"], "New report");
    assert_eq!(body["owner"], "Kim");
    assert_eq!(body["regDate"], "2025-10-06");
}

#[tokio::test]
async fn create_honors_explicit_reg_date() {
    let app = app(0);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/p01a04",
            json!({"title": "Dated", "owner": "Lee", "regDate": "2024-01-15"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/api/p01a04/1")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["regDate"], "2024-01-15");
}

#[tokio::test]
async fn create_rejects_empty_title() {
    let response = app(0)
        .oneshot(json_request(
            "POST",
            "/api/p01a04",
            json!({"title": "  ", "owner": "Kim"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn create_rejects_malformed_reg_date() {
    let response = app(0)
        .oneshot(json_request(
            "POST",
            "/api/p01a04",
            json!({"title": "x", "owner": "y", "regDate": "15.01.2024"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_patches_supplied_fields_only() {
    let app = app(3);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/p01a04/2",
            json!({"title": "Renamed"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "updated");

    let response = app.oneshot(get("/api/p01a04/2")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["title"], "Renamed");
    assert_eq!(body["owner"], "Hong Gildong"); // absent in patch, untouched
}

#[tokio::test]
async fn update_missing_id_is_404() {
    let response = app(3)
        .oneshot(json_request(
            "PUT",
            "/api/p01a04/42",
            json!({"title": "Ghost"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn bulk_delete_reports_requested_count() {
    let app = app(5);

    // 3 requested, only 2 exist
    let response = app
        .clone()
        .oneshot(json_request("DELETE", "/api/p01a04", json!([2, 4, 99])))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "deleted");
    assert_eq!(body["count"], 3);

    // The two matches are gone, the rest untouched
    let response = app.clone().oneshot(get("/api/p01a04/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/api/p01a04?size=10")).await.unwrap();
    let body = body_json(response).await;
    let ids: Vec<u64> = body["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3, 5]);
}

#[tokio::test]
async fn csv_export_has_attachment_headers() {
    let response = app(2).oneshot(get("/api/p01a04/excel")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(content_type, "text/csv; charset=UTF-8");

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(disposition, "attachment; filename=p01a04_list.csv");

    let text = body_text(response).await;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "id,title,owner,regDate");
    assert_eq!(lines[1], "1,Report 1,Hong Gildong,2025-10-06");
}

#[tokio::test]
async fn csv_export_honors_search() {
    let response = app(23)
        .oneshot(get("/api/p01a04/excel?search=Report%202"))
        .await
        .unwrap();

    let text = body_text(response).await;
    let lines: Vec<&str> = text.lines().collect();
    // Report 2, 20, 21, 22, 23 + header
    assert_eq!(lines.len(), 6);
    assert!(lines[1].starts_with("2,"));
}

#[tokio::test]
async fn csv_export_quotes_embedded_commas() {
    let app = app(0);

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/p01a04",
            json!({"title": "Budget, revised", "owner": "Kim"}),
        ))
        .await
        .unwrap();

    let response = app.oneshot(get("/api/p01a04/excel")).await.unwrap();
    let text = body_text(response).await;
    assert!(text.contains("\"Budget, revised\""));
}
