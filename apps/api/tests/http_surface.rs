//! Integration tests for the non-analysis HTTP surface:
//! /health, /personas, and /parse-pdf.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use api::routes::build_router;
use api::state::AppState;

fn test_app() -> Router {
    build_router(AppState {
        http: reqwest::Client::new(),
    })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn multipart_request(boundary: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/parse-pdf")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_health_reports_ok() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "prd-review-api");
}

#[tokio::test]
async fn test_personas_lists_all_four() {
    let request = Request::builder()
        .uri("/personas")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::OK);

    let personas = body.as_array().unwrap();
    assert_eq!(personas.len(), 4);
    let ids: Vec<&str> = personas
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        ["senior-pm", "engineering-lead", "executive", "pm-coach"]
    );
    assert_eq!(personas[0]["label"], "Senior PM Review");
}

#[tokio::test]
async fn test_parse_pdf_without_file_field_returns_400() {
    let boundary = "X-TEST-BOUNDARY";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"comment\"\r\n\r\n\
         not a file\r\n\
         --{boundary}--\r\n"
    );

    let (status, body) = send(test_app(), multipart_request(boundary, body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No file provided"}));
}

#[tokio::test]
async fn test_parse_pdf_with_invalid_file_returns_500() {
    let boundary = "X-TEST-BOUNDARY";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"prd.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n\
         this is not a pdf\r\n\
         --{boundary}--\r\n"
    );

    let (status, body) = send(test_app(), multipart_request(boundary, body)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Failed to parse PDF. Make sure the file is a valid PDF."})
    );
}
