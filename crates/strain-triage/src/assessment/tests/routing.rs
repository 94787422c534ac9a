use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request builds")
}

#[tokio::test]
async fn analyze_returns_assessment_for_valid_report() {
    let response = router()
        .oneshot(post_json("/api/analyze/", payload(&severe_report()).to_string()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["risk_level"], json!("RED"));
    assert_eq!(body["structural_risk"], json!(80));
    assert_eq!(
        body["likely_issue"],
        json!("Possible structural concern — get it checked.")
    );
    assert_eq!(body["recommendations"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["monitor_for"].as_array().map(Vec::len), Some(4));

    let keys: Vec<&str> = body
        .as_object()
        .expect("object body")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.len(), 9);
}

#[tokio::test]
async fn analyze_without_trailing_slash_is_routed() {
    let response = router()
        .oneshot(post_json("/api/analyze", payload(&report()).to_string()))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn analyze_returns_field_errors_for_invalid_report() {
    let mut body = payload(&report());
    body["pain_scale"] = json!(12);
    body.as_object_mut()
        .expect("object payload")
        .remove("swelling");

    let response = router()
        .oneshot(post_json("/api/analyze/", body.to_string()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let errors = read_json_body(response).await;
    assert_eq!(
        errors,
        json!({
            "pain_scale": ["Ensure this value is less than or equal to 10."],
            "swelling": ["This field is required."],
        })
    );
}

#[tokio::test]
async fn analyze_rejects_malformed_json() {
    let response = router()
        .oneshot(post_json("/api/analyze/", "{\"pain_scale\": ".to_string()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    let detail = body["detail"].as_str().expect("detail message");
    assert!(detail.starts_with("JSON parse error"), "{detail}");
}

#[tokio::test]
async fn analyze_requires_json_content_type() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/analyze/")
        .body(Body::from(payload(&report()).to_string()))
        .expect("request builds");

    let response = router().oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn analyze_only_accepts_post() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/analyze/")
        .body(Body::empty())
        .expect("request builds");

    let response = router().oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn choices_lists_allowed_values() {
    let request = Request::builder()
        .uri("/api/choices/")
        .body(Body::empty())
        .expect("request builds");

    let response = router().oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = read_json_body(response).await;
    assert_eq!(body["pain_locations"].as_array().map(Vec::len), Some(11));
    assert_eq!(body["pain_types"][0], json!("Dull ache"));
    assert_eq!(body["onset_timing"][2], json!("Next day"));
}
