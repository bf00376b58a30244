//! Error body test helpers
//!
//! Assertions for the API's `{"message": ...}` error contract that do not
//! depend on the API crate's own types.

use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the API's error body
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ErrorBodyLike {
    message: String,
}

/// Assert that response parts conform to the error contract
///
/// Validates:
/// - HTTP status matches expected
/// - body is exactly `{"message": <expected_message>}`
/// - x-trace-id header exists and is non-empty
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &actix_web::http::header::HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_message: &str,
) {
    assert_eq!(status, expected_status);

    let body: ErrorBodyLike = serde_json::from_slice(body_bytes).unwrap_or_else(|e| {
        panic!(
            "Response body should be an error body, got {:?}: {e}",
            String::from_utf8_lossy(body_bytes)
        )
    });
    assert_eq!(body.message, expected_message);

    let trace_id = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");
}

/// Assert that a ServiceResponse conforms to the error contract
pub async fn assert_error_body_from_service_response(
    resp: actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
    expected_status: StatusCode,
    expected_message: &str,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_body_from_parts(status, &headers, &body, expected_status, expected_message);
}
