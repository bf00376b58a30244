#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::AUTHORIZATION;
use actix_web::test;
use serde_json::Value;

pub mod proptest_prelude;

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    api_test_support::logging::init();
}

/// `Authorization` header pair for `Bearer <token>`
pub fn bearer_header(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {token}"))
}

/// Read a JSON body after asserting the status
pub async fn read_json_with_status(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
) -> Value {
    assert_eq!(resp.status().as_u16(), expected_status);
    test::read_body_json(resp).await
}
