mod common;

use actix_web::test;
use api::test_support::{create_test_app, create_test_state};
use common::read_json_with_status;

#[actix_web::test]
async fn test_docs_json_served() {
    let app = create_test_app(create_test_state())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/docs/json").to_request();
    let doc = read_json_with_status(test::call_service(&app, req).await, 200).await;

    assert!(doc["openapi"].as_str().unwrap_or_default().starts_with("3."));
    for path in ["/health", "/auth/login", "/auth/login-bearer", "/users/me", "/users/me-bearer"] {
        assert!(doc["paths"].get(path).is_some(), "missing {path}");
    }
    assert!(doc["paths"]["/users/me"]["get"]["security"].is_array());
    assert_eq!(
        doc["components"]["securitySchemes"]["bearerAuth"]["scheme"],
        "bearer"
    );
}

#[actix_web::test]
async fn test_docs_prefix_redirects_to_swagger_ui() {
    let app = create_test_app(create_test_state())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/docs").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 302);
    assert_eq!(
        resp.headers().get("location").unwrap().to_str().unwrap(),
        "/docs/"
    );
}

#[actix_web::test]
async fn test_swagger_ui_served() {
    let app = create_test_app(create_test_state())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/docs/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let content_type = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");

    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("swagger"));
}
