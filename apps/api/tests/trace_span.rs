//! Handler and security logs inherit the request's trace id.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use actix_web::{test, web, HttpResponse};
use api::test_support::{create_test_app, create_test_state};
use serde_json::{json, Value};
use serial_test::serial;
use tracing::info;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;

/// Appends JSON lines to a shared buffer.
#[derive(Clone)]
struct BufWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Install a JSON subscriber for the current thread and return its buffer.
fn capture() -> (Arc<Mutex<Vec<u8>>>, tracing::subscriber::DefaultGuard) {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let make_writer = {
        let buf = buf.clone();
        move || BufWriter(buf.clone())
    };

    let subscriber = Registry::default().with(
        fmt::Layer::default()
            .json()
            .with_span_list(true)
            .with_current_span(true)
            .with_ansi(false)
            .with_writer(make_writer),
    );

    (buf, tracing::subscriber::set_default(subscriber))
}

fn lines(buf: &Arc<Mutex<Vec<u8>>>) -> Vec<Value> {
    let bytes = buf.lock().unwrap().clone();
    String::from_utf8(bytes)
        .expect("utf8")
        .lines()
        .filter_map(|line| serde_json::from_str::<Value>(line).ok())
        .collect()
}

fn request_span_trace_id(event: &Value) -> Option<&str> {
    event
        .get("spans")?
        .as_array()?
        .iter()
        .find(|s| s.get("name").and_then(Value::as_str) == Some("request"))?
        .get("trace_id")?
        .as_str()
}

#[actix_web::test]
#[serial]
async fn handler_logs_are_in_request_span_with_trace_id() {
    let (buf, _guard) = capture();

    let app = create_test_app(create_test_state())
        .with_routes(|cfg| {
            cfg.route(
                "/ping",
                web::get().to(|| async {
                    info!("inside handler");
                    HttpResponse::Ok().finish()
                }),
            );
        })
        .build()
        .await;

    let req = test::TestRequest::get().uri("/ping").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let trace_id = resp
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let event = lines(&buf)
        .into_iter()
        .find(|v| v["fields"]["message"] == "inside handler")
        .expect("handler log line captured");

    assert_eq!(request_span_trace_id(&event), Some(trace_id.as_str()));
}

#[actix_web::test]
#[serial]
async fn login_failure_event_is_redacted_and_traced() {
    let (buf, _guard) = capture();

    let app = create_test_app(create_test_state())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "someone@example.com", "password": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);

    let trace_id = resp
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let captured = lines(&buf);
    let event = captured
        .iter()
        .find(|v| v["fields"]["event"] == "SECURITY_LOGIN_FAILED")
        .expect("security event captured");

    assert_eq!(event["fields"]["trace_id"], trace_id.as_str());
    assert_eq!(event["fields"]["email"], "s***@example.com");

    let raw = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
    assert!(!raw.contains("someone@example.com"));
}
