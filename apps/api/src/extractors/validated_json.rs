use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::config::app_config::DEFAULT_MAX_JSON_PAYLOAD_SIZE;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::trace_ctx;

/// JSON body extractor with the API's error contract.
///
/// Bodies that cannot be read or parsed become 400 `{message}`; bodies larger
/// than `AppState::max_json_payload_size` become 413. The content type is not
/// checked, so clients that omit it still work.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        let limit = req
            .app_data::<web::Data<AppState>>()
            .map(|state| state.max_json_payload_size)
            .unwrap_or(DEFAULT_MAX_JSON_PAYLOAD_SIZE);

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(trace_id = %trace_id, error = %e, "Failed to read request body chunk");
                    AppError::bad_request("Failed to read request body")
                })?;

                if body.len() + chunk.len() > limit {
                    return Err(AppError::PayloadTooLarge);
                }
                body.extend_from_slice(&chunk);
            }

            let parsed = parse_body::<T>(&body).inspect_err(|e| {
                debug!(
                    trace_id = %trace_id,
                    error = %e,
                    body_size = body.len(),
                    "JSON parsing failed"
                );
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    if body.is_empty() {
        return Err(AppError::bad_request("Body cannot be empty"));
    }

    serde_json::from_slice::<T>(body).map_err(|e| AppError::bad_request(classify_json_error(&e)))
}

/// Classify serde_json::Error and return a sanitized error message
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            let line = error.line();
            format!("Invalid JSON at line {line}")
        }
        serde_json::error::Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        serde_json::error::Category::Data => {
            "Invalid JSON: wrong types for one or more fields".to_string()
        }
        serde_json::error::Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;
    use serde::Deserialize;

    use super::*;
    use crate::state::security_config::SecurityConfig;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        email: String,
    }

    fn message(err: AppError) -> String {
        err.message()
    }

    #[test]
    fn test_parse_accepts_valid_body() {
        let body: Body = parse_body(br#"{"email":"a@b.com","extra":1}"#).unwrap();
        assert_eq!(body.email, "a@b.com");
    }

    #[test]
    fn test_parse_errors_are_sanitized() {
        assert_eq!(
            message(parse_body::<Body>(b"").unwrap_err()),
            "Body cannot be empty"
        );
        assert_eq!(
            message(parse_body::<Body>(br#"{"email": }"#).unwrap_err()),
            "Invalid JSON at line 1"
        );
        assert_eq!(
            message(parse_body::<Body>(br#"{"email": "a"#).unwrap_err()),
            "Invalid JSON: unexpected end of input"
        );
        assert_eq!(
            message(parse_body::<Body>(br#"{"email": 42}"#).unwrap_err()),
            "Invalid JSON: wrong types for one or more fields"
        );
    }

    #[actix_web::test]
    async fn test_extract_respects_payload_limit() {
        let mut state = AppState::new(SecurityConfig::default());
        state.max_json_payload_size = 16;

        let (req, mut payload) = TestRequest::post()
            .app_data(web::Data::new(state))
            .set_payload(r#"{"email":"someone-long@example.com"}"#)
            .to_http_parts();

        let result = ValidatedJson::<Body>::from_request(&req, &mut payload).await;

        assert!(matches!(result, Err(AppError::PayloadTooLarge)));
    }

    #[actix_web::test]
    async fn test_extract_reads_body() {
        let (req, mut payload) = TestRequest::post()
            .set_payload(r#"{"email":"a@b.com"}"#)
            .to_http_parts();

        let body = ValidatedJson::<Body>::from_request(&req, &mut payload)
            .await
            .unwrap()
            .into_inner();

        assert_eq!(body.email, "a@b.com");
    }
}
