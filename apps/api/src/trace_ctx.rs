//! Task-local trace id for the request currently being handled.
//!
//! `RequestTrace` opens the scope; error rendering reads it so the
//! `x-trace-id` header matches the id logged for the request.

use std::future::Future;

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Poll `future` with `trace_id` visible through [`trace_id`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trace_id_outside_context() {
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn test_trace_id_within_and_after_context() {
        let id = "trace-abc".to_string();

        let seen = with_trace_id(id.clone(), async { trace_id() }).await;

        assert_eq!(seen, id);
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn test_inner_scope_shadows_outer() {
        let (outer_before, inner, outer_after) = with_trace_id("outer".to_string(), async {
            let before = trace_id();
            let inner = with_trace_id("inner".to_string(), async { trace_id() }).await;
            (before, inner, trace_id())
        })
        .await;

        assert_eq!(outer_before, "outer");
        assert_eq!(inner, "inner");
        assert_eq!(outer_after, "outer");
    }
}
