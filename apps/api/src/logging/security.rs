//! Security-relevant log events.

use tracing::warn;

use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A login attempt was refused.
pub fn login_failed(reason: &str, email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %Redacted(email),
        reason,
        "Authentication failure"
    );
}

/// A guard rejected a request before it reached its handler.
pub fn auth_rejected(scheme: &str, code: ErrorCode) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_AUTH_REJECTED",
        %trace_id,
        scheme,
        code = %code,
        "Request rejected by authentication guard"
    );
}
