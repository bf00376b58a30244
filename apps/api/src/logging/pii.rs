//! Redaction of emails and tokens before they reach log output.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Compiled redaction patterns. All are vetted literals.
struct Patterns {
    bearer_token: Regex,
    jwt: Regex,
    email: Regex,
    base64_token: Regex,
}

#[allow(clippy::unwrap_used)]
static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    bearer_token: Regex::new(r"\bbearer_[A-Za-z0-9+/]*={0,2}").unwrap(),
    jwt: Regex::new(r"\beyJ[A-Za-z0-9_-]*\.[A-Za-z0-9_-]*\.[A-Za-z0-9_-]*").unwrap(),
    email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap(),
    base64_token: Regex::new(r"\b[A-Za-z0-9+/]{16,}={0,2}").unwrap(),
});

/// Mask sensitive substrings.
///
/// - `bearer_` tokens become `bearer_[REDACTED]`
/// - JWTs become `[REDACTED_JWT]`
/// - emails keep the first character of the local part and the full domain
/// - other base64-like runs of 16+ characters become `[REDACTED_TOKEN]`
pub fn redact(input: &str) -> String {
    let patterns = &*PATTERNS;

    let without_bearer = patterns
        .bearer_token
        .replace_all(input, "bearer_[REDACTED]");

    let without_jwt = patterns
        .jwt
        .replace_all(&without_bearer, "[REDACTED_JWT]");

    let without_email = patterns
        .email
        .replace_all(&without_jwt, |caps: &regex::Captures| {
            let full = &caps[0];
            match full.split_once('@') {
                Some((local, domain)) if !local.is_empty() => {
                    format!("{}***@{domain}", &local[..1])
                }
                _ => full.to_string(),
            }
        });

    patterns
        .base64_token
        .replace_all(&without_email, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Display adapter that redacts the wrapped string.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
