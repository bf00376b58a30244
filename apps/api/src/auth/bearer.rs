//! Opaque "bearer_" login tokens.
//!
//! Format: `bearer_<base64(email ":" issued_at_millis)>`. The token is neither
//! signed nor time limited, so anyone who knows the format can forge one for
//! any email. It exists for demonstration only and must not guard anything
//! that matters; use the JWT path for real authentication.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

use super::identity::BearerIdentity;
use crate::AppError;

pub const BEARER_TOKEN_PREFIX: &str = "bearer_";

const LENIENT_DECODE: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// Padding optional, standard alphabet
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT_DECODE);

/// Padding optional, URL-safe alphabet
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT_DECODE);

/// Issue a bearer token for an already-validated email.
pub fn issue_bearer_token(email: &str, now: SystemTime) -> String {
    let issued_at_ms = now
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    let payload = format!("{email}:{issued_at_ms}");
    format!("{BEARER_TOKEN_PREFIX}{}", STANDARD.encode(payload))
}

/// Decode a bearer token back into the identity it was issued for.
///
/// The email is everything before the first `:` of the decoded payload; the
/// timestamp is not checked. Padding is optional and the URL-safe alphabet is
/// accepted as well as the standard one.
pub fn decode_bearer_token(token: &str) -> Result<BearerIdentity, AppError> {
    let encoded = token
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::MalformedBearerToken)?;

    let bytes = STANDARD_LENIENT
        .decode(encoded)
        .or_else(|_| URL_SAFE_LENIENT.decode(encoded))
        .map_err(|_| AppError::UndecodableBearerToken)?;
    let payload = String::from_utf8(bytes).map_err(|_| AppError::UndecodableBearerToken)?;

    match payload.split_once(':') {
        Some((email, _issued_at)) if !email.is_empty() => Ok(BearerIdentity {
            email: email.to_string(),
        }),
        _ => Err(AppError::UndecodableBearerToken),
    }
}
