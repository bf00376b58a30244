//! Error codes for the API.
//!
//! Every `AppError` maps to exactly one code. Codes are SCREAMING_SNAKE_CASE
//! and appear in logs; clients only ever see the human message.

use core::fmt;

/// Centralized error codes for the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Login body had an empty email or password
    InvalidCredentials,
    /// Authentication required (JWT path without a usable header)
    Unauthorized,
    /// Authorization header absent or not a Bearer header
    UnauthorizedMissingBearer,
    /// JWT signature or structure invalid
    UnauthorizedInvalidJwt,
    /// JWT expired
    UnauthorizedExpiredJwt,
    /// Bearer token lacks the `bearer_` prefix
    MalformedBearerToken,
    /// Bearer token payload could not be decoded
    UndecodableBearerToken,

    // Request handling
    /// Request body could not be parsed
    BadRequest,
    /// Request body exceeds the configured limit
    PayloadTooLarge,
    /// No route matched
    NotFound,

    // System
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::MalformedBearerToken => "MALFORMED_BEARER_TOKEN",
            Self::UndecodableBearerToken => "UNDECODABLE_BEARER_TOKEN",
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::NotFound => "NOT_FOUND",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// All codes, in declaration order.
    pub const ALL: [ErrorCode; 12] = [
        Self::InvalidCredentials,
        Self::Unauthorized,
        Self::UnauthorizedMissingBearer,
        Self::UnauthorizedInvalidJwt,
        Self::UnauthorizedExpiredJwt,
        Self::MalformedBearerToken,
        Self::UndecodableBearerToken,
        Self::BadRequest,
        Self::PayloadTooLarge,
        Self::NotFound,
        Self::Internal,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::InvalidCredentials.as_str(), "INVALID_CREDENTIALS");
        assert_eq!(ErrorCode::Unauthorized.as_str(), "UNAUTHORIZED");
        assert_eq!(
            ErrorCode::UnauthorizedMissingBearer.as_str(),
            "UNAUTHORIZED_MISSING_BEARER"
        );
        assert_eq!(
            ErrorCode::UnauthorizedInvalidJwt.as_str(),
            "UNAUTHORIZED_INVALID_JWT"
        );
        assert_eq!(
            ErrorCode::UnauthorizedExpiredJwt.as_str(),
            "UNAUTHORIZED_EXPIRED_JWT"
        );
        assert_eq!(
            ErrorCode::MalformedBearerToken.as_str(),
            "MALFORMED_BEARER_TOKEN"
        );
        assert_eq!(
            ErrorCode::UndecodableBearerToken.as_str(),
            "UNDECODABLE_BEARER_TOKEN"
        );
        assert_eq!(ErrorCode::BadRequest.as_str(), "BAD_REQUEST");
        assert_eq!(ErrorCode::PayloadTooLarge.as_str(), "PAYLOAD_TOO_LARGE");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL");
        assert_eq!(ErrorCode::ConfigError.as_str(), "CONFIG_ERROR");
    }

    #[test]
    fn test_codes_are_unique_screaming_snake() {
        let mut seen = HashSet::new();
        for code in ErrorCode::ALL {
            let s = code.as_str();
            assert!(seen.insert(s), "duplicate error code {s}");
            assert!(
                s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "{s} should be SCREAMING_SNAKE_CASE"
            );
        }
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::Unauthorized), "UNAUTHORIZED");
        assert_eq!(
            format!("{}", ErrorCode::MalformedBearerToken),
            "MALFORMED_BEARER_TOKEN"
        );
    }
}
