//! Request-scoped identities inserted into request extensions by the
//! authentication middleware.

use serde::{Deserialize, Serialize};

use super::jwt::Claims;

/// Identity established by a verified JWT.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JwtIdentity {
    pub sub: String,
    pub email: String,
}

impl From<Claims> for JwtIdentity {
    fn from(claims: Claims) -> Self {
        Self {
            sub: claims.sub,
            email: claims.email,
        }
    }
}

/// Identity carried by a decoded `bearer_` token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BearerIdentity {
    pub email: String,
}
