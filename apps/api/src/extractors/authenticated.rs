use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;

/// Identity established by the `RequireAuth` guard wrapping the route.
///
/// `Authenticated<JwtIdentity>` pairs with `RequireAuth::jwt()` and
/// `Authenticated<BearerIdentity>` with `RequireAuth::bearer()`. If no guard
/// stored an identity of type `I`, extraction fails with 401.
#[derive(Debug, Clone)]
pub struct Authenticated<I>(pub I);

impl<I> Authenticated<I> {
    pub fn into_inner(self) -> I {
        self.0
    }
}

impl<I> Deref for Authenticated<I> {
    type Target = I;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<I> FromRequest for Authenticated<I>
where
    I: Clone + 'static,
{
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<I>()
                .cloned()
                .map(Authenticated)
                .ok_or(AppError::Unauthorized),
        )
    }
}
