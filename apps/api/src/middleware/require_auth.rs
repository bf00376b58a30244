//! Authentication guard middleware
//!
//! Runs an [`Authenticator`] before the wrapped route. On success the identity
//! is stored in request extensions and the route runs; on failure the request
//! is answered with the authenticator's 401 and the route never runs.
//!
//! Rejections are returned as ordinary responses rather than service errors,
//! so `RequestTrace` and `StructuredLogger` see them like any other response.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::authenticator::{Authenticator, BearerAuthenticator, JwtAuthenticator};
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

#[derive(Debug, Clone, Default)]
pub struct RequireAuth<A> {
    authenticator: A,
}

impl<A> RequireAuth<A> {
    pub fn new(authenticator: A) -> Self {
        Self { authenticator }
    }
}

impl RequireAuth<JwtAuthenticator> {
    /// Guard for `Authorization: Bearer <jwt>` routes
    pub fn jwt() -> Self {
        Self::new(JwtAuthenticator)
    }
}

impl RequireAuth<BearerAuthenticator> {
    /// Guard for `Authorization: Bearer bearer_<...>` routes
    pub fn bearer() -> Self {
        Self::new(BearerAuthenticator)
    }
}

impl<S, B, A> Transform<S, ServiceRequest> for RequireAuth<A>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
    A: Authenticator + Clone + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S, A>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service,
            authenticator: self.authenticator.clone(),
        }))
    }
}

pub struct RequireAuthMiddleware<S, A> {
    service: S,
    authenticator: A,
}

impl<S, B, A> Service<ServiceRequest> for RequireAuthMiddleware<S, A>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
    A: Authenticator + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let outcome = match req.app_data::<web::Data<AppState>>() {
            Some(state) => self.authenticator.authenticate(req.headers(), state),
            None => Err(AppError::internal("AppState not available")),
        };

        match outcome {
            Ok(identity) => {
                // Store the identity BEFORE calling the route
                req.extensions_mut().insert(identity);

                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => Box::pin(async move {
                // Rendered inside the request's trace scope
                security::auth_rejected(A::SCHEME, err.code());
                Ok(req.error_response(err).map_into_right_body())
            }),
        }
    }
}
