// src/middleware/auth.rs
use std::future::{ready, Ready};
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{self, HeaderValue},
    web, Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;

use crate::auth::{AuthError, Principal, TokenVerifier};
use crate::error::ApiError;

/// Pull the token out of an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively, so the `token_type` returned
/// by `POST /token` (`bearer`) can be used as is.
pub fn bearer_token(auth_header: Option<&HeaderValue>) -> Result<&str, AuthError> {
    let auth_str = auth_header
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidHeader)?;

    let (scheme, token) = auth_str
        .trim_start()
        .split_once(' ')
        .ok_or(AuthError::InvalidScheme)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidScheme);
    }
    let token = token.trim();

    if token.is_empty() {
        return Err(AuthError::EmptyToken);
    }
    Ok(token)
}

/// Validates the bearer token of a request with the verifier registered as app data.
pub fn authenticate_request(req: &ServiceRequest) -> Result<Principal, ApiError> {
    let verifier = req.app_data::<web::Data<dyn TokenVerifier>>()
        .ok_or_else(|| {
            tracing::error!("No token verifier registered");
            ApiError::Unauthorized("Token verification unavailable".to_string())
        })?;

    let token = bearer_token(req.headers().get(header::AUTHORIZATION))?;
    let principal = verifier.verify(token)?;
    Ok(principal)
}

// Create the middleware
pub struct AuthMiddleware;

// Middleware factory
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let principal = match authenticate_request(&req) {
            Ok(principal) => principal,
            Err(e) => {
                tracing::info!("Rejected request to {}: {}", req.path(), e);
                return Box::pin(async move { Err(e.into()) });
            }
        };

        // Handlers read the caller through `web::ReqData<Principal>`
        req.extensions_mut().insert(principal);

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            Ok(res)
        })
    }
}
