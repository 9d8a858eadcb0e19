pub mod jwt;
pub mod verifier;

use std::sync::Arc;
use thiserror::Error;

use crate::config::auth::{AuthMode, AuthSettings};
pub use jwt::JwtTokenVerifier;
pub use verifier::{Principal, StubTokenVerifier, TokenVerifier};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("No authorization header")]
    MissingHeader,

    #[error("Invalid authorization header")]
    InvalidHeader,

    #[error("Invalid authorization scheme")]
    InvalidScheme,

    #[error("Empty token")]
    EmptyToken,

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// Build the verifier selected by the auth settings.
pub fn build_verifier(settings: &AuthSettings) -> Arc<dyn TokenVerifier> {
    match settings.mode {
        AuthMode::Stub => {
            tracing::warn!("Stub token verification enabled: any non-empty bearer token is accepted");
            Arc::new(StubTokenVerifier)
        }
        AuthMode::Jwt => Arc::new(JwtTokenVerifier::new(settings.jwt_secret.clone())),
    }
}
