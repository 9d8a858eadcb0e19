use secrecy::SecretString;
use serde::Deserialize;

/// Which credential check guards the protected routes.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Any non-empty bearer token is accepted.
    Stub,
    /// HS256-signed tokens are verified against `jwt_secret`.
    Jwt,
}

#[derive(Debug, Deserialize)]
pub struct AuthSettings {
    pub mode: AuthMode,
    pub jwt_secret: SecretString,
}
