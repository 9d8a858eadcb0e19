use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::auth::{AuthError, Principal, TokenVerifier};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,  // Subject (referee or admin id)
    pub exp: usize,   // Expiration time (as UTC timestamp)
}

/// Verifies HS256 tokens signed with a shared secret.
pub struct JwtTokenVerifier {
    secret: SecretString,
}

impl JwtTokenVerifier {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &Validation::new(Algorithm::HS256),
        ).map_err(|e| {
            tracing::warn!("Failed to decode token: {:?}", e);
            AuthError::InvalidToken(e.to_string())
        })?;

        Ok(Principal { subject: token_data.claims.sub })
    }
}
