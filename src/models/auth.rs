// src/models/auth.rs
use serde::{Deserialize, Serialize};

/// Token handed out by `POST /token`.
///
/// The endpoint is a placeholder: every caller receives the same token.
pub const STUB_ACCESS_TOKEN: &str = "fake-token";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn stub() -> Self {
        Self {
            access_token: STUB_ACCESS_TOKEN.to_string(),
            token_type: "bearer".to_string(),
        }
    }
}
