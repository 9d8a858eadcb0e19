use serde::Serialize;

use crate::auth::AuthError;

/// Identity attached to a request once its bearer token has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub subject: String,
}

/// Checks a bearer token and resolves the caller behind it.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Principal, AuthError>;
}

/// Subject given to every caller accepted by [`StubTokenVerifier`].
pub const STUB_SUBJECT: &str = "stub";

/// Accepts every non-empty token under the fixed [`STUB_SUBJECT`].
///
/// The token is never echoed back, so it cannot leak into log spans.
///
/// Not a security boundary. Only meant for local development and the
/// default deployment until a real identity provider is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubTokenVerifier;

impl TokenVerifier for StubTokenVerifier {
    fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }
        Ok(Principal { subject: STUB_SUBJECT.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_accepts_any_non_empty_token() {
        let verifier = StubTokenVerifier;
        assert_eq!(
            verifier.verify("fake-token"),
            Ok(Principal { subject: STUB_SUBJECT.to_string() })
        );
        assert_eq!(
            verifier.verify("whatever"),
            Ok(Principal { subject: STUB_SUBJECT.to_string() })
        );
    }

    #[test]
    fn test_stub_subject_does_not_contain_the_token() {
        let principal = StubTokenVerifier.verify("secret-referee-credential").expect("Token should be accepted");
        assert!(!principal.subject.contains("secret-referee-credential"));
    }

    #[test]
    fn test_stub_rejects_blank_token() {
        let verifier = StubTokenVerifier;
        assert_eq!(verifier.verify(""), Err(AuthError::EmptyToken));
        assert_eq!(verifier.verify("   "), Err(AuthError::EmptyToken));
    }
}
