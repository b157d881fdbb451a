//! Stateless HS256 access tokens.
//!
//! A token is valid while its signature checks out and the current time is
//! before `exp`; there is no server-side token state and no revocation.

use anyhow::{Context, Result};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Token payload: subject (user email) plus issued-at and expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies signed access tokens with a server-held secret.
#[derive(Clone)]
pub struct TokenService {
    secret: SecretString,
    ttl_minutes: i64,
}

impl TokenService {
    #[must_use]
    pub fn new(secret: SecretString, ttl_minutes: i64) -> Self {
        Self {
            secret,
            ttl_minutes,
        }
    }

    /// Issue a token for `subject` using the configured TTL.
    ///
    /// # Errors
    /// Returns an error if encoding fails.
    pub fn issue(&self, subject: &str) -> Result<String> {
        self.issue_with_ttl(subject, self.ttl_minutes)
    }

    /// Issue a token for `subject` expiring `ttl_minutes` from now.
    ///
    /// # Errors
    /// Returns an error if encoding fails.
    pub fn issue_with_ttl(&self, subject: &str, ttl_minutes: i64) -> Result<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now + ttl_minutes * 60,
        };

        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )
        .context("Failed to sign access token")
    }

    /// Verify a token's signature and expiry.
    ///
    /// Returns `None` for malformed, mis-signed, or expired tokens; callers
    /// must treat `None` as unauthenticated rather than as an error.
    #[must_use]
    pub fn verify(&self, token: &str) -> Option<Claims> {
        // No leeway: a token is invalid the second after its expiry.
        let mut validation = Validation::default();
        validation.leeway = 0;

        jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .ok()
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(ttl_minutes: i64) -> TokenService {
        TokenService::new(SecretString::from("test-secret".to_string()), ttl_minutes)
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let tokens = service(60);
        let token = tokens.issue("cook@example.com").unwrap();
        let claims = tokens.verify(&token).expect("token should verify");
        assert_eq!(claims.sub, "cook@example.com");
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let tokens = service(60);
        // Expiry one minute in the past
        let token = tokens.issue_with_ttl("cook@example.com", -1).unwrap();
        assert!(tokens.verify(&token).is_none());
    }

    #[test]
    fn test_zero_ttl_expires_within_a_second() {
        let tokens = service(60);
        let token = tokens.issue_with_ttl("cook@example.com", 0).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(1100));
        assert!(tokens.verify(&token).is_none());
    }

    #[test]
    fn test_tampered_signature_is_invalid() {
        let tokens = service(60);
        let token = tokens.issue("cook@example.com").unwrap();

        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        assert_eq!(parts.len(), 3);
        let mut signature: Vec<char> = parts[2].chars().collect();
        signature[0] = if signature[0] == 'A' { 'B' } else { 'A' };
        parts[2] = signature.into_iter().collect();

        assert!(tokens.verify(&parts.join(".")).is_none());
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let tokens = service(60);
        let other = TokenService::new(SecretString::from("other-secret".to_string()), 60);
        let token = tokens.issue("cook@example.com").unwrap();
        assert!(other.verify(&token).is_none());
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let tokens = service(60);
        assert!(tokens.verify("not-a-token").is_none());
        assert!(tokens.verify("").is_none());
        assert!(tokens.verify("a.b.c").is_none());
    }
}
