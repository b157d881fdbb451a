//! Authenticated principal extraction.
//!
//! Flow Overview: read the bearer token, verify its signature and expiry,
//! and resolve the `sub` email to a user row that downstream handlers can
//! use for ownership checks.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sqlx::PgPool;

use super::{users, users::UserRow, ApiError};
use crate::auth::TokenService;

/// Resolve the bearer token into an authenticated user.
///
/// A missing, malformed, expired, or mis-signed token and a valid token
/// whose subject no longer exists all map to Unauthenticated; the two cases
/// are deliberately indistinguishable to callers.
///
/// # Errors
/// Returns `ApiError::Unauthenticated` as above, or `ApiError::Database`
/// when the lookup itself fails.
pub async fn require_auth(
    headers: &HeaderMap,
    pool: &PgPool,
    tokens: &TokenService,
) -> Result<UserRow, ApiError> {
    let token = bearer_token(headers).ok_or(ApiError::Unauthenticated("Invalid token"))?;

    let claims = tokens
        .verify(token)
        .ok_or(ApiError::Unauthenticated("Invalid token"))?;

    users::find_user_by_email(pool, &claims.sub)
        .await?
        .ok_or(ApiError::Unauthenticated("User not found"))
}

/// Extract the token from an `Authorization: Bearer` header.
///
/// The scheme is matched case-insensitively; surrounding whitespace around
/// the token is trimmed.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
