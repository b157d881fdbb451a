//! API handlers and shared utilities for Recipe Hub.
//!
//! This module organizes the service's route handlers and provides the
//! common error taxonomy and input validation helpers.

pub mod health;
pub mod me;
pub mod principal;
pub mod recipes;
pub mod user_login;
pub mod user_register;
pub mod users;
pub mod ws_info;


use axum::{http::StatusCode, response::IntoResponse};
use regex::Regex;
use tracing::error;

/// Minimum plaintext password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Lightweight email sanity check used by auth handlers before persisting data.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Error taxonomy recovered at the HTTP boundary.
///
/// Every variant maps to a status code plus a human-readable detail string;
/// database errors are logged server-side and surfaced as `500` without
/// leaking details.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing input.
    Validation(&'static str),
    /// Missing, invalid, or expired token; or token for a deleted user.
    Unauthenticated(&'static str),
    /// Authenticated but not the resource owner.
    Forbidden(&'static str),
    /// Duplicate unique key.
    Conflict(&'static str),
    /// No such resource.
    NotFound(&'static str),
    /// Unexpected server-side failure outside the database.
    Internal(&'static str),
    Database(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Validation(detail) => {
                (StatusCode::UNPROCESSABLE_ENTITY, detail).into_response()
            }
            Self::Unauthenticated(detail) => (StatusCode::UNAUTHORIZED, detail).into_response(),
            Self::Forbidden(detail) => (StatusCode::FORBIDDEN, detail).into_response(),
            Self::Conflict(detail) => (StatusCode::BAD_REQUEST, detail).into_response(),
            Self::NotFound(detail) => (StatusCode::NOT_FOUND, detail).into_response(),
            Self::Internal(detail) => {
                error!("Internal error: {detail}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            Self::Database(err) => {
                error!("Database error: {err}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}
