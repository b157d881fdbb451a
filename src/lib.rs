//! # Recipe Hub API
//!
//! `recipehub` is the backend for the Recipe Hub application: user
//! registration and login plus recipe management over HTTP.
//!
//! ## Authentication
//!
//! Passwords are stored as bcrypt hashes with an embedded random salt.
//! Login issues a stateless HS256 JWT whose `sub` claim is the user's
//! email; there is no server-side token state and no revocation list, so a
//! token stays valid until its `exp` claim passes.
//!
//! ## Ownership
//!
//! Every recipe belongs to exactly one user. Only the owner may update or
//! delete a recipe; other authenticated callers receive `403 Forbidden`.
//! Deleting a user cascades to their recipes at the schema level.
//!
//! ## State model
//!
//! The service is a stateless request handler. Configuration (signing
//! secret, token TTL, CORS origins) is parsed once at startup and passed
//! explicitly; durable state lives in PostgreSQL.

pub mod api;
pub mod auth;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
