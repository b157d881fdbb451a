//! bcrypt password hashing for stored credentials.

use anyhow::Result;

/// Hash a plaintext password using bcrypt with a random salt.
///
/// # Errors
/// Returns an error if the hashing backend fails.
pub fn hash(password: &str) -> Result<String> {
    let hashed = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
    Ok(hashed)
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// A malformed or foreign hash never errors; it simply does not verify.
#[must_use]
pub fn verify(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
