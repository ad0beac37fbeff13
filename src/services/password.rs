//! Password hashing for customer accounts.
//!
//! Argon2id with a per-password random salt, serialized in PHC string
//! format. Plaintext passwords never reach the database.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

#[derive(Debug, thiserror::Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordError(String);

/// Hash a plaintext password with a fresh random salt.
///
/// # Errors
///
/// Returns an error if the hasher rejects its parameters; this does not
/// depend on the input password.
pub fn hash_password(raw: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(raw.as_bytes(), &salt)
        .map_err(|e| PasswordError(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-format hash.
/// Malformed stored hashes verify as false rather than erroring.
#[must_use]
pub fn verify_password(raw: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    Argon2::default().verify_password(raw.as_bytes(), &parsed).is_ok()
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
