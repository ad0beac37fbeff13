//! Admin session management.
//!
//! ARCHITECTURE
//! ============
//! There is a single static admin account; "logged in" is the presence of an
//! unexpired row in `admin_sessions` keyed by a random token held in a
//! browser cookie. Tokens are opaque 32-byte hex strings, so leaking a row
//! reveals nothing about the credential itself.

use std::fmt::Write;

use rand::Rng;
use sqlx::PgPool;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Check a submitted credential pair against the configured static pair.
#[must_use]
pub fn credentials_match(
    config: &crate::config::Config,
    username: &str,
    password: &str,
) -> bool {
    username == config.admin_username && password == config.admin_password
}

/// Create an admin session, returning the cookie token.
pub async fn create_session(pool: &PgPool) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO admin_sessions (token) VALUES ($1)")
        .bind(&token)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate an admin session token. Returns `true` if a matching unexpired
/// session exists.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<bool, sqlx::Error> {
    let row: Option<i32> =
        sqlx::query_scalar("SELECT 1 FROM admin_sessions WHERE token = $1 AND expires_at > now()")
            .bind(token)
            .fetch_optional(pool)
            .await?;
    Ok(row.is_some())
}

/// Delete an admin session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM admin_sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
