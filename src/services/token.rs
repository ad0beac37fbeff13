//! Customer bearer tokens.
//!
//! HS256 JWTs carrying the customer id. Identity on later requests comes
//! from the token alone; there is no server-side customer session. Expiry
//! is the stock 15-minute access-token lifetime.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

const TOKEN_TTL_SECS: u64 = 15 * 60;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token encoding failed: {0}")]
    Encode(jsonwebtoken::errors::Error),
    #[error("invalid token")]
    Invalid,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Customer id.
    sub: i64,
    /// Expiry, seconds since the epoch.
    exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Issue a signed bearer token for the given customer.
///
/// # Errors
///
/// Returns an error if JWT encoding fails.
pub fn issue(secret: &str, customer_id: i64) -> Result<String, TokenError> {
    let claims = Claims { sub: customer_id, exp: now_secs() + TOKEN_TTL_SECS };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(TokenError::Encode)
}

/// Verify a bearer token and extract the customer id. Expired, tampered, or
/// wrongly-signed tokens all map to [`TokenError::Invalid`].
pub fn verify(secret: &str, token: &str) -> Result<i64, TokenError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| TokenError::Invalid)?;
    Ok(data.claims.sub)
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
