//! Runtime configuration.
//!
//! DESIGN
//! ======
//! All knobs come from the environment (loaded via dotenvy in `main`) and are
//! collected into one struct carried on `AppState`, so handlers never reach
//! for ambient globals. The static admin credential pair and the JWT signing
//! secret live here; every knob has a default so a bare `cargo run` against
//! a local database works out of the box.

use std::path::PathBuf;

const DEFAULT_ADMIN_USERNAME: &str = "hahaboi";
const DEFAULT_ADMIN_PASSWORD: &str = "somethingsomething";
const DEFAULT_JWT_SECRET: &str = "super-jwt-secret-loki";

/// Application configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Static admin username checked by `POST /admin/login`.
    pub admin_username: String,
    /// Static admin password. Plaintext comparison only; there is exactly
    /// one admin account and no rotation.
    pub admin_password: String,
    /// HS256 secret for customer bearer tokens.
    pub jwt_secret: String,
    /// Directory holding the prebuilt admin SPA.
    pub admin_dist_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            admin_username: env_or("ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME),
            admin_password: env_or("ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
            jwt_secret: env_or("JWT_SECRET", DEFAULT_JWT_SECRET),
            admin_dist_dir: admin_dist_dir(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}

/// Resolve the path to the admin SPA build directory.
fn admin_dist_dir() -> PathBuf {
    std::env::var("ADMIN_DIST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("dist"))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
