//! Test utilities and shared configuration.
//!
//! This module provides common helpers for unit and integration tests,
//! reducing duplication across the codebase.

#[cfg(any(test, feature = "testing"))]
use crate::config::{Config, derive_keypair};
#[cfg(any(test, feature = "testing"))]
use std::sync::Arc;

/// PKCS#1 PEM fixture used across the test suite (2048-bit).
#[cfg(any(test, feature = "testing"))]
pub const TEST_RSA_PRIVATE_KEY_PEM: &str =
    include_str!("../tests/fixtures/rsa_private_key.pem");

/// Creates a standard configuration for testing purposes.
///
/// This configuration has:
/// - Default storage path and port (opsep.sqlite3 / 8080)
/// - Bind-all host
/// - Default rate limits (100 decrypts per 600 seconds)
/// - The fixture RSA key pair
///
/// # Panics
///
/// Panics if the embedded fixture key fails to parse.
#[cfg(any(test, feature = "testing"))]
#[must_use]
pub fn create_test_config() -> Arc<Config> {
    let (rsa_private_key, rsa_pub_key) =
        derive_keypair(TEST_RSA_PRIVATE_KEY_PEM).expect("fixture key must parse");

    Arc::new(Config {
        sqlite_file_path: "opsep.sqlite3".to_string(),
        server_host: String::new(),
        server_port: "8080".to_string(),
        rsa_private_key,
        rsa_pub_key,
        decrypts_allowed_per_period: 100,
        period_in_seconds: 600,
    })
}
