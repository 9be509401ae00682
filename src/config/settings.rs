//! Configuration settings.
//!
//! Defines the `Config` struct and the environment variable loading
//! logic. Assembly runs once, synchronously, at process start; the
//! result is shared as an `Arc` and never mutated afterwards, so every
//! later consumer (server, rate limiter, storage) reads it lock-free.

use std::env;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::error::{ConfigError, Result};
use super::keys;

/// Reads an environment variable, falling back to `default` when the
/// variable is unset or empty. No content validation; callers validate.
fn get_env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parses a rate-limit value as a strictly positive base-10 integer.
fn parse_positive(var: &'static str, value: String) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber { var, value }),
    }
}

/// Application configuration loaded from environment.
///
/// The serialized form is the redacted view: the private key is skipped
/// and the remaining fields keep the wire names the admin status
/// surface already exposes.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path of the SQLite database file used by the storage layer.
    pub sqlite_file_path: String,
    /// Host to bind; empty string means all interfaces.
    pub server_host: String,
    /// Port to bind, kept in textual form for the listener address.
    pub server_port: String,
    /// PKCS#1 RSA private key used by the decrypt endpoint. Never
    /// serialized or logged.
    #[serde(skip)]
    pub rsa_private_key: rsa::RsaPrivateKey,
    /// PKIX PEM encoding of the public half, derived from the private
    /// key at startup and handed out to clients.
    pub rsa_pub_key: String,
    /// Maximum decrypt operations allowed per period.
    pub decrypts_allowed_per_period: u32,
    /// Rate-limit period length in seconds.
    pub period_in_seconds: u32,
}

impl Config {
    /// Assembles the configuration from environment variables.
    ///
    /// The private key is validated first: a deployment without usable
    /// key material must not get as far as reading anything else. On
    /// success the redacted view is logged once for observability.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `RSA_PRIVATE_KEY` is missing or
    /// malformed, or when `DECRYPTS_PER_PERIOD` / `PERIOD_IN_SECONDS`
    /// fail to parse as positive integers. All of these reflect a
    /// misconfigured deployment and abort startup.
    pub fn from_env() -> Result<Arc<Self>> {
        info!("generating configs");
        let raw_key = env::var("RSA_PRIVATE_KEY").unwrap_or_default();
        let (rsa_private_key, rsa_pub_key) = keys::derive_keypair(&raw_key)?;

        let decrypts_allowed_per_period = parse_positive(
            "DECRYPTS_PER_PERIOD",
            get_env_or("DECRYPTS_PER_PERIOD", "100"),
        )?;
        let period_in_seconds =
            parse_positive("PERIOD_IN_SECONDS", get_env_or("PERIOD_IN_SECONDS", "600"))?;

        let config = Self {
            sqlite_file_path: get_env_or("SQLITE_FILEPATH", "opsep.sqlite3"),
            // Unset yields "", which binds all interfaces. Deliberately
            // not defaulted.
            server_host: env::var("SERVER_HOST").unwrap_or_default(),
            server_port: get_env_or("PORT", "8080"),
            rsa_private_key,
            rsa_pub_key,
            decrypts_allowed_per_period,
            period_in_seconds,
        };

        info!(config = %config.redacted_json()?, "configuration assembled");
        Ok(Arc::new(config))
    }

    /// Serializes the configuration with the private key omitted, safe
    /// for logging and for the admin status endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if JSON encoding fails.
    pub fn redacted_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Listener address in `host:port` form. An empty host produces
    /// `":8080"`-style bind-all addresses.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("sqlite_file_path", &self.sqlite_file_path)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("rsa_private_key", &"<redacted>")
            .field("rsa_pub_key", &self.rsa_pub_key)
            .field(
                "decrypts_allowed_per_period",
                &self.decrypts_allowed_per_period,
            )
            .field("period_in_seconds", &self.period_in_seconds)
            .finish()
    }
}
