//! Library definitions.
//!
//! Exports the configuration module and the cryptographic-identity
//! bootstrap used by the opsep decryption server.

pub mod config;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use config::{Config, ConfigError, Result, derive_keypair};
