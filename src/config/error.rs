//! Error types and result aliases.
//!
//! Defines the `ConfigError` enumeration and common `Result` type.
//! Every variant reflects static deployment misconfiguration: nothing
//! here is retryable, and the binary converts any of them into a
//! non-zero exit before the process can serve traffic.

use thiserror::Error;

/// Errors raised while assembling the runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The raw `RSA_PRIVATE_KEY` value is missing the PKCS#1 PEM
    /// header or footer. Unset and empty values land here too.
    #[error("RSA private key is missing its PEM header or footer")]
    KeyStructure,

    /// The PEM envelope or the PKCS#1 structure inside it failed to decode.
    #[error("RSA private key failed to decode: {0}")]
    KeyDecode(#[from] rsa::pkcs1::Error),

    /// Encoding the derived public key as PKIX/SPKI PEM failed.
    #[error("RSA public key derivation failed: {0}")]
    KeyDerivation(#[from] rsa::pkcs8::spki::Error),

    /// A numeric rate-limit variable did not parse as a positive integer.
    #[error("{var} must be a positive base-10 integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    /// Serializing the redacted configuration view failed.
    #[error("failed to serialize redacted configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for `ConfigError`.
pub type Result<T> = std::result::Result<T, ConfigError>;
