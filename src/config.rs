//! Configuration management.
//!
//! Loads configuration from environment variables using dotenvy.
//! All settings are loaded at startup, validated against the RSA key
//! material, and stored in a thread-safe Arc.

mod error;
mod keys;
mod settings;

pub use error::{ConfigError, Result};
pub use keys::{RSA_PEM_FOOTER, RSA_PEM_HEADER, derive_keypair};
pub use settings::Config;
