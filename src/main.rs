//! opsep - RSA decryption service with rate-limited key operations.
//!
//! Bootstraps the runtime identity: loads configuration from the
//! environment, validates the RSA key material, sets up logging, and
//! reports the redacted configuration. The decrypt API, rate limiter,
//! and storage layer are wired from the `Arc<Config>` this produces;
//! any validation failure exits non-zero before traffic is served.

use std::process::ExitCode;

use opsep::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stdout());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(non_blocking);

    if log_format.eq_ignore_ascii_case("pretty") {
        subscriber.init();
    } else {
        subscriber.json().init();
    }

    match Config::from_env() {
        Ok(config) => {
            info!(
                bind_addr = %config.bind_addr(),
                sqlite_file_path = %config.sqlite_file_path,
                "configuration valid"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "configuration bootstrap failed");
            ExitCode::FAILURE
        }
    }
}
