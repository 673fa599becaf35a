//! Telemetry initialisation for the encryptor function.
//!
//! Structured JSON logs to stdout only; the Lambda runtime ships stdout to
//! CloudWatch, which stamps each line itself.
//!
//! # Telemetry invariants
//!
//! - **No plaintext or ciphertext** appears in any log field. Lengths, error
//!   codes and key ARNs are fine.
//! - Log level is configurable via `LOG_LEVEL` (default: `info`) and
//!   overridden by `RUST_LOG` when set.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_current_span(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise tracing subscriber: {e}"))
}
