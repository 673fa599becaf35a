//! `kms-encryptor` — Lambda binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise structured JSON logging.
//! 3. Initialise the AWS KMS client.
//! 4. Hand the invocation loop to `lambda_runtime`.

mod aws;
mod config;
mod encrypt;
mod handler;
mod telemetry;
mod validate;

use std::sync::Arc;

use anyhow::Result;
use lambda_runtime::{service_fn, LambdaEvent};
use tracing::info;

use common::EncryptEvent;
use config::Config;
use handler::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    let identity = cfg.identity();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        region = identity.region(),
        account = identity.account(),
        "kms-encryptor starting"
    );

    // -----------------------------------------------------------------------
    // 3. AWS clients
    // -----------------------------------------------------------------------
    let kms = aws::AwsKms::init(cfg.kms_endpoint_url.as_deref()).await?;
    let state = AppState::new(Arc::new(kms), identity);

    // -----------------------------------------------------------------------
    // 4. Invocation loop
    // -----------------------------------------------------------------------
    lambda_runtime::run(service_fn(move |event: LambdaEvent<EncryptEvent>| {
        handler::handle(state.clone(), event)
    }))
    .await
    .map_err(|e| anyhow::anyhow!("lambda runtime exited: {e}"))?;

    Ok(())
}
