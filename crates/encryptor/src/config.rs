//! Configuration loading and validation for the encryptor function.
//!
//! All values are read from environment variables once, at cold start. The
//! process exits with a clear error message if the region or account identity
//! is missing, since no key ARN could be validated without them.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::validate::ProcessIdentity;

/// Validated encryptor configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Region the function is deployed in (`RegionName`). **Required.**
    #[serde(rename = "regionname")]
    pub region_name: String,

    /// Account the function is deployed in (`AccountId`). **Required.**
    #[serde(rename = "accountid")]
    pub account_id: String,

    /// Tracing log level, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Override for the KMS endpoint, e.g. a local KMS emulator.
    #[serde(default)]
    pub kms_endpoint_url: Option<String>,
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is absent or invalid.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// The immutable region/account pair key ARNs are checked against.
    pub fn identity(&self) -> ProcessIdentity {
        ProcessIdentity::new(&self.region_name, &self.account_id)
    }

    fn validate(&self) -> Result<()> {
        ensure_non_empty(&self.region_name, "RegionName")?;
        ensure_non_empty(&self.account_id, "AccountId")?;

        let account = self.account_id.trim();
        if account.len() != 12 || !account.bytes().all(|b| b.is_ascii_digit()) {
            anyhow::bail!("AccountId must be a 12-digit AWS account id");
        }
        if let Some(url) = &self.kms_endpoint_url {
            ensure_non_empty(url, "KMS_ENDPOINT_URL")?;
        }
        Ok(())
    }
}

fn ensure_non_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{name} is required and must not be empty");
    }
    Ok(())
}
