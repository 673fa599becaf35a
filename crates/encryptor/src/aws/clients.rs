//! KMS client seam and its AWS SDK implementation.

use anyhow::Result;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_kms::error::DisplayErrorContext;
use aws_sdk_kms::primitives::Blob;
use common::ServiceError;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// The single KMS operation the function needs.
///
/// Implementations make exactly one call per invocation and never retry;
/// every failure is surfaced as [`ServiceError::Dependency`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KeyManagementService: Send + Sync {
    /// Encrypt `plaintext` under `key_id`, returning the raw ciphertext blob.
    async fn encrypt(&self, plaintext: &[u8], key_id: &str) -> Result<Vec<u8>, ServiceError>;
}

/// [`KeyManagementService`] backed by the AWS SDK KMS client.
#[derive(Clone, Debug)]
pub struct AwsKms {
    client: aws_sdk_kms::Client,
}

impl AwsKms {
    /// Initialise the KMS client from the standard AWS credential chain.
    ///
    /// Inside Lambda, credentials and region come from the execution role's
    /// environment. `endpoint_url` overrides the KMS endpoint when set.
    ///
    /// # Errors
    ///
    /// Returns an error if the SDK config cannot be loaded.
    pub async fn init(endpoint_url: Option<&str>) -> Result<Self> {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;

        let mut builder = aws_sdk_kms::config::Builder::from(&config);
        if let Some(url) = endpoint_url {
            builder = builder.endpoint_url(url);
        }

        Ok(Self::from_client(aws_sdk_kms::Client::from_conf(builder.build())))
    }

    /// Wrap an already configured SDK client.
    pub fn from_client(client: aws_sdk_kms::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl KeyManagementService for AwsKms {
    async fn encrypt(&self, plaintext: &[u8], key_id: &str) -> Result<Vec<u8>, ServiceError> {
        let resp = self
            .client
            .encrypt()
            .key_id(key_id)
            .plaintext(Blob::new(plaintext))
            .send()
            .await
            .map_err(|e| ServiceError::Dependency(DisplayErrorContext(&e).to_string()))?;

        let blob = resp
            .ciphertext_blob()
            .ok_or_else(|| ServiceError::Dependency("response contained no ciphertext".into()))?;

        debug!(key_id, ciphertext_len = blob.as_ref().len(), "kms encrypt succeeded");
        Ok(blob.as_ref().to_vec())
    }
}
