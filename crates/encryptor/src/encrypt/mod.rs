//! Encryption invoker: one KMS call, base64-encoded for transport.
//!
//! Inputs must already have passed [`crate::validate`].

use base64::{engine::general_purpose::STANDARD, Engine as _};
use common::ServiceError;

use crate::aws::KeyManagementService;

/// Encrypt `plaintext` under `key_ref` and return the ciphertext as padded
/// standard base64.
///
/// # Errors
///
/// Returns [`ServiceError::Dependency`] if KMS rejects the call.
pub async fn encrypt(
    kms: &dyn KeyManagementService,
    plaintext: &str,
    key_ref: &str,
) -> Result<String, ServiceError> {
    let blob = kms.encrypt(plaintext.as_bytes(), key_ref).await?;
    Ok(STANDARD.encode(blob))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aws::MockKeyManagementService;

    const ARN: &str = "arn:aws:kms:us-east-1:123456789012:key/abcd-1234";

    #[tokio::test]
    async fn encodes_ciphertext_as_base64() {
        let mut kms = MockKeyManagementService::new();
        kms.expect_encrypt()
            .times(1)
            .withf(|plaintext, key_id| {
                plaintext.to_vec() == b"hello".to_vec() && key_id.to_string() == ARN
            })
            .returning(|_, _| Ok(vec![0x01, 0x02]));

        let out = encrypt(&kms, "hello", ARN).await.unwrap();
        assert_eq!(out, "AQI=");
    }

    #[tokio::test]
    async fn dependency_error_propagates() {
        let mut kms = MockKeyManagementService::new();
        kms.expect_encrypt().times(1).returning(|_, _| {
            Err(ServiceError::Dependency(
                "DisabledException: key is disabled".into(),
            ))
        });

        let err = encrypt(&kms, "hello", ARN).await.unwrap_err();
        match err {
            ServiceError::Dependency(msg) => assert!(msg.contains("DisabledException")),
            other => panic!("expected dependency error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_blob_encodes_to_empty_string() {
        let mut kms = MockKeyManagementService::new();
        kms.expect_encrypt().returning(|_, _| Ok(Vec::new()));
        assert_eq!(encrypt(&kms, "x", ARN).await.unwrap(), "");
    }
}
