//! Lambda invocation handling: validate, then encrypt.
//!
//! # Responsibilities
//! - Run both validators before any KMS traffic is generated.
//! - Invoke KMS exactly once per accepted request.
//! - Log the outcome of each invocation without plaintext or ciphertext.

pub mod state;

pub use state::AppState;

use common::{EncryptEvent, ServiceError};
use lambda_runtime::LambdaEvent;
use tracing::{info, info_span, warn, Instrument};

use crate::encrypt::encrypt;
use crate::validate::{validate_key_reference, validate_plaintext};

/// Validate `event` and encrypt its plaintext under its key ARN.
///
/// The key ARN is checked first, then the plaintext. Either failure returns
/// before KMS is called.
///
/// # Errors
///
/// Returns the first validation error, or [`ServiceError::Dependency`] if KMS
/// rejects the call.
pub async fn process(state: &AppState, event: &EncryptEvent) -> Result<String, ServiceError> {
    let key_ref = validate_key_reference(event, &state.identity)?;
    let plaintext = validate_plaintext(event)?;
    encrypt(state.kms.as_ref(), &plaintext, &key_ref).await
}

/// `lambda_runtime` entry point for a single invocation.
///
/// Returns the base64 ciphertext as the invocation result. Failures are
/// returned to the runtime, which reports them as a failed invocation carrying
/// the error message.
pub async fn handle(
    state: AppState,
    event: LambdaEvent<EncryptEvent>,
) -> Result<String, lambda_runtime::Error> {
    let (event, ctx) = event.into_parts();
    let span = info_span!("encrypt", request_id = %ctx.request_id);

    async move {
        match process(&state, &event).await {
            Ok(ciphertext) => {
                info!(ciphertext_len = ciphertext.len(), "plaintext encrypted");
                Ok(ciphertext)
            }
            Err(e) => {
                warn!(
                    code = e.code(),
                    client_error = e.is_client_error(),
                    error = %e,
                    "encrypt request failed"
                );
                Err(e.into())
            }
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use lambda_runtime::Context;
    use serde_json::json;

    use crate::aws::MockKeyManagementService;
    use crate::validate::ProcessIdentity;

    const ARN: &str = "arn:aws:kms:us-east-1:123456789012:key/abcd-1234";

    fn state(kms: MockKeyManagementService) -> AppState {
        AppState::new(
            Arc::new(kms),
            ProcessIdentity::new("us-east-1", "123456789012"),
        )
    }

    fn never_called() -> MockKeyManagementService {
        let mut kms = MockKeyManagementService::new();
        kms.expect_encrypt().never();
        kms
    }

    #[tokio::test]
    async fn encrypts_valid_request_once() {
        let mut kms = MockKeyManagementService::new();
        kms.expect_encrypt()
            .times(1)
            .withf(|plaintext, key_id| {
                plaintext.to_vec() == b"hello".to_vec() && key_id.to_string() == ARN
            })
            .returning(|_, _| Ok(vec![0x01, 0x02]));

        let out = process(&state(kms), &EncryptEvent::new("hello", ARN))
            .await
            .unwrap();
        assert_eq!(out, "AQI=");
    }

    #[tokio::test]
    async fn uppercase_arn_is_lowercased_before_kms() {
        let mut kms = MockKeyManagementService::new();
        kms.expect_encrypt()
            .times(1)
            .withf(|_, key_id| key_id.to_string() == ARN)
            .returning(|_, _| Ok(vec![0xff]));

        let upper = ARN.to_uppercase();
        let out = process(&state(kms), &EncryptEvent::new("hello", upper))
            .await
            .unwrap();
        assert_eq!(out, "/w==");
    }

    #[tokio::test]
    async fn missing_plaintext_never_calls_kms() {
        let event = EncryptEvent {
            plain_text: None,
            kms_arn: Some(json!(ARN)),
        };
        let err = process(&state(never_called()), &event).await.unwrap_err();
        assert!(matches!(err, ServiceError::MissingField("PlainText")));
    }

    #[tokio::test]
    async fn oversized_plaintext_never_calls_kms() {
        let event = EncryptEvent::new("a".repeat(4096), ARN);
        let err = process(&state(never_called()), &event).await.unwrap_err();
        assert!(matches!(err, ServiceError::SizeLimit { .. }));
    }

    #[tokio::test]
    async fn key_reference_is_checked_before_plaintext() {
        // Both fields are bad; the ARN defect is reported.
        let event = EncryptEvent {
            plain_text: Some(json!("")),
            kms_arn: Some(json!("arn:aws:kms:us-west-2:123456789012:key/abcd-1234")),
        };
        let err = process(&state(never_called()), &event).await.unwrap_err();
        assert!(matches!(err, ServiceError::RegionMismatch(_)));
    }

    #[tokio::test]
    async fn account_mismatch_never_calls_kms() {
        let event = EncryptEvent::new("hello", "arn:aws:kms:us-east-1:000000000000:key/abcd-1234");
        let err = process(&state(never_called()), &event).await.unwrap_err();
        assert!(matches!(err, ServiceError::AccountMismatch(_)));
    }

    #[tokio::test]
    async fn dependency_failure_is_not_retried() {
        let mut kms = MockKeyManagementService::new();
        kms.expect_encrypt()
            .times(1)
            .returning(|_, _| Err(ServiceError::Dependency("AccessDeniedException".into())));

        let err = process(&state(kms), &EncryptEvent::new("hello", ARN))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Dependency(_)));
    }

    #[tokio::test]
    async fn handle_returns_ciphertext() {
        let mut kms = MockKeyManagementService::new();
        kms.expect_encrypt()
            .times(1)
            .returning(|_, _| Ok(vec![0x01, 0x02]));

        let event = LambdaEvent::new(EncryptEvent::new("hello", ARN), Context::default());
        let out = handle(state(kms), event).await.unwrap();
        assert_eq!(out, "AQI=");
    }

    #[tokio::test]
    async fn handle_surfaces_error_message() {
        let event = LambdaEvent::new(EncryptEvent::default(), Context::default());
        let err = handle(state(never_called()), event).await.unwrap_err();
        assert_eq!(err.to_string(), "missing KmsArn attribute from event");
    }
}
