//! `KmsArn` shape and scoping checks.
//!
//! A valid reference looks like
//! `arn:aws:kms:<region>:<account-id>:key/<key-id>` and must name a key in the
//! function's own region and account. Matching is case-insensitive; the
//! lower-cased ARN is what gets passed on to KMS.

use common::protocol::KMS_ARN_FIELD;
use common::{EncryptEvent, ServiceError};
use serde_json::Value;

use super::ProcessIdentity;

/// Literal prefix shared by every KMS ARN.
pub const KMS_SERVICE_PREFIX: &str = "arn:aws:kms";

/// Resource type token for KMS keys (as opposed to e.g. `alias`).
pub const KEY_RESOURCE_TYPE: &str = "key";

const ARN_SEGMENTS: usize = 6;

/// Extract `KmsArn` from the event and check it is scoped to `identity`.
///
/// Returns the lower-cased ARN.
///
/// # Errors
///
/// One distinct [`ServiceError`] per defect, checked in order:
/// [`MissingField`](ServiceError::MissingField),
/// [`MalformedReference`](ServiceError::MalformedReference),
/// [`WrongService`](ServiceError::WrongService),
/// [`WrongResourceType`](ServiceError::WrongResourceType),
/// [`RegionMismatch`](ServiceError::RegionMismatch),
/// [`AccountMismatch`](ServiceError::AccountMismatch).
pub fn validate_key_reference(
    event: &EncryptEvent,
    identity: &ProcessIdentity,
) -> Result<String, ServiceError> {
    let raw = match &event.kms_arn {
        None | Some(Value::Null) => return Err(ServiceError::MissingField(KMS_ARN_FIELD)),
        Some(Value::String(s)) => s,
        Some(_) => {
            return Err(ServiceError::MalformedReference(
                "KmsArn must be a string".into(),
            ))
        }
    };

    let arn = raw.to_lowercase();
    let parts: Vec<&str> = arn.split(':').collect();
    if parts.len() != ARN_SEGMENTS {
        return Err(ServiceError::MalformedReference(format!(
            "expected {ARN_SEGMENTS} colon-separated segments, got {}",
            parts.len()
        )));
    }

    if parts[..3].join(":") != KMS_SERVICE_PREFIX {
        return Err(ServiceError::WrongService);
    }

    let resource_type = parts[5].split('/').next().unwrap_or_default();
    if resource_type != KEY_RESOURCE_TYPE {
        return Err(ServiceError::WrongResourceType);
    }

    if parts[3] != identity.region() {
        return Err(ServiceError::RegionMismatch(parts[3].to_owned()));
    }

    if parts[4] != identity.account() {
        return Err(ServiceError::AccountMismatch(parts[4].to_owned()));
    }

    Ok(arn)
}
