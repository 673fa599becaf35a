//! Event types received by the encryptor function.
//!
//! The event is the JSON document the Lambda runtime hands to the handler.
//! Field names are case-sensitive and follow the invoker's `PascalCase`.

use serde::{Deserialize, Serialize};

/// Name of the plaintext attribute in the inbound event.
pub const PLAINTEXT_FIELD: &str = "PlainText";

/// Name of the key ARN attribute in the inbound event.
pub const KMS_ARN_FIELD: &str = "KmsArn";

/// Inbound event for a single encrypt invocation.
///
/// Both attributes are kept as raw JSON so that validation can tell an absent
/// attribute apart from an empty or non-string one. Any other attributes in
/// the event are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncryptEvent {
    /// Value to encrypt. Scalars are coerced to text.
    #[serde(rename = "PlainText", default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<serde_json::Value>,

    /// ARN of the KMS key to encrypt under.
    #[serde(rename = "KmsArn", default, skip_serializing_if = "Option::is_none")]
    pub kms_arn: Option<serde_json::Value>,
}

impl EncryptEvent {
    /// Construct an event from a plaintext string and key ARN.
    pub fn new(plain_text: impl Into<String>, kms_arn: impl Into<String>) -> Self {
        Self {
            plain_text: Some(serde_json::Value::String(plain_text.into())),
            kms_arn: Some(serde_json::Value::String(kms_arn.into())),
        }
    }
}
