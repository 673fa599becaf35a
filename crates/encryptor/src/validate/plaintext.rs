//! `PlainText` presence and size checks.

use common::protocol::PLAINTEXT_FIELD;
use common::{EncryptEvent, ServiceError};
use serde_json::Value;

/// Exclusive upper bound on the plaintext length in bytes.
///
/// KMS `Encrypt` accepts at most 4096 bytes; anything at or above this is
/// rejected locally.
pub const MAX_PLAINTEXT_LEN: usize = 4096;

/// Extract `PlainText` from the event and coerce it to text.
///
/// # Errors
///
/// - [`ServiceError::MissingField`] if the attribute is absent or `null`.
/// - [`ServiceError::EmptyValue`] if it coerces to `""`.
/// - [`ServiceError::SizeLimit`] if it is [`MAX_PLAINTEXT_LEN`] bytes or longer.
pub fn validate_plaintext(event: &EncryptEvent) -> Result<String, ServiceError> {
    let value = match &event.plain_text {
        None | Some(Value::Null) => return Err(ServiceError::MissingField(PLAINTEXT_FIELD)),
        Some(v) => v,
    };

    let text = coerce_to_text(value);
    if text.is_empty() {
        return Err(ServiceError::EmptyValue(PLAINTEXT_FIELD));
    }
    if text.len() >= MAX_PLAINTEXT_LEN {
        return Err(ServiceError::SizeLimit {
            len: text.len(),
            limit: MAX_PLAINTEXT_LEN,
        });
    }
    Ok(text)
}

/// Strings pass through untouched; every other JSON value uses its compact
/// JSON text form.
fn coerce_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
