//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// Every variant except [`ServiceError::Dependency`] is a caller-fixable input
/// problem detected before KMS is contacted.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required event attribute was absent (or JSON `null`).
    #[error("missing {0} attribute from event")]
    MissingField(&'static str),

    /// `PlainText` coerced to the empty string.
    #[error("{0} must be a non-empty string")]
    EmptyValue(&'static str),

    /// `PlainText` is at or above the size limit.
    #[error("PlainText length must be less than {limit} bytes ({len} sent)")]
    SizeLimit { len: usize, limit: usize },

    /// `KmsArn` is not a string of six colon-delimited segments.
    #[error("invalid KmsArn: {0}")]
    MalformedReference(String),

    /// The ARN does not name the KMS service.
    #[error("arn does not specify KMS service")]
    WrongService,

    /// The ARN names a KMS resource other than a key (e.g. an alias).
    #[error("arn does not specify a key")]
    WrongResourceType,

    /// The key lives in a region other than the function's own.
    #[error("arn specifies a key in another region ({0})")]
    RegionMismatch(String),

    /// The key belongs to an account other than the function's own.
    #[error("arn specifies a key for another account ({0})")]
    AccountMismatch(String),

    /// KMS rejected the call or could not be reached.
    #[error("kms encrypt failed: {0}")]
    Dependency(String),
}

impl ServiceError {
    /// Short machine-readable code for this error, used in log fields.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::MissingField(_) => "missing_field",
            ServiceError::EmptyValue(_) => "empty_value",
            ServiceError::SizeLimit { .. } => "size_limit",
            ServiceError::MalformedReference(_) => "malformed_reference",
            ServiceError::WrongService => "wrong_service",
            ServiceError::WrongResourceType => "wrong_resource_type",
            ServiceError::RegionMismatch(_) => "region_mismatch",
            ServiceError::AccountMismatch(_) => "account_mismatch",
            ServiceError::Dependency(_) => "dependency",
        }
    }

    /// Returns `true` when the caller can fix the request and try again.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ServiceError::Dependency(_))
    }
}
