//! Request validation: plaintext bounds and key ARN scoping.
//!
//! Everything here is pure. It has no AWS or runtime dependencies, so a
//! request that fails validation never reaches KMS.
//!
//! # Module invariants
//!
//! - Each distinct defect maps to a distinct [`common::ServiceError`] variant.
//! - Key ARN checks run cheapest-first: presence, shape, service, resource
//!   type, region, account. The earliest defect is the one reported.

pub mod key_ref;
pub mod plaintext;

pub use key_ref::validate_key_reference;
pub use plaintext::validate_plaintext;

/// Region and account the function runs in, fixed at cold start.
///
/// Both values are stored lower-cased and trimmed so they compare directly
/// against a lower-cased ARN segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessIdentity {
    region: String,
    account: String,
}

impl ProcessIdentity {
    pub fn new(region: &str, account: &str) -> Self {
        Self {
            region: region.trim().to_lowercase(),
            account: account.trim().to_lowercase(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account(&self) -> &str {
        &self.account
    }
}
