//! Shared state handed to every invocation.

use std::sync::Arc;

use crate::aws::KeyManagementService;
use crate::validate::ProcessIdentity;

/// State shared across invocations of a warm Lambda instance.
///
/// Both fields are `Arc`-backed and immutable, so cloning per invocation is
/// cheap and needs no locking.
#[derive(Clone)]
pub struct AppState {
    /// KMS client used for the encrypt call.
    pub kms: Arc<dyn KeyManagementService>,
    /// Region/account that key ARNs must be scoped to.
    pub identity: Arc<ProcessIdentity>,
}

impl AppState {
    /// Create a new [`AppState`].
    pub fn new(kms: Arc<dyn KeyManagementService>, identity: ProcessIdentity) -> Self {
        Self {
            kms,
            identity: Arc::new(identity),
        }
    }
}
