//! AWS KMS client initialisation.
//!
//! Handlers only see the [`KeyManagementService`] trait, so the SDK client can
//! be swapped for a mock in tests.

pub mod clients;

pub use clients::{AwsKms, KeyManagementService};

#[cfg(test)]
pub use clients::MockKeyManagementService;
