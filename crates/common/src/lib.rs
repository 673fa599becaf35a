//! Common types and errors shared across `kms-encryptor` crates.

pub mod error;
pub mod protocol;

pub use error::ServiceError;
pub use protocol::EncryptEvent;
