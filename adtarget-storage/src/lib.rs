//! # adtarget-storage
//!
//! SQLite persistence collaborator for the targeting engine.
//! Client-state JSON blobs hold the purchase-intent history, the
//! page-probability window, and the bandit arms; text embedding events live
//! in their own table.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use adtarget_core::errors::{StorageError, TargetingError};

/// Wrap a driver error message as a storage error.
pub(crate) fn to_storage_err(message: String) -> TargetingError {
    StorageError::SqliteError { message }.into()
}
