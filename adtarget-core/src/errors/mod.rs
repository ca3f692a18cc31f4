//! Error taxonomy for the targeting engine.
//!
//! `NotReady` is never surfaced to callers of the `process_*` entry points
//! (they no-op instead). `LoadFailure` is logged and treated as empty state.
//! `ConfigurationMismatch` keeps a resource uninitialized until a fresh
//! resource is delivered.

mod config_error;
mod resource_error;
mod storage_error;

pub use config_error::ConfigError;
pub use resource_error::ResourceError;
pub use storage_error::StorageError;

/// Top-level error type for every adtarget crate.
#[derive(Debug, thiserror::Error)]
pub enum TargetingError {
    #[error("{component} is not ready")]
    NotReady { component: String },

    #[error("failed to load {what}: {reason}")]
    LoadFailure { what: String, reason: String },

    #[error("{component} version mismatch: expected {expected}, got {actual}")]
    ConfigurationMismatch {
        component: String,
        expected: u32,
        actual: u32,
    },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("resource error: {0}")]
    ResourceError(#[from] ResourceError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl TargetingError {
    /// Shorthand for a `NotReady` error on the named component.
    pub fn not_ready(component: impl Into<String>) -> Self {
        Self::NotReady {
            component: component.into(),
        }
    }

    /// Shorthand for an `InvalidInput` error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Whether this error is the silent "resource not loaded yet" case.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady { .. })
    }

    /// Whether a persisted value exists but could not be decoded.
    pub fn is_malformed_state(&self) -> bool {
        matches!(self, Self::StorageError(StorageError::MalformedState { .. }))
    }
}

/// Result alias used across the workspace.
pub type TargetingResult<T> = Result<T, TargetingError>;
