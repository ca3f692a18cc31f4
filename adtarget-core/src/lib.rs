//! # adtarget-core
//!
//! Foundation crate for the adtarget user-model engine.
//! Defines segments, the data model, collaborator traits, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod resource;
pub mod segment;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TargetingConfig;
pub use errors::{TargetingError, TargetingResult};
pub use models::{AdEventType, UserModel};
pub use resource::{ResourceHandle, ResourceState};
pub use segment::Segment;
