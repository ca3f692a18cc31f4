//! # adtarget-user-model
//!
//! Combines the purchase-intent, bandit, text-classification, and
//! text-embedding models into a single [`UserModel`](adtarget_core::UserModel).
//! [`TargetingEngine`] owns every model over one storage engine.

pub mod builder;
pub mod engine;

pub use builder::UserModelBuilder;
pub use engine::{build_user_model_async, EngineOptions, TargetingEngine};
