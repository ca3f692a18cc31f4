//! # adtarget-purchase-intent
//!
//! Purchase-intent model: browsing visits and search queries become
//! weighted per-segment signals whose contribution decays after a time
//! window. Segments scoring at or above a threshold are predicted.

pub mod classifier;
pub mod keywords;
pub mod model;
pub mod resource;
pub mod scoring;
pub mod search_engine;

pub use classifier::extract_signal;
pub use model::PurchaseIntentModel;
pub use resource::PurchaseIntentResource;
pub use scoring::{compute_segment_scores, predict_segments, ScoringParams};
