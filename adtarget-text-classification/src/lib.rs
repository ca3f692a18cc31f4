//! # adtarget-text-classification
//!
//! Classifies page text into category probabilities, keeps a short window
//! of recent pages, and ranks interest segments over that window.

pub mod classifier;
pub mod model;
pub mod ranking;

pub use classifier::LinearTextClassifier;
pub use model::TextClassificationModel;
pub use ranking::{RankingStrategy, SummedProbabilityRanking};
