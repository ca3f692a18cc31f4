mod bandit;
mod classification;
mod purchase_intent;
mod text_embedding;
mod user_model;

pub use bandit::{AdEventType, BanditArmStatistics, BanditArms, BanditFeedback};
pub use classification::{CategoryProbabilities, ClassificationHistory};
pub use purchase_intent::{
    PurchaseIntentHistoryEntry, PurchaseIntentSignal, PurchaseIntentSignalHistory, SegmentScore,
};
pub use text_embedding::TextEmbeddingEvent;
pub use user_model::UserModel;
