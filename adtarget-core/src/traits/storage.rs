use crate::errors::TargetingResult;
use crate::models::{
    BanditArms, ClassificationHistory, PurchaseIntentSignalHistory, TextEmbeddingEvent,
};

/// Persistence for purchase-intent signal histories.
pub trait IPurchaseIntentStore: Send + Sync {
    /// Load the full history. A store with nothing saved yields an empty history.
    fn load_purchase_intent_history(&self) -> TargetingResult<PurchaseIntentSignalHistory>;
    fn save_purchase_intent_history(&self, history: &PurchaseIntentSignalHistory)
        -> TargetingResult<()>;
}

/// Persistence for the page-probability window.
pub trait IClassificationStore: Send + Sync {
    fn load_classification_history(&self) -> TargetingResult<ClassificationHistory>;
    fn save_classification_history(&self, history: &ClassificationHistory) -> TargetingResult<()>;
}

/// Persistence for bandit arm statistics.
pub trait IBanditStore: Send + Sync {
    fn load_bandit_arms(&self) -> TargetingResult<BanditArms>;
    fn save_bandit_arms(&self, arms: &BanditArms) -> TargetingResult<()>;
}

/// Append-only store of text embedding events.
pub trait ITextEmbeddingEventStore: Send + Sync {
    fn insert_text_embedding_event(&self, event: &TextEmbeddingEvent) -> TargetingResult<()>;

    /// All events, newest first.
    fn get_text_embedding_events(&self) -> TargetingResult<Vec<TextEmbeddingEvent>>;

    /// Delete everything except the `keep` most recently created events.
    /// Returns the number of rows deleted.
    fn delete_text_embedding_events_except_most_recent(&self, keep: usize)
        -> TargetingResult<usize>;
}
