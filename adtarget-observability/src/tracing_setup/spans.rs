//! Span definitions per model: purchase intent, text classification,
//! text embedding, bandit, user model.

/// Create a purchase-intent span.
#[macro_export]
macro_rules! purchase_intent_span {
    ($operation:expr) => {
        tracing::info_span!("adtarget.purchase_intent", operation = %$operation)
    };
}

/// Create a text-classification span.
#[macro_export]
macro_rules! text_classification_span {
    ($operation:expr) => {
        tracing::info_span!("adtarget.text_classification", operation = %$operation)
    };
}

/// Create a text-embedding span.
#[macro_export]
macro_rules! text_embedding_span {
    ($operation:expr) => {
        tracing::info_span!("adtarget.text_embedding", operation = %$operation)
    };
}

/// Create a bandit span.
#[macro_export]
macro_rules! bandit_span {
    ($operation:expr) => {
        tracing::info_span!("adtarget.bandit", operation = %$operation)
    };
}

/// Create a user-model build span.
#[macro_export]
macro_rules! user_model_span {
    () => {
        tracing::info_span!("adtarget.user_model")
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PURCHASE_INTENT: &str = "adtarget.purchase_intent";
    pub const TEXT_CLASSIFICATION: &str = "adtarget.text_classification";
    pub const TEXT_EMBEDDING: &str = "adtarget.text_embedding";
    pub const BANDIT: &str = "adtarget.bandit";
    pub const USER_MODEL: &str = "adtarget.user_model";
}
