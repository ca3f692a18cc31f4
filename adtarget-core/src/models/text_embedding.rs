use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One embedded page, as persisted by the event store.
///
/// `hashed_text_base64` fingerprints the page text; the text itself is never
/// stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEmbeddingEvent {
    pub created_at: DateTime<Utc>,
    pub locale: String,
    pub hashed_text_base64: String,
    pub embedding: Vec<f32>,
}
