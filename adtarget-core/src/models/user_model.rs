use serde::{Deserialize, Serialize};

use crate::models::TextEmbeddingEvent;
use crate::segment::Segment;

/// Aggregate produced for one targeting request.
///
/// Each field comes from one model and may overlap with the others; combining
/// them is the consumer's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserModel {
    pub intent_segments: Vec<Segment>,
    pub latent_interest_segments: Vec<Segment>,
    pub interest_segments: Vec<Segment>,
    pub text_embedding_events: Vec<TextEmbeddingEvent>,
}

impl UserModel {
    /// Intent, latent interest, then interest segments, concatenated as-is.
    pub fn segments(&self) -> Vec<Segment> {
        self.intent_segments
            .iter()
            .chain(&self.latent_interest_segments)
            .chain(&self.interest_segments)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.intent_segments.is_empty()
            && self.latent_interest_segments.is_empty()
            && self.interest_segments.is_empty()
            && self.text_embedding_events.is_empty()
    }
}
