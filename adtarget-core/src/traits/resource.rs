use crate::errors::TargetingResult;
use crate::models::CategoryProbabilities;

/// Page-text classifier producing a probability per category.
pub trait ITextClassifier: Send + Sync {
    fn classify(&self, text: &str) -> TargetingResult<CategoryProbabilities>;

    /// Human-readable resource name.
    fn name(&self) -> &str;
}

/// Page-text embedder producing a fixed-length vector.
pub trait ITextEmbedder: Send + Sync {
    fn embed(&self, text: &str) -> TargetingResult<Vec<f32>>;

    /// Length of every vector returned by `embed`.
    fn dimensions(&self) -> usize;

    fn name(&self) -> &str;
}

/// Resources delivered as versioned payloads.
pub trait IVersionedResource {
    fn version(&self) -> u32;
}
