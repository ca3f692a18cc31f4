/// Errors raised while loading or evaluating a model resource
/// (purchase-intent keywords, classifier weights, word vectors).
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("resource `{resource}` is malformed: {reason}")]
    Malformed { resource: String, reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("no known tokens in input for `{resource}`")]
    NoKnownTokens { resource: String },
}
