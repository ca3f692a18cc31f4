//! Word-vector embedder: the embedding of a text is the mean of the vectors
//! of its known tokens.

use std::collections::HashMap;

use serde::Deserialize;

use adtarget_core::errors::{ResourceError, TargetingResult};
use adtarget_core::text::tokenize;
use adtarget_core::traits::{ITextEmbedder, IVersionedResource};

pub const RESOURCE_NAME: &str = "text_embedding";

#[derive(Debug, Clone, Deserialize)]
pub struct WordVectorEmbedder {
    version: u32,
    dimension: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl WordVectorEmbedder {
    pub fn from_json(json: &str) -> TargetingResult<Self> {
        let embedder: Self = serde_json::from_str(json).map_err(|e| ResourceError::Malformed {
            resource: RESOURCE_NAME.to_string(),
            reason: e.to_string(),
        })?;
        if embedder.dimension == 0 {
            return Err(ResourceError::Malformed {
                resource: RESOURCE_NAME.to_string(),
                reason: "dimension must be positive".to_string(),
            }
            .into());
        }
        if let Some(bad) = embedder.vectors.values().find(|v| v.len() != embedder.dimension) {
            return Err(ResourceError::DimensionMismatch {
                expected: embedder.dimension,
                actual: bad.len(),
            }
            .into());
        }
        Ok(embedder)
    }
}

impl ITextEmbedder for WordVectorEmbedder {
    fn embed(&self, text: &str) -> TargetingResult<Vec<f32>> {
        let mut sum = vec![0.0f32; self.dimension];
        let mut known = 0u32;
        for token in tokenize(text) {
            if let Some(vector) = self.vectors.get(&token) {
                known += 1;
                for (acc, v) in sum.iter_mut().zip(vector) {
                    *acc += v;
                }
            }
        }
        if known == 0 {
            return Err(ResourceError::NoKnownTokens {
                resource: RESOURCE_NAME.to_string(),
            }
            .into());
        }
        let n = known as f32;
        Ok(sum.into_iter().map(|x| x / n).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        RESOURCE_NAME
    }
}

impl IVersionedResource for WordVectorEmbedder {
    fn version(&self) -> u32 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedder() -> WordVectorEmbedder {
        WordVectorEmbedder::from_json(
            r#"{ "version": 1, "dimension": 2,
                 "vectors": { "cat": [1.0, 0.0], "dog": [0.0, 1.0] } }"#,
        )
        .unwrap()
    }

    #[test]
    fn mean_of_known_tokens() {
        assert_eq!(embedder().embed("Cat and dog").unwrap(), vec![0.5, 0.5]);
        assert_eq!(embedder().embed("cat cat dog dog").unwrap(), vec![0.5, 0.5]);
    }

    #[test]
    fn no_known_tokens_is_an_error() {
        assert!(embedder().embed("fish").is_err());
    }

    #[test]
    fn vector_length_must_match_dimension() {
        let err = WordVectorEmbedder::from_json(
            r#"{ "version": 1, "dimension": 3, "vectors": { "cat": [1.0] } }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("expected 3, got 1"));
    }
}
