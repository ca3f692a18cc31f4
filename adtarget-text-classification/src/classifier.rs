//! Linear bag-of-words classifier loaded from a versioned JSON resource.
//!
//! ```text
//! logit[c] = bias[c] + Σ_token weight[token][c]
//! p[c]     = softmax(logit)[c]
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use adtarget_core::errors::{ResourceError, TargetingResult};
use adtarget_core::models::CategoryProbabilities;
use adtarget_core::segment::{is_valid_segment, Segment};
use adtarget_core::text::tokenize;
use adtarget_core::traits::{ITextClassifier, IVersionedResource};

pub const RESOURCE_NAME: &str = "text_classification";

#[derive(Debug, Clone, Deserialize)]
pub struct LinearTextClassifier {
    version: u32,
    segments: Vec<Segment>,
    biases: Vec<f64>,
    weights: HashMap<String, Vec<f64>>,
}

impl LinearTextClassifier {
    pub fn from_json(json: &str) -> TargetingResult<Self> {
        let classifier: Self = serde_json::from_str(json).map_err(|e| ResourceError::Malformed {
            resource: RESOURCE_NAME.to_string(),
            reason: e.to_string(),
        })?;
        classifier.validate()?;
        Ok(classifier)
    }

    fn validate(&self) -> TargetingResult<()> {
        if self.segments.is_empty() || !self.segments.iter().all(|s| is_valid_segment(s)) {
            return Err(ResourceError::Malformed {
                resource: RESOURCE_NAME.to_string(),
                reason: "segments must be non-empty names".to_string(),
            }
            .into());
        }
        let expected = self.segments.len();
        let bad_len = std::iter::once(self.biases.len())
            .chain(self.weights.values().map(Vec::len))
            .find(|&len| len != expected);
        if let Some(actual) = bad_len {
            return Err(ResourceError::DimensionMismatch { expected, actual }.into());
        }
        Ok(())
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl ITextClassifier for LinearTextClassifier {
    fn classify(&self, text: &str) -> TargetingResult<CategoryProbabilities> {
        let mut logits = self.biases.clone();
        let mut known = 0usize;
        for token in tokenize(text) {
            if let Some(weights) = self.weights.get(&token) {
                known += 1;
                for (logit, weight) in logits.iter_mut().zip(weights) {
                    *logit += weight;
                }
            }
        }
        if known == 0 {
            return Err(ResourceError::NoKnownTokens {
                resource: RESOURCE_NAME.to_string(),
            }
            .into());
        }

        Ok(self.segments.iter().cloned().zip(softmax(&logits)).collect())
    }

    fn name(&self) -> &str {
        RESOURCE_NAME
    }
}

impl IVersionedResource for LinearTextClassifier {
    fn version(&self) -> u32 {
        self.version
    }
}

/// Numerically stable softmax.
fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESOURCE: &str = r#"{
        "version": 3,
        "segments": ["sports", "travel"],
        "biases": [0.0, 0.0],
        "weights": { "football": [2.0, 0.0], "beach": [0.0, 1.0] }
    }"#;

    #[test]
    fn softmax_sums_to_one() {
        let p = softmax(&[1.0, 2.0, 3.0]);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(p[2] > p[1] && p[1] > p[0]);
    }

    #[test]
    fn softmax_handles_large_logits() {
        let p = softmax(&[1000.0, 1000.0]);
        assert!((p[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn classify_favours_weighted_terms() {
        let classifier = LinearTextClassifier::from_json(RESOURCE).unwrap();
        let p = classifier.classify("Football on the beach, football!").unwrap();
        assert!(p["sports"] > p["travel"]);
        assert_eq!(classifier.version(), 3);
    }

    #[test]
    fn unknown_text_is_rejected() {
        let classifier = LinearTextClassifier::from_json(RESOURCE).unwrap();
        assert!(classifier.classify("nothing relevant").is_err());
    }

    #[test]
    fn weight_length_must_match_segments() {
        let json = r#"{ "version": 1, "segments": ["a", "b"], "biases": [0.0, 0.0],
                        "weights": { "x": [1.0] } }"#;
        let err = LinearTextClassifier::from_json(json).unwrap_err();
        assert!(err.to_string().contains("expected 2, got 1"));
    }
}
