// Scoring module - heuristic mapping from features to bounded sub-scores
//
// Each modality scorer turns its extractor's features into a
// ModalityResult: named 0-100 sub-scores, a confidence estimate and a
// human-readable interpretation. Every transform is a clamped linear
// combination whose coefficients live in EngineConfig.
//
// When a sample is absent or empty the scorer returns a fixed default
// result whose confidence sits below anything a data-backed result can
// receive, so "no data" is represented losslessly instead of as zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::Modality;

pub mod facial;
pub mod text;
pub mod voice;

pub use facial::FacialScorer;
pub use text::TextScorer;
pub use voice::VoiceScorer;

/// Round to the nearest integer and clamp into [0, 100]
///
/// NaN maps to 0 so a degenerate feature can never escape the bounds.
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Scored output of one modality
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalityResult {
    pub modality: Modality,

    /// Named sub-scores, each in [0, 100]
    pub sub_scores: BTreeMap<String, u8>,

    /// Categorical descriptors (e.g. micro-expression activity)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Evidentiary weight of this result (0-100)
    pub confidence: u8,

    pub interpretation: String,
}

impl ModalityResult {
    pub fn new(modality: Modality) -> Self {
        Self {
            modality,
            sub_scores: BTreeMap::new(),
            labels: BTreeMap::new(),
            confidence: 0,
            interpretation: String::new(),
        }
    }

    /// Add a sub-score, rounding and clamping the raw value
    pub fn with_score(mut self, key: &str, value: f64) -> Self {
        self.sub_scores.insert(key.to_string(), clamp_score(value));
        self
    }

    pub fn with_label(mut self, key: &str, value: &str) -> Self {
        self.labels.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_confidence(mut self, value: f64) -> Self {
        self.confidence = clamp_score(value);
        self
    }

    pub fn with_interpretation(mut self, interpretation: impl Into<String>) -> Self {
        self.interpretation = interpretation.into();
        self
    }

    pub fn sub_score(&self, key: &str) -> Option<u8> {
        self.sub_scores.get(key).copied()
    }
}

/// Maps one modality's features into a [`ModalityResult`]
pub trait ModalityScorer {
    type Features;

    fn modality(&self) -> Modality;

    /// Score extracted features
    fn score(&self, features: &Self::Features) -> ModalityResult;

    /// Fixed "insufficient data" result for an absent sample
    fn default_result(&self) -> ModalityResult;
}

#[cfg(test)]
#[path = "scorer_tests.rs"]
mod tests;
