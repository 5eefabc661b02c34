// Types module - Data structures for linguistic features

use serde::{Deserialize, Serialize};

/// Counts of tokens found in each closed marker list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerCounts {
    pub hedging: u32,
    pub confidence: u32,
    pub contradiction: u32,
    pub deception: u32,
}

/// Features extracted from one transcript
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinguisticFeatures {
    pub word_count: u32,

    /// Non-empty sentence fragments, never below 1
    pub sentence_count: u32,

    pub avg_words_per_sentence: f64,

    /// Unique tokens / total tokens (0.0 to 1.0)
    pub vocabulary_diversity: f64,

    /// (positive - negative) / tokens, clamped to [-1, 1]
    pub sentiment_score: f64,

    pub positive_count: u32,
    pub negative_count: u32,
    pub marker_counts: MarkerCounts,
}

impl LinguisticFeatures {
    /// Share of tokens that are deception-filler words (0.0 to 1.0)
    pub fn deception_ratio(&self) -> f64 {
        self.marker_counts.deception as f64 / self.word_count.max(1) as f64
    }
}
