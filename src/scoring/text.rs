// TextScorer - credibility sub-scores from linguistic features
//
// Marker-based sub-scores start at 100 and lose a fixed penalty per marker
// token; sentiment is mapped from [-1, 1] onto [0, 100] around 50.

use crate::analysis::{LinguisticFeatures, Modality};
use crate::config::TextScoringConfig;
use crate::scoring::{ModalityResult, ModalityScorer};

pub const SENTIMENT_SCORE: &str = "sentimentScore";
pub const CONSISTENCY_SCORE: &str = "consistencyScore";
pub const COMPLEXITY_SCORE: &str = "complexityScore";
pub const CONTRADICTION_SCORE: &str = "contradictionScore";
pub const DECEPTION_SCORE: &str = "deceptionScore";
pub const HEDGING_SCORE: &str = "hedgingScore";

pub const NO_TEXT_INTERPRETATION: &str = "No text data provided";

/// Default result used when no transcript is available
const DEFAULT_SENTIMENT: f64 = 50.0;
const DEFAULT_CONSISTENCY: f64 = 70.0;
const DEFAULT_COMPLEXITY: f64 = 40.0;
const DEFAULT_CONTRADICTION: f64 = 90.0;
const DEFAULT_DECEPTION: f64 = 85.0;
const DEFAULT_HEDGING: f64 = 90.0;
const DEFAULT_CONFIDENCE: f64 = 60.0;

/// Sentiment magnitude needed before the interpretation calls it non-neutral
const SENTIMENT_NEUTRAL_BAND: f64 = 0.1;
/// Consistency above this is reported as "high"
const HIGH_CONSISTENCY: u8 = 70;
/// Deception-filler count above this is reported as "high"
const HIGH_DECEPTION_COUNT: u32 = 2;

pub struct TextScorer {
    config: TextScoringConfig,
}

impl TextScorer {
    pub fn new(config: &TextScoringConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn confidence(&self, features: &LinguisticFeatures) -> f64 {
        let c = &self.config;
        let word_factor = if c.word_saturation > 0 {
            (features.word_count as usize).min(c.word_saturation) as f64 / c.word_saturation as f64
        } else {
            1.0
        };
        let raw = c.confidence_word_span * word_factor
            + c.confidence_marker_bonus * features.marker_counts.confidence as f64
            - c.deception_ratio_penalty * features.deception_ratio();

        c.confidence_floor + raw.clamp(0.0, c.confidence_headroom.max(0.0))
    }
}

fn interpret(features: &LinguisticFeatures, consistency: u8) -> String {
    let sentiment = if features.sentiment_score > SENTIMENT_NEUTRAL_BAND {
        "positive"
    } else if features.sentiment_score < -SENTIMENT_NEUTRAL_BAND {
        "negative"
    } else {
        "neutral"
    };
    let consistency = if consistency > HIGH_CONSISTENCY {
        "high"
    } else {
        "low"
    };
    let deception = if features.marker_counts.deception > HIGH_DECEPTION_COUNT {
        "high"
    } else {
        "low"
    };
    format!(
        "Text analysis shows {} sentiment with {} consistency. Deception indicators: {}.",
        sentiment, consistency, deception
    )
}

impl ModalityScorer for TextScorer {
    type Features = LinguisticFeatures;

    fn modality(&self) -> Modality {
        Modality::Text
    }

    fn score(&self, features: &LinguisticFeatures) -> ModalityResult {
        let c = &self.config;
        let markers = &features.marker_counts;

        let result = ModalityResult::new(Modality::Text)
            .with_score(SENTIMENT_SCORE, 50.0 + 50.0 * features.sentiment_score)
            .with_score(
                CONSISTENCY_SCORE,
                100.0 - c.consistency_diversity_penalty * features.vocabulary_diversity,
            )
            .with_score(
                COMPLEXITY_SCORE,
                (features.avg_words_per_sentence * c.complexity_per_word).min(100.0),
            )
            .with_score(
                CONTRADICTION_SCORE,
                100.0 - c.contradiction_penalty * markers.contradiction as f64,
            )
            .with_score(
                DECEPTION_SCORE,
                100.0 - c.deception_penalty * markers.deception as f64,
            )
            .with_score(
                HEDGING_SCORE,
                100.0 - c.hedging_penalty * markers.hedging as f64,
            )
            .with_confidence(self.confidence(features));

        let consistency = result.sub_score(CONSISTENCY_SCORE).unwrap_or_default();
        let interpretation = interpret(features, consistency);
        result.with_interpretation(interpretation)
    }

    fn default_result(&self) -> ModalityResult {
        ModalityResult::new(Modality::Text)
            .with_score(SENTIMENT_SCORE, DEFAULT_SENTIMENT)
            .with_score(CONSISTENCY_SCORE, DEFAULT_CONSISTENCY)
            .with_score(COMPLEXITY_SCORE, DEFAULT_COMPLEXITY)
            .with_score(CONTRADICTION_SCORE, DEFAULT_CONTRADICTION)
            .with_score(DECEPTION_SCORE, DEFAULT_DECEPTION)
            .with_score(HEDGING_SCORE, DEFAULT_HEDGING)
            .with_confidence(DEFAULT_CONFIDENCE)
            .with_interpretation(NO_TEXT_INTERPRETATION)
    }
}
