// VoiceScorer - bounded sub-scores from audio features
//
// Sub-scores:
// - pitchScore: pitch normalized by the highest detectable pitch
// - toneScore: normalized spectral centroid
// - emotionalScore: loudness, brightness and ZCR blend
// - stressScore: pitch, loudness and ZCR blend
//
// Confidence rises with loudness, ZCR and duration (capped), on top of a
// floor that keeps any real sample above the "no audio" default.

use crate::analysis::{AudioFeatures, Modality};
use crate::config::{AudioConfig, VoiceScoringConfig};
use crate::scoring::{ModalityResult, ModalityScorer};

pub const PITCH_SCORE: &str = "pitchScore";
pub const TONE_SCORE: &str = "toneScore";
pub const EMOTIONAL_SCORE: &str = "emotionalScore";
pub const STRESS_SCORE: &str = "stressScore";

/// Neutral value of every voice sub-score in the default result
const DEFAULT_SUB_SCORE: f64 = 50.0;
const DEFAULT_CONFIDENCE: f64 = 50.0;
pub const NO_AUDIO_INTERPRETATION: &str = "No audio data provided";

pub struct VoiceScorer {
    config: VoiceScoringConfig,
    max_pitch_hz: f64,
}

impl VoiceScorer {
    pub fn new(config: &VoiceScoringConfig, audio: &AudioConfig) -> Self {
        Self {
            config: config.clone(),
            max_pitch_hz: audio.max_pitch_hz(),
        }
    }

    fn pitch_norm(&self, features: &AudioFeatures) -> f64 {
        if self.max_pitch_hz <= 0.0 {
            return 0.0;
        }
        (features.pitch_hz / self.max_pitch_hz).clamp(0.0, 1.0)
    }

    fn emotional(&self, features: &AudioFeatures) -> f64 {
        let c = &self.config;
        (c.emotional_rms_weight * features.rms
            + c.emotional_centroid_weight * features.spectral_centroid_norm
            + c.emotional_zcr_weight * features.zero_crossing_rate)
            * 100.0
    }

    fn stress(&self, features: &AudioFeatures) -> f64 {
        let c = &self.config;
        (c.stress_pitch_weight * self.pitch_norm(features)
            + c.stress_rms_weight * features.rms
            + c.stress_zcr_weight * features.zero_crossing_rate)
            * 100.0
    }

    fn confidence(&self, features: &AudioFeatures) -> f64 {
        let c = &self.config;
        let duration_factor = if c.duration_saturation_sec > 0.0 {
            features.duration_sec.min(c.duration_saturation_sec) / c.duration_saturation_sec
        } else {
            1.0
        };
        let quality = c.confidence_rms_weight * features.rms
            + c.confidence_zcr_weight * features.zero_crossing_rate
            + c.confidence_duration_weight * duration_factor;

        c.confidence_floor + c.confidence_span * quality.clamp(0.0, 1.0)
    }
}

fn interpret(emotional: u8, stress: u8) -> String {
    let emotional = if emotional > 60 {
        "elevated"
    } else if emotional > 40 {
        "normal"
    } else {
        "low"
    };
    let stress = if stress > 60 {
        "high"
    } else if stress > 40 {
        "moderate"
    } else {
        "low"
    };
    format!(
        "Voice analysis shows {} emotional state with {} stress indicators.",
        emotional, stress
    )
}

impl ModalityScorer for VoiceScorer {
    type Features = AudioFeatures;

    fn modality(&self) -> Modality {
        Modality::Voice
    }

    fn score(&self, features: &AudioFeatures) -> ModalityResult {
        if features.is_empty() {
            return self.default_result();
        }

        let result = ModalityResult::new(Modality::Voice)
            .with_score(PITCH_SCORE, self.pitch_norm(features) * 100.0)
            .with_score(TONE_SCORE, features.spectral_centroid_norm * 100.0)
            .with_score(EMOTIONAL_SCORE, self.emotional(features))
            .with_score(STRESS_SCORE, self.stress(features))
            .with_confidence(self.confidence(features));

        let emotional = result.sub_score(EMOTIONAL_SCORE).unwrap_or_default();
        let stress = result.sub_score(STRESS_SCORE).unwrap_or_default();
        result.with_interpretation(interpret(emotional, stress))
    }

    fn default_result(&self) -> ModalityResult {
        ModalityResult::new(Modality::Voice)
            .with_score(PITCH_SCORE, DEFAULT_SUB_SCORE)
            .with_score(TONE_SCORE, DEFAULT_SUB_SCORE)
            .with_score(EMOTIONAL_SCORE, DEFAULT_SUB_SCORE)
            .with_score(STRESS_SCORE, DEFAULT_SUB_SCORE)
            .with_confidence(DEFAULT_CONFIDENCE)
            .with_interpretation(NO_AUDIO_INTERPRETATION)
    }
}
