// FusionEngine - weighted combination of modality results
//
// Algorithm:
// 1. Each present modality contributes the mean of its truthfulness-relevant
//    sub-scores (voice: emotional + stress, facial: head pose + gaze,
//    text: sentiment + consistency + deception).
// 2. Configured weights of the present modalities are renormalized to sum
//    to 1; absent modalities get no weight and no substitute score.
// 3. truthfulness = round(Σ weight × contribution)
// 4. confidence = round(mean of present confidences)
// 5. The interpretation is picked from fixed threshold bands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::Modality;
use crate::config::FusionConfig;
use crate::error::FusionError;
use crate::scoring::{clamp_score, facial, text, voice, ModalityResult};

/// Interpretation bands, highest lower bound first; together they cover [0, 100]
pub const INTERPRETATION_BANDS: [(u8, &str); 4] = [
    (
        80,
        "High truthfulness indicators detected. Strong consistency across multiple analysis modalities.",
    ),
    (
        60,
        "Moderate truthfulness indicators. Some inconsistencies detected but overall credible.",
    ),
    (
        40,
        "Mixed signals detected. Some deception indicators present.",
    ),
    (
        0,
        "Low truthfulness indicators. Multiple deception signals detected.",
    ),
];

/// Sub-scores averaged into a modality's contribution
pub fn contribution_keys(modality: Modality) -> &'static [&'static str] {
    match modality {
        Modality::Voice => &[voice::EMOTIONAL_SCORE, voice::STRESS_SCORE],
        Modality::Facial => &[facial::HEAD_POSE_STABILITY, facial::GAZE_STABILITY],
        Modality::Text => &[
            text::SENTIMENT_SCORE,
            text::CONSISTENCY_SCORE,
            text::DECEPTION_SCORE,
        ],
    }
}

/// Interpretation text for a truthfulness value
pub fn interpret(truthfulness: u8) -> &'static str {
    INTERPRETATION_BANDS
        .iter()
        .find(|(lower, _)| truthfulness >= *lower)
        .map(|(_, text)| *text)
        .unwrap_or(INTERPRETATION_BANDS[INTERPRETATION_BANDS.len() - 1].1)
}

/// Fused outcome across all present modalities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionResult {
    /// Weighted truthfulness estimate (0-100)
    pub truthfulness: u8,

    /// Mean confidence of the present modalities (0-100)
    pub confidence: u8,

    pub interpretation: String,

    /// Per-modality contribution before weighting
    pub breakdown: BTreeMap<Modality, f64>,

    /// Renormalized weight applied to each present modality
    pub weights: BTreeMap<Modality, f64>,
}

/// Combines up to three modality results into one [`FusionResult`]
pub struct FusionEngine {
    config: FusionConfig,
}

impl FusionEngine {
    pub fn new(config: &FusionConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Configured (not yet renormalized) weight for a modality
    pub fn weight(&self, modality: Modality) -> f64 {
        let weight = match modality {
            Modality::Voice => self.config.voice_weight,
            Modality::Facial => self.config.facial_weight,
            Modality::Text => self.config.text_weight,
        };
        weight.max(0.0)
    }

    /// Mean of the modality's truthfulness-relevant sub-scores (0.0 to 100.0)
    ///
    /// # Errors
    /// `MissingSubScore` when a required key is absent from the result
    pub fn contribution(
        modality: Modality,
        result: &ModalityResult,
    ) -> Result<f64, FusionError> {
        let keys = contribution_keys(modality);
        let mut sum = 0.0;
        for key in keys {
            let value = result
                .sub_score(key)
                .ok_or_else(|| FusionError::MissingSubScore {
                    modality,
                    key: (*key).to_string(),
                })?;
            sum += value.min(100) as f64;
        }
        Ok(sum / keys.len() as f64)
    }

    /// Fuse whichever modality results are present
    ///
    /// # Errors
    /// - `MissingAllInputs` when all three are `None`
    /// - `MissingSubScore` when a present result lacks a contribution key
    /// - `InvalidWeights` when the present modalities' weights sum to zero
    pub fn fuse(
        &self,
        voice: Option<&ModalityResult>,
        facial: Option<&ModalityResult>,
        text: Option<&ModalityResult>,
    ) -> Result<FusionResult, FusionError> {
        let present: Vec<(Modality, &ModalityResult)> = [
            (Modality::Voice, voice),
            (Modality::Facial, facial),
            (Modality::Text, text),
        ]
        .into_iter()
        .filter_map(|(modality, result)| result.map(|r| (modality, r)))
        .collect();

        if present.is_empty() {
            return Err(FusionError::MissingAllInputs);
        }

        let total_weight: f64 = present.iter().map(|(m, _)| self.weight(*m)).sum();
        if total_weight <= 0.0 || !total_weight.is_finite() {
            return Err(FusionError::InvalidWeights {
                total: total_weight,
            });
        }

        let mut breakdown = BTreeMap::new();
        let mut weights = BTreeMap::new();
        let mut weighted_sum = 0.0;
        let mut confidence_sum = 0.0;

        for (modality, result) in &present {
            let contribution = Self::contribution(*modality, result)?;
            let weight = self.weight(*modality) / total_weight;

            weighted_sum += weight * contribution;
            confidence_sum += result.confidence.min(100) as f64;
            breakdown.insert(*modality, contribution);
            weights.insert(*modality, weight);
        }

        let truthfulness = clamp_score(weighted_sum);
        let confidence = clamp_score(confidence_sum / present.len() as f64);

        log::info!(
            "[FusionEngine] Fused {} modalities: truthfulness={}, confidence={}",
            present.len(),
            truthfulness,
            confidence
        );

        Ok(FusionResult {
            truthfulness,
            confidence,
            interpretation: interpret(truthfulness).to_string(),
            breakdown,
            weights,
        })
    }
}
