//! ScoringEngine: the reusable entry point of the crate.
//!
//! Wires the per-modality extractors and scorers to the fusion engine behind
//! one cheaply cloneable value. The engine holds nothing but immutable
//! configuration and the components derived from it, so clones can be handed
//! to worker threads or blocking tasks freely (see `session`).

use std::sync::Arc;

use crate::analysis::text::has_words;
use crate::analysis::{
    AudioFeatureExtractor, AudioFeatures, LinguisticFeatures, Modality, MotionFeatureExtractor,
    MotionFeatures, RawSample, TextFeatureExtractor,
};
use crate::config::EngineConfig;
use crate::error::{ExtractionError, FusionError};
use crate::fusion::{FusionEngine, FusionResult};
use crate::scoring::{FacialScorer, ModalityResult, ModalityScorer, TextScorer, VoiceScorer};

pub mod session;

pub use session::{ModalityFailure, SessionFeatures, SessionInput, SessionReport};

/// How a transcript without any words (empty, whitespace or punctuation) is treated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TextPolicy {
    /// Blank text is an `InvalidText` error
    #[default]
    Required,
    /// Blank text yields the default text result
    Optional,
    /// Blank text is replaced by this transcript before scoring
    Fallback(String),
}

impl TextPolicy {
    /// Transcript to score, or `None` when the default result applies
    ///
    /// # Errors
    /// `InvalidText` when the text (or the fallback) has no words and the
    /// policy does not allow it
    pub fn resolve<'a>(&'a self, text: &'a str) -> Result<Option<&'a str>, ExtractionError> {
        if has_words(text) {
            return Ok(Some(text));
        }
        match self {
            TextPolicy::Required => Err(ExtractionError::InvalidText),
            TextPolicy::Optional => Ok(None),
            TextPolicy::Fallback(fallback) if has_words(fallback) => {
                Ok(Some(fallback.as_str()))
            }
            TextPolicy::Fallback(_) => Err(ExtractionError::InvalidText),
        }
    }
}

/// Features of one modality together with their scored result
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis<F> {
    /// `None` when the result is the modality's "no data" default
    pub features: Option<F>,
    pub result: ModalityResult,
}

struct Pipelines {
    config: EngineConfig,
    audio: AudioFeatureExtractor,
    motion: MotionFeatureExtractor,
    text: TextFeatureExtractor,
    voice_scorer: VoiceScorer,
    facial_scorer: FacialScorer,
    text_scorer: TextScorer,
    fusion: FusionEngine,
}

/// Stateless scoring service
///
/// Every call is a pure function of its inputs and the configuration the
/// engine was built with.
#[derive(Clone)]
pub struct ScoringEngine {
    inner: Arc<Pipelines>,
}

impl ScoringEngine {
    pub fn new(config: EngineConfig) -> Self {
        let pipelines = Pipelines {
            audio: AudioFeatureExtractor::new(&config.audio),
            motion: MotionFeatureExtractor::new(&config.motion),
            text: TextFeatureExtractor::new(),
            voice_scorer: VoiceScorer::new(&config.voice, &config.audio),
            facial_scorer: FacialScorer::new(&config.facial),
            text_scorer: TextScorer::new(&config.text),
            fusion: FusionEngine::new(&config.fusion),
            config,
        };

        Self {
            inner: Arc::new(pipelines),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    /// Extract features from one sample and score them
    ///
    /// An absent sample yields the modality's fixed default result. Blank
    /// text is rejected; use [`Self::extract_and_score_with_policy`] to
    /// relax that.
    ///
    /// # Errors
    /// - `SampleMismatch` when text is given to a byte modality or vice versa
    /// - `MalformedBuffer` when audio bytes cannot be decoded
    /// - `InvalidText` for a transcript without words
    pub fn extract_and_score(
        &self,
        modality: Modality,
        sample: Option<&RawSample>,
    ) -> Result<ModalityResult, ExtractionError> {
        self.extract_and_score_with_policy(modality, sample, &TextPolicy::Required)
    }

    /// [`Self::extract_and_score`] with an explicit blank-text policy
    pub fn extract_and_score_with_policy(
        &self,
        modality: Modality,
        sample: Option<&RawSample>,
        policy: &TextPolicy,
    ) -> Result<ModalityResult, ExtractionError> {
        let Some(sample) = sample else {
            return Ok(self.default_result(modality));
        };

        match modality {
            Modality::Voice => sample
                .as_bytes()
                .ok_or(ExtractionError::SampleMismatch { modality })
                .and_then(|bytes| self.score_voice(bytes)),
            Modality::Facial => sample
                .as_bytes()
                .map(|bytes| self.score_facial(bytes))
                .ok_or(ExtractionError::SampleMismatch { modality }),
            Modality::Text => sample
                .as_text()
                .ok_or(ExtractionError::SampleMismatch { modality })
                .and_then(|text| self.score_text(text, policy)),
        }
    }

    /// Extract and score raw audio bytes, keeping the features
    pub fn analyze_voice(&self, bytes: &[u8]) -> Result<Analysis<AudioFeatures>, ExtractionError> {
        let features = self.inner.audio.extract(bytes)?;
        log::debug!(
            "[ScoringEngine] voice features: rms={:.4}, centroid={:.4}, zcr={:.4}, pitch={:.1}Hz",
            features.rms,
            features.spectral_centroid_norm,
            features.zero_crossing_rate,
            features.pitch_hz
        );
        let result = self.inner.voice_scorer.score(&features);
        Ok(Analysis {
            features: (!features.is_empty()).then_some(features),
            result,
        })
    }

    /// Extract and score raw video/image bytes, keeping the features
    pub fn analyze_facial(&self, bytes: &[u8]) -> Analysis<MotionFeatures> {
        let features = self.inner.motion.extract(bytes);
        log::debug!(
            "[ScoringEngine] facial features: motion={:.4}, stability={:.4}, frames={}",
            features.motion_intensity,
            features.stability,
            features.estimated_frames
        );
        let result = self.inner.facial_scorer.score(&features);
        Analysis {
            features: (!features.is_empty()).then_some(features),
            result,
        }
    }

    /// Extract and score a transcript under a blank-text policy, keeping the features
    pub fn analyze_text(
        &self,
        text: &str,
        policy: &TextPolicy,
    ) -> Result<Analysis<LinguisticFeatures>, ExtractionError> {
        let Some(text) = policy.resolve(text)? else {
            return Ok(Analysis {
                features: None,
                result: self.inner.text_scorer.default_result(),
            });
        };

        let features = self.inner.text.extract(text)?;
        log::debug!(
            "[ScoringEngine] text features: words={}, sentiment={:.3}, diversity={:.3}",
            features.word_count,
            features.sentiment_score,
            features.vocabulary_diversity
        );
        let result = self.inner.text_scorer.score(&features);
        Ok(Analysis {
            features: Some(features),
            result,
        })
    }

    /// Score raw audio bytes
    pub fn score_voice(&self, bytes: &[u8]) -> Result<ModalityResult, ExtractionError> {
        self.analyze_voice(bytes).map(|analysis| analysis.result)
    }

    /// Score raw video/image bytes; never fails
    pub fn score_facial(&self, bytes: &[u8]) -> ModalityResult {
        self.analyze_facial(bytes).result
    }

    /// Score a transcript under the given blank-text policy
    pub fn score_text(
        &self,
        text: &str,
        policy: &TextPolicy,
    ) -> Result<ModalityResult, ExtractionError> {
        self.analyze_text(text, policy).map(|analysis| analysis.result)
    }

    /// Fixed "no data" result for a modality
    pub fn default_result(&self, modality: Modality) -> ModalityResult {
        match modality {
            Modality::Voice => self.inner.voice_scorer.default_result(),
            Modality::Facial => self.inner.facial_scorer.default_result(),
            Modality::Text => self.inner.text_scorer.default_result(),
        }
    }

    /// Fuse previously scored modality results
    pub fn fuse(
        &self,
        voice: Option<&ModalityResult>,
        facial: Option<&ModalityResult>,
        text: Option<&ModalityResult>,
    ) -> Result<FusionResult, FusionError> {
        self.inner.fusion.fuse(voice, facial, text)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
