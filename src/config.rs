//! Configuration for feature extraction, scoring and fusion
//!
//! Every heuristic coefficient of the engine lives here as a named value,
//! so the weighting can be tuned from a JSON file without recompilation.
//! Defaults reproduce the reference weighting (voice 0.3, facial 0.3,
//! text 0.4) and the documented per-sub-score transforms.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub audio: AudioConfig,
    pub motion: MotionConfig,
    pub voice: VoiceScoringConfig,
    pub facial: FacialScoringConfig,
    pub text: TextScoringConfig,
    pub fusion: FusionConfig,
}

/// How raw audio bytes are decoded into signed amplitude samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleFormat {
    /// One signed byte per sample (buffer length == sample count)
    SignedPcm8,
    /// Two bytes per sample, little-endian signed
    SignedPcm16Le,
}

impl SampleFormat {
    /// Bytes consumed per decoded sample
    pub fn bytes_per_sample(self) -> usize {
        match self {
            SampleFormat::SignedPcm8 => 1,
            SampleFormat::SignedPcm16Le => 2,
        }
    }

    /// Largest representable magnitude, used to normalize samples to [-1, 1]
    pub fn max_amplitude(self) -> f64 {
        match self {
            SampleFormat::SignedPcm8 => 128.0,
            SampleFormat::SignedPcm16Le => 32768.0,
        }
    }
}

/// Audio feature extraction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Assumed sample rate in Hz (no container parsing is done)
    pub sample_rate: u32,
    pub sample_format: SampleFormat,
    /// Prefix length fed to the direct DFT
    pub dft_window: usize,
    /// Prefix length used for autocorrelation pitch detection
    pub pitch_window: usize,
    /// Smallest candidate lag in samples (inclusive)
    pub min_lag: usize,
    /// Largest candidate lag in samples (exclusive)
    pub max_lag: usize,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            sample_format: SampleFormat::SignedPcm8,
            dft_window: 1024,
            pitch_window: 2048,
            min_lag: 20,
            max_lag: 200,
        }
    }
}

impl AudioConfig {
    /// Highest pitch the lag range can report (sample_rate / min_lag)
    pub fn max_pitch_hz(&self) -> f64 {
        self.sample_rate as f64 / self.min_lag.max(1) as f64
    }
}

/// Motion feature extraction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Non-overlapping chunk size for variance and stability
    pub chunk_size: usize,
    /// Bytes assumed per frame when estimating the frame count
    pub bytes_per_frame: usize,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            chunk_size: 100,
            bytes_per_frame: 1000,
        }
    }
}

/// Voice sub-score coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceScoringConfig {
    pub emotional_rms_weight: f64,
    pub emotional_centroid_weight: f64,
    pub emotional_zcr_weight: f64,
    pub stress_pitch_weight: f64,
    pub stress_rms_weight: f64,
    pub stress_zcr_weight: f64,
    /// Lowest confidence a data-backed voice result can receive
    pub confidence_floor: f64,
    /// Confidence added on top of the floor by a perfect-quality signal
    pub confidence_span: f64,
    pub confidence_rms_weight: f64,
    pub confidence_zcr_weight: f64,
    pub confidence_duration_weight: f64,
    /// Duration (seconds) beyond which longer samples add no confidence
    pub duration_saturation_sec: f64,
}

impl Default for VoiceScoringConfig {
    fn default() -> Self {
        Self {
            emotional_rms_weight: 0.3,
            emotional_centroid_weight: 0.4,
            emotional_zcr_weight: 0.3,
            stress_pitch_weight: 0.5,
            stress_rms_weight: 0.3,
            stress_zcr_weight: 0.2,
            confidence_floor: 55.0,
            confidence_span: 45.0,
            confidence_rms_weight: 0.4,
            confidence_zcr_weight: 0.3,
            confidence_duration_weight: 0.3,
            duration_saturation_sec: 10.0,
        }
    }
}

/// Facial sub-score coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacialScoringConfig {
    /// gazeStability = stability * gaze_factor * 100
    pub gaze_factor: f64,
    pub confidence_floor: f64,
    /// Confidence contributed by a saturated frame count
    pub confidence_frame_span: f64,
    /// Confidence contributed by full motion intensity
    pub confidence_motion_span: f64,
    pub frame_saturation: usize,
}

impl Default for FacialScoringConfig {
    fn default() -> Self {
        Self {
            gaze_factor: 0.9,
            confidence_floor: 55.0,
            confidence_frame_span: 30.0,
            confidence_motion_span: 15.0,
            frame_saturation: 100,
        }
    }
}

/// Text sub-score coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextScoringConfig {
    /// Points removed from consistency per unit of vocabulary diversity
    pub consistency_diversity_penalty: f64,
    /// Complexity points per average word in a sentence
    pub complexity_per_word: f64,
    pub contradiction_penalty: f64,
    pub deception_penalty: f64,
    pub hedging_penalty: f64,
    pub confidence_floor: f64,
    /// Maximum confidence above the floor
    pub confidence_headroom: f64,
    pub confidence_word_span: f64,
    pub word_saturation: usize,
    pub confidence_marker_bonus: f64,
    pub deception_ratio_penalty: f64,
}

impl Default for TextScoringConfig {
    fn default() -> Self {
        Self {
            consistency_diversity_penalty: 30.0,
            complexity_per_word: 10.0,
            contradiction_penalty: 20.0,
            deception_penalty: 15.0,
            hedging_penalty: 10.0,
            confidence_floor: 65.0,
            confidence_headroom: 35.0,
            confidence_word_span: 25.0,
            word_saturation: 50,
            confidence_marker_bonus: 5.0,
            deception_ratio_penalty: 10.0,
        }
    }
}

/// Per-modality fusion weights (renormalized over present modalities)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    pub voice_weight: f64,
    pub facial_weight: f64,
    pub text_weight: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            voice_weight: 0.3,
            facial_weight: 0.3,
            text_weight: 0.4,
        }
    }
}

impl EngineConfig {
    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The parsed configuration, or the defaults when the file is missing or
    /// invalid (a warning is logged in both cases). Missing fields inside a
    /// valid file take their default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.audio.sample_rate, 44_100);
        assert_eq!(config.audio.dft_window, 1024);
        assert_eq!(config.audio.pitch_window, 2048);
        assert_eq!(config.motion.chunk_size, 100);
        assert_eq!(config.fusion.voice_weight, 0.3);
        assert_eq!(config.fusion.facial_weight, 0.3);
        assert_eq!(config.fusion.text_weight, 0.4);
    }

    #[test]
    fn test_max_pitch_matches_lag_range() {
        let audio = AudioConfig::default();
        assert!((audio.max_pitch_hz() - 2205.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "fusion": { "text_weight": 1.0 }, "audio": { "sample_format": "signed_pcm16_le" } }"#;
        let parsed: EngineConfig = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.fusion.text_weight, 1.0);
        assert_eq!(parsed.fusion.voice_weight, 0.3);
        assert_eq!(parsed.audio.sample_format, SampleFormat::SignedPcm16Le);
        assert_eq!(parsed.audio.sample_rate, 44_100);
        assert_eq!(parsed.text, TextScoringConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = EngineConfig::load_from_file("/nonexistent/truth_fusion.json");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = EngineConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
