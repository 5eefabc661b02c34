// Types module - Data structures for audio features

use serde::{Deserialize, Serialize};

/// Features extracted from one audio sample
///
/// Derived once per sample and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFeatures {
    /// Root-mean-square amplitude (0.0 to 1.0, normalized by full scale)
    pub rms: f64,

    /// Spectral centroid of the analysis window (0.0 to 1.0)
    ///
    /// 0.0 means all energy at DC, 1.0 means all energy at Nyquist.
    pub spectral_centroid_norm: f64,

    /// Fraction of adjacent sample pairs that change sign (0.0 to 1.0)
    pub zero_crossing_rate: f64,

    /// Autocorrelation pitch estimate in Hz (0.0 when no periodicity found)
    pub pitch_hz: f64,

    /// Sample duration in seconds at the configured sample rate
    pub duration_sec: f64,

    /// Number of decoded samples; 0 marks the "no audio" feature set
    pub sample_count: usize,
}

impl AudioFeatures {
    /// Fixed feature set returned for an empty buffer
    ///
    /// Amplitude-like features sit at their midpoint, periodicity and
    /// duration at zero.
    pub const NO_AUDIO: AudioFeatures = AudioFeatures {
        rms: 0.5,
        spectral_centroid_norm: 0.5,
        zero_crossing_rate: 0.5,
        pitch_hz: 0.0,
        duration_sec: 0.0,
        sample_count: 0,
    };

    /// True when these features stand in for a missing/empty sample
    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }
}
