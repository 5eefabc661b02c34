// AudioFeatureExtractor - amplitude, spectral and periodicity features
//
// Raw bytes are decoded as signed PCM at a fixed sample rate (no container
// or codec parsing) and reduced to a handful of bounded features.
//
// Module organization:
// - types: Data structures (AudioFeatures)
// - dft: direct DFT over a fixed prefix window
// - spectral: frequency-domain features (centroid)
// - temporal: time-domain features (RMS, ZCR)
// - pitch: autocorrelation pitch detection
// - mod.rs: Coordinator (AudioFeatureExtractor)
//
// Features extracted:
// 1. RMS: overall loudness normalized by full scale
// 2. Spectral Centroid: brightness of the first DFT window, normalized to [0, 1]
// 3. Zero-Crossing Rate: sign changes across the whole buffer
// 4. Pitch: sample_rate / best autocorrelation lag
// 5. Duration: sample count / sample rate

mod dft;
mod pitch;
mod spectral;
mod temporal;
mod types;

pub use types::AudioFeatures;

use crate::analysis::Modality;
use crate::config::{AudioConfig, SampleFormat};
use crate::error::ExtractionError;
use dft::DftProcessor;
use pitch::PitchDetector;

/// AudioFeatureExtractor coordinates the audio feature pipeline
///
/// Holds only immutable configuration, so one instance can serve any
/// number of concurrent requests.
pub struct AudioFeatureExtractor {
    sample_rate: u32,
    sample_format: SampleFormat,
    dft_processor: DftProcessor,
    pitch_detector: PitchDetector,
}

impl AudioFeatureExtractor {
    /// Create a new AudioFeatureExtractor from the audio configuration
    pub fn new(config: &AudioConfig) -> Self {
        let sample_rate = config.sample_rate.max(1);

        Self {
            sample_rate,
            sample_format: config.sample_format,
            dft_processor: DftProcessor::new(config.dft_window),
            pitch_detector: PitchDetector::new(
                sample_rate,
                config.pitch_window,
                config.min_lag,
                config.max_lag,
            ),
        }
    }

    /// Decode raw bytes into samples normalized to [-1, 1]
    ///
    /// # Errors
    /// `MalformedBuffer` when the byte count is not a whole number of samples
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<f64>, ExtractionError> {
        let bytes_per_sample = self.sample_format.bytes_per_sample();
        if bytes.len() % bytes_per_sample != 0 {
            return Err(ExtractionError::MalformedBuffer {
                modality: Modality::Voice,
                reason: format!(
                    "{} bytes is not a multiple of {} bytes per sample",
                    bytes.len(),
                    bytes_per_sample
                ),
            });
        }

        let full_scale = self.sample_format.max_amplitude();
        let samples = match self.sample_format {
            SampleFormat::SignedPcm8 => bytes
                .iter()
                .map(|&b| b as i8 as f64 / full_scale)
                .collect(),
            SampleFormat::SignedPcm16Le => bytes
                .chunks_exact(2)
                .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f64 / full_scale)
                .collect(),
        };

        Ok(samples)
    }

    /// Extract all features from a raw audio buffer
    ///
    /// An empty buffer yields [`AudioFeatures::NO_AUDIO`] rather than an
    /// error.
    pub fn extract(&self, bytes: &[u8]) -> Result<AudioFeatures, ExtractionError> {
        if bytes.is_empty() {
            log::debug!("[AudioFeatureExtractor] Empty buffer, using no-audio feature set");
            return Ok(AudioFeatures::NO_AUDIO);
        }

        let samples = self.decode(bytes)?;
        Ok(self.extract_samples(&samples))
    }

    /// Extract features from already-decoded samples
    pub fn extract_samples(&self, samples: &[f64]) -> AudioFeatures {
        if samples.is_empty() {
            return AudioFeatures::NO_AUDIO;
        }

        let spectrum = self.dft_processor.compute_magnitude_spectrum(samples);

        let features = AudioFeatures {
            rms: temporal::compute_rms(samples),
            spectral_centroid_norm: spectral::compute_centroid_norm(&spectrum),
            zero_crossing_rate: temporal::compute_zcr(samples),
            pitch_hz: self.pitch_detector.detect(samples),
            duration_sec: samples.len() as f64 / self.sample_rate as f64,
            sample_count: samples.len(),
        };

        log::debug!(
            "[AudioFeatureExtractor] {} samples: rms={:.4}, centroid={:.4}, zcr={:.4}, pitch={:.1}Hz",
            features.sample_count,
            features.rms,
            features.spectral_centroid_norm,
            features.zero_crossing_rate,
            features.pitch_hz
        );

        features
    }
}
