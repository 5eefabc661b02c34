// MotionFeatureExtractor - frame-difference motion and stability features
//
// The video/image buffer is not decoded. Its bytes are treated as a flat
// stream of intensity samples: adjacent-byte differences approximate motion,
// and the spread of bytes inside fixed chunks approximates how steady the
// picture is.

use serde::{Deserialize, Serialize};

use crate::config::MotionConfig;

/// Largest byte value, used to normalize byte-domain quantities
const MAX_BYTE: f64 = 255.0;

/// Features extracted from one video/image buffer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionFeatures {
    /// Mean absolute adjacent-byte difference (0.0 to 1.0)
    pub motion_intensity: f64,

    /// Per-chunk standard deviation of byte values, averaged over chunks
    pub color_variance: f64,

    /// 1 - normalized mean absolute deviation inside chunks (0.0 to 1.0)
    pub stability: f64,

    /// Length of the source buffer; 0 marks the "no video" feature set
    pub byte_count: usize,

    /// Rough frame count estimate (byte_count / bytes_per_frame)
    pub estimated_frames: usize,
}

impl MotionFeatures {
    /// Fixed feature set returned for an empty buffer
    pub const NO_VIDEO: MotionFeatures = MotionFeatures {
        motion_intensity: 0.0,
        color_variance: 0.0,
        stability: 1.0,
        byte_count: 0,
        estimated_frames: 0,
    };

    /// True when these features stand in for a missing/empty sample
    pub fn is_empty(&self) -> bool {
        self.byte_count == 0
    }
}

/// Per-chunk dispersion statistics
#[derive(Debug, Clone, Copy, PartialEq)]
struct ChunkStats {
    std_dev: f64,
    mean_abs_dev: f64,
}

fn chunk_stats(chunk: &[u8]) -> ChunkStats {
    let len = chunk.len() as f64;
    let mean = chunk.iter().map(|&b| b as f64).sum::<f64>() / len;

    let variance = chunk
        .iter()
        .map(|&b| {
            let d = b as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / len;
    let mean_abs_dev = chunk.iter().map(|&b| (b as f64 - mean).abs()).sum::<f64>() / len;

    ChunkStats {
        std_dev: variance.sqrt(),
        mean_abs_dev,
    }
}

/// Extracts motion intensity and stability from raw video bytes
pub struct MotionFeatureExtractor {
    chunk_size: usize,
    bytes_per_frame: usize,
}

impl MotionFeatureExtractor {
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            chunk_size: config.chunk_size.max(1),
            bytes_per_frame: config.bytes_per_frame.max(1),
        }
    }

    /// Extract motion features from a raw byte buffer
    ///
    /// Never fails: an empty buffer yields [`MotionFeatures::NO_VIDEO`] and
    /// a buffer shorter than one chunk is reported as maximally stable.
    pub fn extract(&self, bytes: &[u8]) -> MotionFeatures {
        if bytes.is_empty() {
            log::debug!("[MotionFeatureExtractor] Empty buffer, using no-video feature set");
            return MotionFeatures::NO_VIDEO;
        }

        let (color_variance, stability) = self.chunk_dispersion(bytes);

        let features = MotionFeatures {
            motion_intensity: Self::motion_intensity(bytes),
            color_variance,
            stability,
            byte_count: bytes.len(),
            estimated_frames: bytes.len() / self.bytes_per_frame,
        };

        log::debug!(
            "[MotionFeatureExtractor] {} bytes: motion={:.4}, variance={:.2}, stability={:.4}",
            features.byte_count,
            features.motion_intensity,
            features.color_variance,
            features.stability
        );

        features
    }

    /// Mean absolute difference between adjacent bytes, normalized to [0, 1]
    fn motion_intensity(bytes: &[u8]) -> f64 {
        if bytes.len() < 2 {
            return 0.0;
        }

        let total: u64 = bytes
            .windows(2)
            .map(|pair| (pair[1] as i16 - pair[0] as i16).unsigned_abs() as u64)
            .sum();

        (total as f64 / ((bytes.len() - 1) as f64 * MAX_BYTE)).clamp(0.0, 1.0)
    }

    /// Average per-chunk standard deviation and stability over complete chunks
    ///
    /// Trailing bytes that do not fill a chunk are ignored.
    fn chunk_dispersion(&self, bytes: &[u8]) -> (f64, f64) {
        let stats: Vec<ChunkStats> = bytes.chunks_exact(self.chunk_size).map(chunk_stats).collect();
        if stats.is_empty() {
            return (0.0, 1.0);
        }

        let count = stats.len() as f64;
        let color_variance = stats.iter().map(|s| s.std_dev).sum::<f64>() / count;
        let mean_deviation = stats.iter().map(|s| s.mean_abs_dev).sum::<f64>() / count;
        let stability = (1.0 - mean_deviation / MAX_BYTE).clamp(0.0, 1.0);

        (color_variance, stability)
    }
}
