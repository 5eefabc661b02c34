// Temporal module - Time-domain feature extraction
//
// These features are computed over the entire decoded buffer, not just
// the spectral analysis window.

/// Compute root-mean-square amplitude
///
/// Formula: RMS = sqrt((1 / N) × Σ x[n]²)
///
/// # Arguments
/// * `samples` - Samples normalized to [-1, 1]
///
/// # Returns
/// RMS amplitude (0.0 to 1.0)
pub fn compute_rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let energy: f64 = samples.iter().map(|&x| x * x).sum();
    (energy / samples.len() as f64).sqrt().clamp(0.0, 1.0)
}

/// Compute zero-crossing rate (ZCR)
///
/// A crossing is counted whenever `x[n] >= 0` differs from `x[n-1] >= 0`.
/// The count is normalized by the number of adjacent pairs.
///
/// # Arguments
/// * `samples` - Time-domain audio signal
///
/// # Returns
/// Zero-crossing rate (0.0 to 1.0)
pub fn compute_zcr(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }

    let crossings = samples
        .windows(2)
        .filter(|pair| (pair[0] >= 0.0) != (pair[1] >= 0.0))
        .count();

    crossings as f64 / (samples.len() - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rms_of_constant_signal() {
        assert!((compute_rms(&[0.5; 100]) - 0.5).abs() < 1e-12);
        assert!((compute_rms(&[-1.0; 10]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rms_of_silence() {
        assert_eq!(compute_rms(&[0.0; 4096]), 0.0);
        assert_eq!(compute_rms(&[]), 0.0);
    }

    #[test]
    fn test_zcr_alternating_signal() {
        let alternating: Vec<f64> = (0..101).map(|i| if i % 2 == 0 { 0.5 } else { -0.5 }).collect();
        assert_eq!(compute_zcr(&alternating), 1.0);
    }

    #[test]
    fn test_zcr_zero_counts_as_non_negative() {
        // 0.0 -> 0.0 -> -0.1 -> 0.0: two sign changes over three pairs
        let signal = [0.0, 0.0, -0.1, 0.0];
        assert!((compute_zcr(&signal) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(compute_zcr(&[0.0; 4096]), 0.0);
    }

    #[test]
    fn test_zcr_short_buffers() {
        assert_eq!(compute_zcr(&[]), 0.0);
        assert_eq!(compute_zcr(&[-1.0]), 0.0);
    }
}
