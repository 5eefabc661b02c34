// Spectral module - Frequency-domain feature extraction
//
// Features here are computed from the half magnitude spectrum produced by
// the DFT module.

/// Magnitude sums below this are treated as a silent spectrum
const SILENCE_EPSILON: f64 = 1e-12;

/// Compute the normalized spectral centroid
///
/// Formula: centroid = Σ(i × |X[i]|) / Σ|X[i]|, divided by the highest bin
/// index so that DC maps to 0.0 and Nyquist to 1.0.
///
/// # Arguments
/// * `spectrum` - Magnitude spectrum for bins 0..=N/2
///
/// # Returns
/// Normalized centroid (0.0 to 1.0); 0.0 for an empty or silent spectrum
pub fn compute_centroid_norm(spectrum: &[f64]) -> f64 {
    if spectrum.len() < 2 {
        return 0.0;
    }

    let magnitude_sum: f64 = spectrum.iter().sum();
    if magnitude_sum <= SILENCE_EPSILON {
        return 0.0;
    }

    let weighted_sum: f64 = spectrum
        .iter()
        .enumerate()
        .map(|(i, &mag)| i as f64 * mag)
        .sum();

    let highest_bin = (spectrum.len() - 1) as f64;
    (weighted_sum / magnitude_sum / highest_bin).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_energy_at_dc() {
        assert_eq!(compute_centroid_norm(&[4.0, 0.0, 0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_all_energy_at_nyquist() {
        assert_eq!(compute_centroid_norm(&[0.0, 0.0, 0.0, 0.0, 2.0]), 1.0);
    }

    #[test]
    fn test_flat_spectrum_is_centered() {
        let centroid = compute_centroid_norm(&[1.0; 9]);
        assert!((centroid - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_silence_and_degenerate_input() {
        assert_eq!(compute_centroid_norm(&[0.0; 16]), 0.0);
        assert_eq!(compute_centroid_norm(&[3.0]), 0.0);
        assert_eq!(compute_centroid_norm(&[]), 0.0);
    }
}
