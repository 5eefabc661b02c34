// Pitch module - autocorrelation pitch estimation
//
// For every candidate lag in [min_lag, max_lag) the unnormalized
// autocorrelation Σ x[i]·x[i+lag] is computed over a fixed prefix window.
// The lag with the strictly largest positive correlation wins; ties keep
// the shorter lag.

/// Autocorrelation pitch detector over a fixed analysis window
pub struct PitchDetector {
    sample_rate: u32,
    window_size: usize,
    min_lag: usize,
    max_lag: usize,
}

impl PitchDetector {
    /// Create a new pitch detector
    ///
    /// # Arguments
    /// * `sample_rate` - Sample rate in Hz
    /// * `window_size` - Number of leading samples analysed
    /// * `min_lag` - Smallest candidate period in samples (inclusive)
    /// * `max_lag` - Largest candidate period in samples (exclusive)
    pub fn new(sample_rate: u32, window_size: usize, min_lag: usize, max_lag: usize) -> Self {
        Self {
            sample_rate,
            window_size,
            min_lag: min_lag.max(1),
            max_lag,
        }
    }

    /// Find the lag with maximal positive autocorrelation
    ///
    /// # Returns
    /// `Some(lag)` or `None` when no lag correlates positively
    pub fn best_lag(&self, samples: &[f64]) -> Option<usize> {
        let window = &samples[..samples.len().min(self.window_size)];

        let mut best: Option<(usize, f64)> = None;
        for lag in self.min_lag..self.max_lag {
            if lag >= window.len() {
                break;
            }

            let correlation: f64 = window
                .iter()
                .zip(&window[lag..])
                .map(|(a, b)| a * b)
                .sum();

            let current_best = best.map(|(_, c)| c).unwrap_or(0.0);
            if correlation > current_best {
                best = Some((lag, correlation));
            }
        }

        best.map(|(lag, _)| lag)
    }

    /// Estimate the fundamental frequency
    ///
    /// # Returns
    /// Pitch in Hz (sample_rate / best_lag), or 0.0 when no periodicity is found
    pub fn detect(&self, samples: &[f64]) -> f64 {
        match self.best_lag(samples) {
            Some(lag) => self.sample_rate as f64 / lag as f64,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn detector() -> PitchDetector {
        PitchDetector::new(44_100, 2048, 20, 200)
    }

    fn sine(frequency: f64, len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| 0.5 * (2.0 * PI * frequency * i as f64 / 44_100.0).sin())
            .collect()
    }

    #[test]
    fn test_detects_period_of_441_hz_sine() {
        // 441 Hz at 44.1 kHz has a period of exactly 100 samples
        let signal = sine(441.0, 4096);
        assert_eq!(detector().best_lag(&signal), Some(100));
        assert!((detector().detect(&signal) - 441.0).abs() < 1e-9);
    }

    #[test]
    fn test_silence_has_no_pitch() {
        assert_eq!(detector().best_lag(&[0.0; 4096]), None);
        assert_eq!(detector().detect(&[0.0; 4096]), 0.0);
    }

    #[test]
    fn test_buffer_shorter_than_min_lag() {
        assert_eq!(detector().detect(&[0.3; 10]), 0.0);
        assert_eq!(detector().detect(&[]), 0.0);
    }

    #[test]
    fn test_constant_signal_prefers_shortest_lag() {
        // Positive DC correlates at every lag; the shortest lag has the most terms
        assert_eq!(detector().best_lag(&[0.25; 2048]), Some(20));
    }

    #[test]
    fn test_samples_beyond_window_are_ignored() {
        let mut signal = vec![0.0; 2048];
        signal.extend(sine(441.0, 2048));
        assert_eq!(detector().detect(&signal), 0.0);
    }
}
