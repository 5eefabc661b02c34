// DFT module - direct Discrete Fourier Transform
//
// The analysis window is small and fixed, so the transform is computed by
// direct O(N²) summation rather than an FFT. Twiddle factors are tabulated
// once per call and indexed by (k * n) mod N.

use rustfft::num_complex::Complex;
use std::f64::consts::PI;

/// Computes magnitude spectra over a fixed-size prefix of the signal
pub struct DftProcessor {
    window_size: usize,
}

impl DftProcessor {
    /// Create a new DFT processor
    ///
    /// # Arguments
    /// * `window_size` - Maximum number of leading samples transformed
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size: window_size.max(1),
        }
    }

    /// Compute the non-redundant magnitude spectrum of the signal prefix
    ///
    /// The transform length is `min(signal.len(), window_size)`. Only bins
    /// `0..=N/2` are returned since the input is real-valued.
    ///
    /// # Returns
    /// Magnitude spectrum (size = N / 2 + 1), empty for an empty signal
    pub fn compute_magnitude_spectrum(&self, signal: &[f64]) -> Vec<f64> {
        let n = signal.len().min(self.window_size);
        if n == 0 {
            return Vec::new();
        }
        let frame = &signal[..n];

        let twiddles: Vec<Complex<f64>> = (0..n)
            .map(|i| Complex::from_polar(1.0, -2.0 * PI * i as f64 / n as f64))
            .collect();

        (0..=n / 2)
            .map(|k| {
                frame
                    .iter()
                    .enumerate()
                    .fold(Complex::new(0.0, 0.0), |acc, (i, &x)| {
                        acc + twiddles[(k * i) % n] * x
                    })
                    .norm()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfft::FftPlanner;

    fn sine(frequency_bin: f64, len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| (2.0 * PI * frequency_bin * i as f64 / len as f64).sin())
            .collect()
    }

    #[test]
    fn test_matches_fft_magnitudes() {
        let signal: Vec<f64> = (0..64)
            .map(|i| ((i * 7 % 13) as f64 - 6.0) / 6.0)
            .collect();
        let dft = DftProcessor::new(64).compute_magnitude_spectrum(&signal);

        let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
        let mut planner = FftPlanner::<f64>::new();
        planner.plan_fft_forward(64).process(&mut buffer);

        assert_eq!(dft.len(), 33);
        for (k, magnitude) in dft.iter().enumerate() {
            assert!(
                (magnitude - buffer[k].norm()).abs() < 1e-9,
                "bin {} differs: dft={} fft={}",
                k,
                magnitude,
                buffer[k].norm()
            );
        }
    }

    #[test]
    fn test_pure_tone_peaks_at_its_bin() {
        let spectrum = DftProcessor::new(256).compute_magnitude_spectrum(&sine(16.0, 256));
        let (peak_bin, _) = spectrum
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();
        assert_eq!(peak_bin, 16);
    }

    #[test]
    fn test_only_prefix_window_is_used() {
        let mut signal = sine(4.0, 32);
        signal.extend(vec![100.0; 500]);
        let windowed = DftProcessor::new(32).compute_magnitude_spectrum(&signal);
        let prefix = DftProcessor::new(32).compute_magnitude_spectrum(&signal[..32]);
        assert_eq!(windowed, prefix);
    }

    #[test]
    fn test_empty_signal() {
        assert!(DftProcessor::new(1024)
            .compute_magnitude_spectrum(&[])
            .is_empty());
    }
}
