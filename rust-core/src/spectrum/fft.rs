//! FFT engine backed by rustfft and realfft
//!
//! Plans are cached by the planners, so repeated transforms of the same
//! length only pay the planning cost once.

use realfft::RealFftPlanner;
use num_complex::Complex;
use rustfft::FftPlanner;

/// Full-length forward/inverse DFT over arbitrary lengths
///
/// Forward transforms are unnormalized; inverse transforms divide by the
/// transform length, so `inverse(forward(x)) == x` up to rounding.
pub struct FftEngine {
    /// Complex planner (forward and inverse)
    complex_planner: FftPlanner<f64>,

    /// Real-input planner for the forward path of real signals
    real_planner: RealFftPlanner<f64>,
}

impl FftEngine {
    pub fn new() -> Self {
        Self {
            complex_planner: FftPlanner::new(),
            real_planner: RealFftPlanner::new(),
        }
    }

    /// Forward DFT of a real signal, all `n` bins
    ///
    /// # Arguments
    /// * `signal` - Real input of any length
    ///
    /// # Returns
    /// `X[k]` for `k = 0..n`; the upper half is filled by conjugate symmetry
    pub fn forward_real(&mut self, signal: &[f64]) -> Vec<Complex<f64>> {
        let n = signal.len();
        if n == 0 {
            return Vec::new();
        }

        let r2c = self.real_planner.plan_fft_forward(n);
        let mut input = signal.to_vec();
        let mut half = r2c.make_output_vec();

        r2c.process(&mut input, &mut half)
            .expect("FFT processing failed");

        // X[n - k] = conj(X[k]) for real input
        let mut spectrum = Vec::with_capacity(n);
        spectrum.extend_from_slice(&half);
        for k in half.len()..n {
            let mirrored = spectrum[n - k].conj();
            spectrum.push(mirrored);
        }

        spectrum
    }

    /// Forward DFT in place
    pub fn forward(&mut self, buffer: &mut [Complex<f64>]) {
        if buffer.is_empty() {
            return;
        }

        let fft = self.complex_planner.plan_fft_forward(buffer.len());
        fft.process(buffer);
    }

    /// Inverse DFT in place, scaled by `1/n`
    pub fn inverse(&mut self, buffer: &mut [Complex<f64>]) {
        if buffer.is_empty() {
            return;
        }

        let ifft = self.complex_planner.plan_fft_inverse(buffer.len());
        ifft.process(buffer);

        let scale = 1.0 / buffer.len() as f64;
        for x in buffer.iter_mut() {
            *x *= scale;
        }
    }
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Frequency in Hz of each bin of an `n`-point DFT
///
/// Ordering matches the transform output: DC, positive frequencies, then
/// negative frequencies.
///
/// # Arguments
/// * `n` - Transform length
/// * `sample_period` - Seconds between samples
pub fn fft_frequencies(n: usize, sample_period: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }

    let scale = 1.0 / (n as f64 * sample_period);
    let positive = (n - 1) / 2 + 1;

    (0..n)
        .map(|i| {
            let k = if i < positive { i as f64 } else { i as f64 - n as f64 };
            k * scale
        })
        .collect()
}
