//! Zero-padded magnitude spectrum of the combined signal
//!
//! Pads an N-sample signal to 2N, runs the direct DFT and returns magnitudes
//! with their frequency axis in Hz.

use super::dft::DftEngine;
use super::padding::zero_pad;
use crate::config::DftMethod;
use crate::error::{AnalysisError, Result};
use crate::progress::Progress;
use num_complex::Complex64;

/// Magnitude spectrum over all 2N bins
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeSpectrum {
    /// Bin frequencies in Hz: k * fs / (2N)
    pub frequencies: Vec<f64>,

    /// |X[k]|
    pub magnitudes: Vec<f64>,
}

impl MagnitudeSpectrum {
    /// Total number of bins (2N)
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Number of bins in the first half (N)
    pub fn half_len(&self) -> usize {
        self.magnitudes.len() / 2
    }

    /// Magnitudes of the first half, where peaks are searched
    pub fn first_half(&self) -> &[f64] {
        &self.magnitudes[..self.half_len()]
    }

    /// Spacing between neighbouring bins in Hz
    pub fn bin_width(&self) -> f64 {
        self.frequencies.get(1).copied().unwrap_or(0.0)
    }
}

/// Spectrum analyzer for zero-padded real signals
pub struct SpectrumAnalyzer {
    sampling_rate: f64,
    method: DftMethod,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    ///
    /// # Arguments
    /// * `sampling_rate` - Sample rate in Hz
    /// * `method` - How the O(N²) transform is evaluated
    pub fn new(sampling_rate: f64, method: DftMethod) -> Self {
        Self {
            sampling_rate,
            method,
        }
    }

    /// Complex spectrum of the zero-padded signal (2N bins)
    pub fn complex_spectrum(&self, signal: &[f64], progress: &Progress) -> Result<Vec<Complex64>> {
        if signal.is_empty() {
            return Err(AnalysisError::invalid("N", "cannot transform an empty signal"));
        }

        let padded = zero_pad(signal);
        let engine = DftEngine::new(padded.len());

        log::debug!(
            "Running {:?} DFT over {} bins ({} signal samples)",
            self.method,
            engine.size(),
            signal.len()
        );

        match self.method {
            DftMethod::Direct => engine.transform_with_progress(&padded, progress),
            DftMethod::KernelMatrix => engine.transform_matrix_with_progress(&padded, progress),
        }
    }

    /// Analyze signal and return the magnitude spectrum
    pub fn analyze(&self, signal: &[f64]) -> Result<MagnitudeSpectrum> {
        self.analyze_with_progress(signal, &Progress::new())
    }

    /// Analyze signal, reporting transform progress and honouring cancellation
    pub fn analyze_with_progress(
        &self,
        signal: &[f64],
        progress: &Progress,
    ) -> Result<MagnitudeSpectrum> {
        let spectrum = self.complex_spectrum(signal, progress)?;

        Ok(MagnitudeSpectrum {
            frequencies: self.frequency_axis(spectrum.len()),
            magnitudes: spectrum.iter().map(|c| c.norm()).collect(),
        })
    }

    /// Frequency axis in Hz for a transform of `bins` points
    pub fn frequency_axis(&self, bins: usize) -> Vec<f64> {
        (0..bins)
            .map(|k| k as f64 * self.sampling_rate / bins as f64)
            .collect()
    }

    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    pub fn method(&self) -> DftMethod {
        self.method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn tone(amplitude: f64, freq: f64, fs: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| amplitude * (2.0 * PI * freq * i as f64 / fs).sin())
            .collect()
    }

    #[test]
    fn test_spectrum_length_and_axis() {
        let analyzer = SpectrumAnalyzer::new(1000.0, DftMethod::Direct);
        let spectrum = analyzer.analyze(&tone(1.0, 50.0, 1000.0, 100)).unwrap();

        assert_eq!(spectrum.len(), 200);
        assert_eq!(spectrum.frequencies[0], 0.0);
        assert!((spectrum.bin_width() - 5.0).abs() < 1e-12);
        assert!((spectrum.frequencies[199] - 995.0).abs() < 1e-9);
    }

    #[test]
    fn test_on_bin_tone_magnitude() {
        // 40 Hz with fs=1000, N=200 sits exactly on padded bin 16
        let (a, f, fs, n) = (1.3, 40.0, 1000.0, 200);
        let analyzer = SpectrumAnalyzer::new(fs, DftMethod::Direct);
        let spectrum = analyzer.analyze(&tone(a, f, fs, n)).unwrap();

        let (peak_bin, &peak_mag) = spectrum
            .first_half()
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();

        assert!((spectrum.frequencies[peak_bin] - f).abs() < 1e-9);
        let expected = a * n as f64 / 2.0;
        assert!(((peak_mag - expected) / expected).abs() < 1e-6);
    }

    #[test]
    fn test_parseval_energy() {
        let signal: Vec<f64> = (0..150)
            .map(|i| 0.8 * (0.17 * i as f64).sin() - 0.4 * (0.91 * i as f64 + 0.2).cos())
            .collect();
        let analyzer = SpectrumAnalyzer::new(500.0, DftMethod::Direct);
        let spectrum = analyzer.analyze(&signal).unwrap();

        let spectral: f64 = spectrum.magnitudes.iter().map(|m| m * m).sum();
        let temporal: f64 = signal.iter().map(|x| x * x).sum();
        let expected = spectrum.len() as f64 * temporal;

        assert!(((spectral - expected) / expected).abs() < 1e-9);
    }

    #[test]
    fn test_methods_agree() {
        let signal = tone(0.9, 12.5, 200.0, 64);
        let direct = SpectrumAnalyzer::new(200.0, DftMethod::Direct)
            .analyze(&signal)
            .unwrap();
        let dense = SpectrumAnalyzer::new(200.0, DftMethod::KernelMatrix)
            .analyze(&signal)
            .unwrap();

        assert_eq!(direct.frequencies, dense.frequencies);
        for (a, b) in direct.magnitudes.iter().zip(dense.magnitudes.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_kernel_matrix_run_can_be_cancelled() {
        let analyzer = SpectrumAnalyzer::new(200.0, DftMethod::KernelMatrix);
        let progress = Progress::new();
        progress.cancel();

        let result = analyzer.analyze_with_progress(&tone(0.9, 12.5, 200.0, 64), &progress);
        assert_eq!(result, Err(AnalysisError::Cancelled));
    }

    #[test]
    fn test_kernel_matrix_reports_per_bin_progress() {
        let analyzer = SpectrumAnalyzer::new(200.0, DftMethod::KernelMatrix);
        let progress = Progress::new();
        analyzer
            .analyze_with_progress(&tone(0.9, 12.5, 200.0, 48), &progress)
            .unwrap();

        assert_eq!(progress.total(), 96);
        assert_eq!(progress.completed(), 96);
    }

    #[test]
    fn test_empty_signal_rejected() {
        let analyzer = SpectrumAnalyzer::new(1000.0, DftMethod::Direct);
        assert!(matches!(
            analyzer.analyze(&[]),
            Err(AnalysisError::InvalidParameter { .. })
        ));
    }
}
