//! Two-tone signal synthesis on a uniform sampling grid

use super::params::{SignalParameters, Tone};
use std::f64::consts::PI;

/// Sampled two-tone signal
#[derive(Debug, Clone, PartialEq)]
pub struct SampledSignal {
    /// Sample times t[i] = i / fs
    pub time: Vec<f64>,

    /// First component X1(t)
    pub x1: Vec<f64>,

    /// Second component X2(t)
    pub x2: Vec<f64>,

    /// X1(t) + X2(t)
    pub combined: Vec<f64>,
}

impl SampledSignal {
    /// Number of samples N
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Evaluate one tone over the time grid
pub fn sample_tone(tone: &Tone, time: &[f64]) -> Vec<f64> {
    time.iter()
        .map(|&t| tone.amplitude * (2.0 * PI * tone.frequency * t + tone.phase).sin())
        .collect()
}

/// Build the time grid and both components
///
/// The grid holds exactly N points spanning `0..=(N-1)/fs`.
pub fn synthesize(params: &SignalParameters) -> SampledSignal {
    let fs = params.sampling_rate() as f64;
    let time: Vec<f64> = (0..params.n()).map(|i| i as f64 / fs).collect();

    let x1 = sample_tone(params.first(), &time);
    let x2 = sample_tone(params.second(), &time);
    let combined = x1.iter().zip(x2.iter()).map(|(&a, &b)| a + b).collect();

    log::debug!(
        "Synthesized {} samples at {} Hz (f1={} Hz, f2={} Hz)",
        time.len(),
        params.sampling_rate(),
        params.first().frequency,
        params.second().frequency
    );

    SampledSignal {
        time,
        x1,
        x2,
        combined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(n: i64, fs: i64) -> SignalParameters {
        SignalParameters::new(
            n,
            fs,
            Tone::new(1.0, 5.0, 0.0),
            Tone::new(0.7, 10.0, 0.3),
        )
        .unwrap()
    }

    #[test]
    fn test_time_grid_endpoints() {
        let signal = synthesize(&params(5000, 1000));

        assert_eq!(signal.len(), 5000);
        assert_eq!(signal.time[0], 0.0);
        assert_eq!(signal.time[4999], 4999.0 / 1000.0);
    }

    #[test]
    fn test_single_sample_grid() {
        let signal = synthesize(&params(1, 44100));
        assert_eq!(signal.time, vec![0.0]);
        assert_eq!(signal.combined.len(), 1);
    }

    #[test]
    fn test_combined_is_exact_sum() {
        let signal = synthesize(&params(777, 8000));

        for i in 0..signal.len() {
            assert_eq!(signal.combined[i], signal.x1[i] + signal.x2[i]);
        }
    }

    #[test]
    fn test_phase_shifts_component() {
        // sin(x + π/2) == cos(x)
        let tone = Tone::new(2.0, 3.0, PI / 2.0);
        let time = [0.0, 0.1, 0.25];
        let samples = sample_tone(&tone, &time);

        for (&t, &s) in time.iter().zip(samples.iter()) {
            let expected = 2.0 * (2.0 * PI * 3.0 * t).cos();
            assert!((s - expected).abs() < 1e-12);
        }
    }
}
