//! Input parameters for the two-tone generator
//!
//! Values are validated once on construction and are immutable afterwards.

use crate::error::{parse_scalar, AnalysisError, Result};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Largest N whose 2N-bin complex spectrum is addressable in one allocation
pub const MAX_SAMPLES: usize = isize::MAX as usize / (2 * std::mem::size_of::<Complex64>());

/// One sinusoidal component: `amplitude * sin(2π * frequency * t + phase)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub amplitude: f64,

    /// Frequency in Hz
    pub frequency: f64,

    /// Phase offset in radians
    pub phase: f64,
}

impl Tone {
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }
}

/// Validated parameters for one generation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalParameters {
    n: usize,
    sampling_rate: u32,
    first: Tone,
    second: Tone,
}

impl SignalParameters {
    /// Validate and build parameters
    ///
    /// # Arguments
    /// * `n` - Number of samples (must be in 1..=MAX_SAMPLES)
    /// * `sampling_rate` - Sampling rate in Hz (must be > 0)
    /// * `first`, `second` - The two tones; every scalar must be finite
    pub fn new(n: i64, sampling_rate: i64, first: Tone, second: Tone) -> Result<Self> {
        if n < 1 {
            return Err(AnalysisError::invalid("N", format!("must be at least 1 (got {})", n)));
        }
        if sampling_rate <= 0 {
            return Err(AnalysisError::invalid(
                "samplingRate",
                format!("must be positive (got {})", sampling_rate),
            ));
        }
        let n = usize::try_from(n)
            .ok()
            .filter(|&n| n <= MAX_SAMPLES)
            .ok_or_else(|| {
                AnalysisError::invalid(
                    "N",
                    format!("{} exceeds the largest transformable size {}", n, MAX_SAMPLES),
                )
            })?;
        let sampling_rate = u32::try_from(sampling_rate).map_err(|_| {
            AnalysisError::invalid("samplingRate", format!("{} is out of range", sampling_rate))
        })?;

        check_finite("a1", first.amplitude)?;
        check_finite("f1", first.frequency)?;
        check_finite("phase1", first.phase)?;
        check_finite("a2", second.amplitude)?;
        check_finite("f2", second.frequency)?;
        check_finite("phase2", second.phase)?;

        Ok(Self {
            n,
            sampling_rate,
            first,
            second,
        })
    }

    /// Number of samples N
    pub fn n(&self) -> usize {
        self.n
    }

    /// Sampling rate in Hz
    pub fn sampling_rate(&self) -> u32 {
        self.sampling_rate
    }

    pub fn first(&self) -> &Tone {
        &self.first
    }

    pub fn second(&self) -> &Tone {
        &self.second
    }

    /// Larger of the two tone frequencies
    pub fn max_frequency(&self) -> f64 {
        self.first.frequency.max(self.second.frequency)
    }
}

impl Default for SignalParameters {
    fn default() -> Self {
        Self {
            n: 5000,
            sampling_rate: 1000,
            first: Tone::new(1.0, 5.0, 0.0),
            second: Tone::new(0.7, 10.0, 0.0),
        }
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnalysisError::invalid(name, format!("must be a finite number (got {})", value)))
    }
}

/// Raw text entries of a parameter form, as typed by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterForm {
    pub n: String,
    pub sampling_rate: String,
    pub a1: String,
    pub a2: String,
    pub f1: String,
    pub f2: String,
    pub phase1: String,
    pub phase2: String,
}

impl Default for ParameterForm {
    fn default() -> Self {
        Self {
            n: "5000".into(),
            sampling_rate: "1000".into(),
            a1: "1".into(),
            a2: "0.7".into(),
            f1: "5".into(),
            f2: "10".into(),
            phase1: "0".into(),
            phase2: "0".into(),
        }
    }
}

impl TryFrom<&ParameterForm> for SignalParameters {
    type Error = AnalysisError;

    fn try_from(form: &ParameterForm) -> Result<Self> {
        let first = Tone::new(
            parse_scalar("a1", &form.a1)?,
            parse_scalar("f1", &form.f1)?,
            parse_scalar("phase1", &form.phase1)?,
        );
        let second = Tone::new(
            parse_scalar("a2", &form.a2)?,
            parse_scalar("f2", &form.f2)?,
            parse_scalar("phase2", &form.phase2)?,
        );

        SignalParameters::new(
            parse_scalar("N", &form.n)?,
            parse_scalar("samplingRate", &form.sampling_rate)?,
            first,
            second,
        )
    }
}
