//! Command-line argument parsing.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use harmonic_dft::signal::ParameterForm;
use harmonic_dft::{AnalyzerConfig, BoundaryPolicy, DftMethod};

/// Command line arguments
///
/// Signal scalars are taken as text and validated by the core, so a
/// non-numeric entry is reported the same way a form front end would see it.
#[derive(Parser, Debug)]
#[command(name = "harmonic-dft-cli")]
#[command(about = "Two-tone signal generator with zero-padded DFT peak extraction", long_about = None)]
pub struct Args {
    /// Number of samples N
    #[arg(short = 'n', long = "samples", value_name = "N", default_value = "5000")]
    pub n: String,

    /// Sampling rate in Hz
    #[arg(short = 'r', long, value_name = "HZ", default_value = "1000")]
    pub sampling_rate: String,

    /// Amplitude of the first tone
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub a1: String,

    /// Amplitude of the second tone
    #[arg(long, default_value = "0.7", allow_hyphen_values = true)]
    pub a2: String,

    /// Frequency of the first tone (Hz)
    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    pub f1: String,

    /// Frequency of the second tone (Hz)
    #[arg(long, default_value = "10", allow_hyphen_values = true)]
    pub f2: String,

    /// Phase shift of the first tone (radians)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub phase1: String,

    /// Phase shift of the second tone (radians)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub phase2: String,

    /// JSON analyzer config; explicit flags below take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// DFT evaluation strategy
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,

    /// Handling of a peak on the edge of the half-spectrum
    #[arg(long, value_enum)]
    pub boundary: Option<BoundaryArg>,

    /// Write the result row as CSV
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Write the result row as JSON
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Render the four plots as PNG files into this directory
    #[arg(long, value_name = "DIR")]
    pub plots: Option<PathBuf>,

    /// Hide the progress indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable logging (honours RUST_LOG)
    #[arg(long)]
    pub enable_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Direct,
    KernelMatrix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoundaryArg {
    Fail,
    Clamp,
}

impl From<MethodArg> for DftMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Direct => DftMethod::Direct,
            MethodArg::KernelMatrix => DftMethod::KernelMatrix,
        }
    }
}

impl From<BoundaryArg> for BoundaryPolicy {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Fail => BoundaryPolicy::Fail,
            BoundaryArg::Clamp => BoundaryPolicy::Clamp,
        }
    }
}

impl Args {
    /// Raw parameter entries, as a form front end would hand them over
    pub fn parameter_form(&self) -> ParameterForm {
        ParameterForm {
            n: self.n.clone(),
            sampling_rate: self.sampling_rate.clone(),
            a1: self.a1.clone(),
            a2: self.a2.clone(),
            f1: self.f1.clone(),
            f2: self.f2.clone(),
            phase1: self.phase1.clone(),
            phase2: self.phase2.clone(),
        }
    }

    /// Apply explicit flags on top of a base config
    pub fn apply_overrides(&self, mut config: AnalyzerConfig) -> AnalyzerConfig {
        if let Some(method) = self.method {
            config.method = method.into();
        }
        if let Some(boundary) = self.boundary {
            config.boundary = boundary.into();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_form() {
        let args = Args::parse_from(["harmonic-dft-cli"]);
        assert_eq!(args.parameter_form(), ParameterForm::default());
        assert_eq!(args.apply_overrides(AnalyzerConfig::default()), AnalyzerConfig::default());
    }

    #[test]
    fn test_negative_phase_and_overrides() {
        let args = Args::parse_from([
            "harmonic-dft-cli",
            "-n",
            "256",
            "--phase2",
            "-1.5",
            "--method",
            "kernel-matrix",
            "--boundary",
            "clamp",
        ]);

        assert_eq!(args.parameter_form().n, "256");
        assert_eq!(args.parameter_form().phase2, "-1.5");

        let config = args.apply_overrides(AnalyzerConfig::default());
        assert_eq!(config.method, DftMethod::KernelMatrix);
        assert_eq!(config.boundary, BoundaryPolicy::Clamp);
    }
}
