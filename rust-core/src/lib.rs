//! Harmonic DFT - Two-Tone Spectral Peak Workbench
//! 
//! Synthesizes a two-tone signal, transforms it with a zero-padded direct DFT
//! and reports the two dominant peaks with their neighbouring bins.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod config;
pub mod error;
pub mod peaks;
pub mod pipeline;
pub mod progress;
pub mod report;
pub mod signal;
pub mod spectrum;
pub mod worker;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use config::{AnalyzerConfig, DftMethod};
pub use error::{AnalysisError, Result};
pub use peaks::{BoundaryPolicy, PeakRecord};
pub use pipeline::{generate, Generation};
pub use report::{PlotSeries, ResultRow};
pub use signal::{SignalParameters, Tone};
pub use spectrum::SpectrumAnalyzer;
pub use worker::GenerationWorker;
