//! Zero-padded spectral analysis with a direct DFT

pub mod analysis;
pub mod dft;
pub mod padding;

pub use analysis::{MagnitudeSpectrum, SpectrumAnalyzer};
pub use dft::DftEngine;
pub use padding::zero_pad;
