//! Dominant peak detection

pub mod extract;

pub use extract::{extract_peaks, select_top_two, BinSample, BoundaryPolicy, PeakRecord};
