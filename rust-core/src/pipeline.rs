//! End-to-end generation: synthesis → zero-padded DFT → peaks → result row
//!
//! Stateless; safe to call from any thread.

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::peaks::{extract_peaks, PeakRecord};
use crate::progress::Progress;
use crate::report::{build_plots, PlotSeries, ResultRow};
use crate::signal::{synthesize, SampledSignal, SignalParameters};
use crate::spectrum::{MagnitudeSpectrum, SpectrumAnalyzer};

/// Everything one run produces
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub params: SignalParameters,
    pub signal: SampledSignal,
    pub spectrum: MagnitudeSpectrum,
    pub peaks: [PeakRecord; 2],
    pub row: ResultRow,
    pub plots: Vec<PlotSeries>,
}

/// Run the full pipeline
pub fn generate(params: &SignalParameters, config: &AnalyzerConfig) -> Result<Generation> {
    generate_with_progress(params, config, &Progress::new())
}

/// Run the full pipeline, publishing transform progress
///
/// Fails fast: any stage error aborts the run with no partial result.
pub fn generate_with_progress(
    params: &SignalParameters,
    config: &AnalyzerConfig,
    progress: &Progress,
) -> Result<Generation> {
    let signal = synthesize(params);

    let analyzer = SpectrumAnalyzer::new(params.sampling_rate() as f64, config.method);
    let spectrum = analyzer.analyze_with_progress(&signal.combined, progress)?;

    let peaks = extract_peaks(&spectrum, config.boundary)?;
    let row = ResultRow::assemble(params, &peaks);
    let plots = build_plots(params, &signal, &spectrum);

    log::debug!(
        "Peaks at {} Hz (|X|={:.3}) and {} Hz (|X|={:.3})",
        row.f_primary,
        row.a_primary,
        row.f_secondary,
        row.a_secondary
    );

    Ok(Generation {
        params: *params,
        signal,
        spectrum,
        peaks,
        row,
        plots,
    })
}
