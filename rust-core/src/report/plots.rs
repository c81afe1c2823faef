//! Plot series handed to rendering front ends
//!
//! Four series in fixed order: both components and their sum against time,
//! then the first-half magnitude spectrum against frequency.

use crate::signal::{SampledSignal, SignalParameters};
use crate::spectrum::MagnitudeSpectrum;

/// Labels of the four plots, in output order
pub const PLOT_LABELS: [&str; 4] = ["X1 Signal", "X2 Signal", "Combined Signal", "DFT Spectrum"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotStyle {
    /// Connected polyline
    Line,
    /// Vertical stems from zero
    Stem,
}

/// Data and decoration of one plot
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    /// One of `PLOT_LABELS`
    pub label: &'static str,
    pub title: String,
    pub legend: Option<String>,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub style: PlotStyle,
    pub x: Vec<f64>,
    pub y: Vec<f64>,

    /// Visible x interval; `None` shows all points
    pub x_range: Option<(f64, f64)>,
}

impl PlotSeries {
    /// Points whose x lies inside the visible range
    pub fn visible_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let range = self.x_range;
        self.x
            .iter()
            .copied()
            .zip(self.y.iter().copied())
            .filter(move |&(x, _)| match range {
                Some((lo, hi)) => x >= lo && x <= hi,
                None => true,
            })
    }

    /// One-line description: title, axes and legend if any
    ///
    /// e.g. `Harmonic Signal X1(t) [Time (s) vs Amplitude] legend: X1(t) - f1=5Hz, a1=1`
    pub fn caption(&self) -> String {
        let mut caption = format!("{} [{} vs {}]", self.title, self.x_label, self.y_label);
        if let Some(legend) = &self.legend {
            caption.push_str(" legend: ");
            caption.push_str(legend);
        }
        caption
    }

    /// File-name friendly form of the label, e.g. `dft_spectrum`
    pub fn slug(&self) -> String {
        self.label.to_lowercase().replace(' ', "_")
    }
}

/// Build the four plot series for one run
pub fn build_plots(
    params: &SignalParameters,
    signal: &SampledSignal,
    spectrum: &MagnitudeSpectrum,
) -> Vec<PlotSeries> {
    let (first, second) = (params.first(), params.second());
    let time_plot = |label, title: &str, legend: String, y: &[f64]| PlotSeries {
        label,
        title: title.to_string(),
        legend: Some(legend),
        x_label: "Time (s)",
        y_label: "Amplitude",
        style: PlotStyle::Line,
        x: signal.time.clone(),
        y: y.to_vec(),
        x_range: None,
    };

    let half = spectrum.half_len();
    let max_freq = 2.0 * params.max_frequency();

    vec![
        time_plot(
            PLOT_LABELS[0],
            "Harmonic Signal X1(t)",
            format!("X1(t) - f1={}Hz, a1={}", first.frequency, first.amplitude),
            &signal.x1,
        ),
        time_plot(
            PLOT_LABELS[1],
            "Harmonic Signal X2(t)",
            format!("X2(t) - f2={}Hz, a2={}", second.frequency, second.amplitude),
            &signal.x2,
        ),
        time_plot(
            PLOT_LABELS[2],
            "Combined Signal X(t) = X1(t) + X2(t)",
            "Combined Signal X(t)".to_string(),
            &signal.combined,
        ),
        PlotSeries {
            label: PLOT_LABELS[3],
            title: "DFT Magnitude Spectrum (Zero-Padded)".to_string(),
            legend: None,
            x_label: "Frequency (Hz)",
            y_label: "|X(freq)|",
            style: PlotStyle::Stem,
            x: spectrum.frequencies[..half].to_vec(),
            y: spectrum.magnitudes[..half].to_vec(),
            // Both tones at or below 0 Hz leave no meaningful window
            x_range: (max_freq > 0.0).then_some((0.0, max_freq)),
        },
    ]
}
