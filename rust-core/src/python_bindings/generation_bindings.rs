//! Python bindings for a full generation run

use pyo3::prelude::*;
use pyo3::types::PyDict;
use numpy::PyArray1;
use crate::config::AnalyzerConfig;
use crate::peaks::BoundaryPolicy;
use crate::pipeline::{generate as run_generation, Generation};
use crate::report::{PlotStyle, COLUMNS};
use crate::signal::{SignalParameters, Tone};
use super::spectrum_bindings::PyDftMethod;
use super::to_py_err;

/// Edge-peak policy exposed to Python
#[pyclass(name = "BoundaryPolicy")]
#[derive(Clone)]
pub enum PyBoundaryPolicy {
    Fail,
    Clamp,
}

impl From<PyBoundaryPolicy> for BoundaryPolicy {
    fn from(py_policy: PyBoundaryPolicy) -> Self {
        match py_policy {
            PyBoundaryPolicy::Fail => BoundaryPolicy::Fail,
            PyBoundaryPolicy::Clamp => BoundaryPolicy::Clamp,
        }
    }
}

/// Result of one generation run
#[pyclass(name = "Generation")]
pub struct PyGeneration {
    pub(crate) generation: Generation,
}

#[pymethods]
impl PyGeneration {
    /// Result row as a dict keyed by column name
    fn row<'py>(&self, py: Python<'py>) -> PyResult<&'py PyDict> {
        let row = &self.generation.row;
        let dict = PyDict::new(py);

        dict.set_item(COLUMNS[0], row.n)?;
        dict.set_item(COLUMNS[1], row.sampling_rate)?;
        for (name, value) in COLUMNS.iter().zip(row.values().iter()).skip(2) {
            dict.set_item(*name, *value)?;
        }

        Ok(dict)
    }

    /// Column names in export order
    #[staticmethod]
    fn columns() -> Vec<&'static str> {
        COLUMNS.to_vec()
    }

    /// Result row as CSV text (header plus one line)
    fn to_csv(&self) -> String {
        self.generation.row.to_csv()
    }

    /// Plot series as dicts, in fixed order
    ///
    /// Keys: label, title, legend (or None), x_label, y_label, style
    /// ("line" or "stem"), x, y, x_range (or None).
    fn plots<'py>(&self, py: Python<'py>) -> PyResult<Vec<&'py PyDict>> {
        self.generation
            .plots
            .iter()
            .map(|plot| {
                let dict = PyDict::new(py);
                dict.set_item("label", plot.label)?;
                dict.set_item("title", &plot.title)?;
                dict.set_item("legend", plot.legend.as_deref())?;
                dict.set_item("x_label", plot.x_label)?;
                dict.set_item("y_label", plot.y_label)?;
                dict.set_item(
                    "style",
                    match plot.style {
                        PlotStyle::Line => "line",
                        PlotStyle::Stem => "stem",
                    },
                )?;
                dict.set_item("x", PyArray1::from_slice(py, &plot.x))?;
                dict.set_item("y", PyArray1::from_slice(py, &plot.y))?;
                dict.set_item("x_range", plot.x_range)?;
                Ok(dict)
            })
            .collect()
    }

    /// Visible x range of the spectrum plot, if any
    fn spectrum_range(&self) -> Option<(f64, f64)> {
        self.generation.plots.last().and_then(|plot| plot.x_range)
    }

    /// Bin indices of the primary and secondary peaks
    fn peak_indices(&self) -> (usize, usize) {
        let [primary, secondary] = &self.generation.peaks;
        (primary.peak.index, secondary.peak.index)
    }

    /// Full magnitude spectrum as (frequencies, magnitudes)
    fn spectrum<'py>(&self, py: Python<'py>) -> (&'py PyArray1<f64>, &'py PyArray1<f64>) {
        let spectrum = &self.generation.spectrum;
        (
            PyArray1::from_slice(py, &spectrum.frequencies),
            PyArray1::from_slice(py, &spectrum.magnitudes),
        )
    }
}

/// Build validated parameters from the nine Python scalars
#[allow(clippy::too_many_arguments)]
pub(crate) fn signal_parameters(
    n: i64,
    sampling_rate: i64,
    a1: f64,
    a2: f64,
    f1: f64,
    f2: f64,
    phase1: f64,
    phase2: f64,
) -> PyResult<SignalParameters> {
    SignalParameters::new(
        n,
        sampling_rate,
        Tone::new(a1, f1, phase1),
        Tone::new(a2, f2, phase2),
    )
    .map_err(to_py_err)
}

/// Synthesize, transform and extract peaks in one call
///
/// The GIL is released while the transform runs.
#[pyfunction]
#[pyo3(signature = (
    n=5000, sampling_rate=1000, a1=1.0, a2=0.7, f1=5.0, f2=10.0, phase1=0.0, phase2=0.0,
    method=PyDftMethod::Direct, boundary=PyBoundaryPolicy::Fail
))]
#[allow(clippy::too_many_arguments)]
pub fn generate(
    py: Python<'_>,
    n: i64,
    sampling_rate: i64,
    a1: f64,
    a2: f64,
    f1: f64,
    f2: f64,
    phase1: f64,
    phase2: f64,
    method: PyDftMethod,
    boundary: PyBoundaryPolicy,
) -> PyResult<PyGeneration> {
    let params = signal_parameters(n, sampling_rate, a1, a2, f1, f2, phase1, phase2)?;
    let config = AnalyzerConfig {
        method: method.into(),
        boundary: boundary.into(),
    };

    let generation = py
        .allow_threads(|| run_generation(&params, &config))
        .map_err(to_py_err)?;

    Ok(PyGeneration { generation })
}
