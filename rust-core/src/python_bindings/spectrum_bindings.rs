//! Python bindings for spectrum analysis

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::config::DftMethod;
use crate::spectrum::SpectrumAnalyzer;
use super::to_py_err;

/// DFT evaluation strategy exposed to Python
#[pyclass(name = "DftMethod")]
#[derive(Clone)]
pub enum PyDftMethod {
    Direct,
    KernelMatrix,
}

impl From<PyDftMethod> for DftMethod {
    fn from(py_method: PyDftMethod) -> Self {
        match py_method {
            PyDftMethod::Direct => DftMethod::Direct,
            PyDftMethod::KernelMatrix => DftMethod::KernelMatrix,
        }
    }
}

/// Zero-padded magnitude spectrum of an arbitrary real signal
///
/// Args:
///     signal: Input signal as numpy array (N samples)
///     sampling_rate: Sample rate in Hz
///     method: DFT evaluation strategy
///
/// Returns:
///     Tuple (frequencies, magnitudes), each with 2N entries
#[pyfunction]
#[pyo3(signature = (signal, sampling_rate, method=PyDftMethod::Direct))]
pub fn magnitude_spectrum<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    sampling_rate: f64,
    method: PyDftMethod,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    if !(sampling_rate.is_finite() && sampling_rate > 0.0) {
        return Err(PyValueError::new_err("sampling_rate must be a positive number"));
    }

    let samples = signal
        .as_slice()
        .map_err(|e| PyValueError::new_err(e.to_string()))?
        .to_vec();
    let analyzer = SpectrumAnalyzer::new(sampling_rate, method.into());

    let spectrum = py
        .allow_threads(|| analyzer.analyze(&samples))
        .map_err(to_py_err)?;

    Ok((
        PyArray1::from_vec(py, spectrum.frequencies),
        PyArray1::from_vec(py, spectrum.magnitudes),
    ))
}
