//! PyO3 bindings for Python integration

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::AnalysisError;

mod generation_bindings;
mod spectrum_bindings;
mod worker_bindings;

/// Map core failures onto Python exceptions
pub(crate) fn to_py_err(err: AnalysisError) -> PyErr {
    match err {
        AnalysisError::Cancelled | AnalysisError::Worker(_) => PyRuntimeError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Python module definition
#[pymodule]
fn harmonic_dft(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<generation_bindings::PyGeneration>()?;
    m.add_class::<worker_bindings::PyGenerationWorker>()?;

    // Config enums
    m.add_class::<spectrum_bindings::PyDftMethod>()?;
    m.add_class::<generation_bindings::PyBoundaryPolicy>()?;

    m.add_function(wrap_pyfunction!(generation_bindings::generate, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::magnitude_spectrum, m)?)?;

    m.add("COLUMNS", crate::report::COLUMNS.to_vec())?;
    m.add("PLOT_LABELS", crate::report::PLOT_LABELS.to_vec())?;

    Ok(())
}
