//! Python bindings for the background generation worker

use pyo3::prelude::*;
use crate::config::AnalyzerConfig;
use crate::worker::GenerationWorker;
use super::generation_bindings::{signal_parameters, PyBoundaryPolicy, PyGeneration};
use super::spectrum_bindings::PyDftMethod;
use super::to_py_err;

/// Background worker exposed to Python
///
/// Lets a UI thread poll progress while the transform runs in Rust
#[pyclass(name = "GenerationWorker", unsendable)]
pub struct PyGenerationWorker {
    worker: GenerationWorker,
}

#[pymethods]
impl PyGenerationWorker {
    #[new]
    fn new() -> Self {
        Self {
            worker: GenerationWorker::new(),
        }
    }

    /// Start a generation run in the background
    #[pyo3(signature = (
        n=5000, sampling_rate=1000, a1=1.0, a2=0.7, f1=5.0, f2=10.0, phase1=0.0, phase2=0.0,
        method=PyDftMethod::Direct, boundary=PyBoundaryPolicy::Fail
    ))]
    #[allow(clippy::too_many_arguments)]
    fn start(
        &mut self,
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
    ) -> PyResult<()> {
        let params = signal_parameters(n, sampling_rate, a1, a2, f1, f2, phase1, phase2)?;
        let config = AnalyzerConfig {
            method: method.into(),
            boundary: boundary.into(),
        };
        self.worker.start(params, config).map_err(to_py_err)
    }

    /// True while the run is still computing
    fn is_running(&self) -> bool {
        self.worker.is_running()
    }

    /// Completed fraction of the transform (0.0 to 1.0)
    fn progress(&self) -> f64 {
        self.worker.progress()
    }

    /// Request cancellation at the next checkpoint
    fn cancel(&self) {
        self.worker.cancel();
    }

    /// Block until the run finishes and return its result
    fn wait(&mut self, py: Python<'_>) -> PyResult<PyGeneration> {
        let worker = &mut self.worker;
        let generation = py.allow_threads(|| worker.wait()).map_err(to_py_err)?;
        Ok(PyGeneration { generation })
    }
}
