//! Background generation worker
//!
//! Runs the whole pipeline on a dedicated thread so an interactive front end
//! stays responsive. The caller polls progress, may cancel, and collects the
//! result or failure once the thread is done.

use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::pipeline::{generate_with_progress, Generation};
use crate::progress::Progress;
use crate::signal::SignalParameters;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// Single background run of the generation pipeline
pub struct GenerationWorker {
    /// Progress of the current run (fresh per run)
    progress: Arc<Progress>,

    /// Outcome slot, filled once by the worker thread
    outcome: Arc<Mutex<Option<Result<Generation>>>>,

    /// Set while the worker thread is computing
    running: Arc<AtomicBool>,

    /// Worker thread handle
    handle: Option<JoinHandle<()>>,
}

impl GenerationWorker {
    pub fn new() -> Self {
        Self {
            progress: Arc::new(Progress::new()),
            outcome: Arc::new(Mutex::new(None)),
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Start a run in the background
    ///
    /// Fails if a previous run has not been collected yet.
    pub fn start(&mut self, params: SignalParameters, config: AnalyzerConfig) -> Result<()> {
        log::debug!("Starting background generation (N={})", params.n());
        self.spawn(move |progress| generate_with_progress(&params, &config, progress))
    }

    fn spawn<F>(&mut self, job: F) -> Result<()>
    where
        F: FnOnce(&Progress) -> Result<Generation> + Send + 'static,
    {
        if self.handle.is_some() {
            return Err(AnalysisError::Worker(
                "a generation is already in progress".to_string(),
            ));
        }

        self.progress = Arc::new(Progress::new());
        self.running.store(true, Ordering::SeqCst);

        let progress = Arc::clone(&self.progress);
        let outcome = Arc::clone(&self.outcome);
        let running = Arc::clone(&self.running);

        let handle = std::thread::Builder::new()
            .name("generation".to_string())
            .spawn(move || {
                // Cleared on unwind too, so a panicking run still reads as finished
                let _running = RunningGuard(running);

                let result = job(&progress);
                if let Err(e) = &result {
                    log::debug!("Background generation failed: {}", e);
                }

                if let Ok(mut slot) = outcome.lock() {
                    *slot = Some(result);
                }
            })
            .map_err(|e| {
                self.running.store(false, Ordering::SeqCst);
                AnalysisError::Worker(format!("failed to spawn worker thread: {}", e))
            })?;

        self.handle = Some(handle);
        Ok(())
    }

    /// True while the background thread is still computing
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Fraction of transform bins completed in the current run
    pub fn progress(&self) -> f64 {
        self.progress.fraction()
    }

    /// Ask the current run to stop at its next checkpoint
    pub fn cancel(&self) {
        self.progress.cancel();
    }

    /// Collect the outcome if the run has finished, without blocking
    pub fn try_take(&mut self) -> Option<Result<Generation>> {
        if self.handle.is_none() || self.is_running() {
            return None;
        }
        Some(self.wait())
    }

    /// Block until the current run finishes and return its outcome
    pub fn wait(&mut self) -> Result<Generation> {
        let handle = self
            .handle
            .take()
            .ok_or_else(|| AnalysisError::Worker("no generation was started".to_string()))?;

        handle
            .join()
            .map_err(|_| AnalysisError::Worker("worker thread panicked".to_string()))?;

        let mut slot = self
            .outcome
            .lock()
            .map_err(|_| AnalysisError::Worker("result slot poisoned".to_string()))?;

        slot.take().unwrap_or_else(|| {
            Err(AnalysisError::Worker(
                "worker finished without reporting".to_string(),
            ))
        })
    }
}

/// Clears the running flag when the worker thread exits
struct RunningGuard(Arc<AtomicBool>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Default for GenerationWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for GenerationWorker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.progress.cancel();
            let _ = handle.join();
        }
    }
}
