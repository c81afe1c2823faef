//! Direct discrete Fourier transform
//!
//! O(size²) forward transform `X[k] = Σ x[n]·exp(-2πi·k·n/size)` with no
//! normalisation. Two evaluation strategies give the same result: a
//! matrix-free double loop and an explicit dense kernel matrix.

use crate::error::{AnalysisError, Result};
use crate::progress::Progress;
use ndarray::{Array1, Array2};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Largest transform size accepted by the kernel-matrix method (kernel of at most 256 MiB)
pub const MAX_KERNEL_SIZE: usize = 4096;

/// Direct DFT engine for a fixed transform size
pub struct DftEngine {
    /// Transform size (number of output bins)
    size: usize,

    /// Twiddle table: exp(-2πi·m/size) for m = 0..size-1
    twiddles: Vec<Complex64>,
}

impl DftEngine {
    /// Create new DFT engine
    ///
    /// # Arguments
    /// * `size` - Transform size (input is zero-padded or truncated to this)
    pub fn new(size: usize) -> Self {
        let twiddles = (0..size)
            .map(|m| {
                let angle = -2.0 * PI * m as f64 / size as f64;
                Complex64::new(angle.cos(), angle.sin())
            })
            .collect();

        Self { size, twiddles }
    }

    /// Transform size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Compute the full complex spectrum with the matrix-free double loop
    pub fn transform(&self, signal: &[f64]) -> Vec<Complex64> {
        let input = self.active_input(signal);
        (0..self.size).map(|k| self.bin(input, k)).collect()
    }

    /// Matrix-free transform reporting one step per output bin
    ///
    /// Returns `Cancelled` as soon as the flag is observed between bins.
    pub fn transform_with_progress(
        &self,
        signal: &[f64],
        progress: &Progress,
    ) -> Result<Vec<Complex64>> {
        let input = self.active_input(signal);

        progress.begin(self.size);
        let mut spectrum = Vec::with_capacity(self.size);

        for k in 0..self.size {
            if progress.is_cancelled() {
                return Err(AnalysisError::Cancelled);
            }
            spectrum.push(self.bin(input, k));
            progress.advance();
        }

        Ok(spectrum)
    }

    /// Truncate to the transform size and drop trailing zeros
    ///
    /// Zero samples (the padding) contribute nothing to any bin.
    fn active_input<'a>(&self, signal: &'a [f64]) -> &'a [f64] {
        let input = &signal[..signal.len().min(self.size)];
        let active = input.iter().rposition(|&v| v != 0.0).map_or(0, |p| p + 1);
        &input[..active]
    }

    /// Single output bin X[k]
    #[inline]
    fn bin(&self, input: &[f64], k: usize) -> Complex64 {
        // Twiddle index (k·n) mod size, advanced incrementally
        let mut idx = 0usize;
        let mut acc = Complex64::new(0.0, 0.0);
        for &x in input {
            acc += self.twiddles[idx] * x;
            idx += k;
            if idx >= self.size {
                idx -= self.size;
            }
        }
        acc
    }

    /// Dense (size × size) kernel matrix W[k, n] = exp(-2πi·k·n/size)
    pub fn kernel_matrix(&self) -> Array2<Complex64> {
        let size = self.size;
        Array2::from_shape_fn((size, size), |(k, n)| self.twiddles[(k * n) % size])
    }

    /// Compute the spectrum as a single dense product W · x
    pub fn transform_matrix(&self, signal: &[f64]) -> Result<Vec<Complex64>> {
        let (kernel, padded) = self.dense_operands(signal)?;
        Ok(kernel.dot(&padded).to_vec())
    }

    /// Dense transform evaluated one kernel row per output bin
    ///
    /// Same result as `transform_matrix`, with the cancel flag checked before
    /// the kernel is built and between rows.
    pub fn transform_matrix_with_progress(
        &self,
        signal: &[f64],
        progress: &Progress,
    ) -> Result<Vec<Complex64>> {
        if progress.is_cancelled() {
            return Err(AnalysisError::Cancelled);
        }
        let (kernel, padded) = self.dense_operands(signal)?;

        progress.begin(self.size);
        let mut spectrum = Vec::with_capacity(self.size);

        for row in kernel.rows() {
            if progress.is_cancelled() {
                return Err(AnalysisError::Cancelled);
            }
            spectrum.push(row.dot(&padded));
            progress.advance();
        }

        Ok(spectrum)
    }

    /// Kernel matrix and complex input vector, padded to the transform size
    fn dense_operands(&self, signal: &[f64]) -> Result<(Array2<Complex64>, Array1<Complex64>)> {
        if self.size > MAX_KERNEL_SIZE {
            return Err(AnalysisError::invalid(
                "N",
                format!(
                    "kernel matrix of size {} exceeds the limit of {}; use the direct method",
                    self.size, MAX_KERNEL_SIZE
                ),
            ));
        }

        let mut padded = Array1::<Complex64>::zeros(self.size);
        for (slot, &x) in padded.iter_mut().zip(signal.iter()) {
            *slot = Complex64::new(x, 0.0);
        }

        Ok((self.kernel_matrix(), padded))
    }
}
