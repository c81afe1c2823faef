//! Analyzer configuration
//!
//! Chooses how the transform is evaluated and how peaks at the edge of the
//! half-spectrum are treated.

use crate::error::{AnalysisError, Result};
use crate::peaks::BoundaryPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Evaluation strategy for the O(N²) transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DftMethod {
    /// Matrix-free double loop over a twiddle table
    #[default]
    Direct,

    /// Dense (2N × 2N) kernel matrix times the padded vector.
    /// Limited to small N by memory.
    KernelMatrix,
}

/// Pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// DFT evaluation strategy
    pub method: DftMethod,

    /// Treatment of a peak whose neighbour falls outside the half-spectrum
    pub boundary: BoundaryPolicy,
}

impl AnalyzerConfig {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| AnalysisError::Config(e.to_string()))
    }

    /// Load a JSON config from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }
}
