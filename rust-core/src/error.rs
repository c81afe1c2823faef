//! Error types shared by every pipeline stage

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Peak extraction failed: {0}")]
    PeakExtraction(String),

    #[error("Generation was cancelled")]
    Cancelled,

    #[error("Background worker failed: {0}")]
    Worker(String),

    #[error("Failed to read analyzer config: {0}")]
    Config(String),
}

impl AnalysisError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Parse one text field of an input form into a number
///
/// Non-numeric text is reported as `InvalidParameter` naming the field.
pub fn parse_scalar<T>(name: &'static str, text: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    text.trim()
        .parse::<T>()
        .map_err(|e| AnalysisError::invalid(name, format!("`{}` is not a number ({})", text, e)))
}
