//! Flat single-row result table
//!
//! Column names follow the exported table: M marks the primary (larger)
//! peak, m the secondary one, and -1/+1 the neighbouring bins.

use crate::peaks::PeakRecord;
use crate::signal::SignalParameters;
use serde::Serialize;
use std::fmt;

/// Column names in export order
pub const COLUMNS: [&str; 16] = [
    "N", "FR", "f1", "f2", "fM-1", "fM", "fM+1", "AM-1", "AM", "AM+1", "fm-1", "fm", "fm+1",
    "Am-1", "Am", "Am+1",
];

/// One generation run, flattened
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultRow {
    #[serde(rename = "N")]
    pub n: usize,
    #[serde(rename = "FR")]
    pub sampling_rate: u32,
    pub f1: f64,
    pub f2: f64,

    #[serde(rename = "fM-1")]
    pub f_primary_below: f64,
    #[serde(rename = "fM")]
    pub f_primary: f64,
    #[serde(rename = "fM+1")]
    pub f_primary_above: f64,
    #[serde(rename = "AM-1")]
    pub a_primary_below: f64,
    #[serde(rename = "AM")]
    pub a_primary: f64,
    #[serde(rename = "AM+1")]
    pub a_primary_above: f64,

    #[serde(rename = "fm-1")]
    pub f_secondary_below: f64,
    #[serde(rename = "fm")]
    pub f_secondary: f64,
    #[serde(rename = "fm+1")]
    pub f_secondary_above: f64,
    #[serde(rename = "Am-1")]
    pub a_secondary_below: f64,
    #[serde(rename = "Am")]
    pub a_secondary: f64,
    #[serde(rename = "Am+1")]
    pub a_secondary_above: f64,
}

impl ResultRow {
    /// Combine the run's scalar inputs with both peaks (primary first)
    pub fn assemble(params: &SignalParameters, peaks: &[PeakRecord; 2]) -> Self {
        let [primary, secondary] = peaks;

        Self {
            n: params.n(),
            sampling_rate: params.sampling_rate(),
            f1: params.first().frequency,
            f2: params.second().frequency,

            f_primary_below: primary.below.frequency,
            f_primary: primary.peak.frequency,
            f_primary_above: primary.above.frequency,
            a_primary_below: primary.below.magnitude,
            a_primary: primary.peak.magnitude,
            a_primary_above: primary.above.magnitude,

            f_secondary_below: secondary.below.frequency,
            f_secondary: secondary.peak.frequency,
            f_secondary_above: secondary.above.frequency,
            a_secondary_below: secondary.below.magnitude,
            a_secondary: secondary.peak.magnitude,
            a_secondary_above: secondary.above.magnitude,
        }
    }

    /// All 16 values in column order
    pub fn values(&self) -> [f64; 16] {
        [
            self.n as f64,
            self.sampling_rate as f64,
            self.f1,
            self.f2,
            self.f_primary_below,
            self.f_primary,
            self.f_primary_above,
            self.a_primary_below,
            self.a_primary,
            self.a_primary_above,
            self.f_secondary_below,
            self.f_secondary,
            self.f_secondary_above,
            self.a_secondary_below,
            self.a_secondary,
            self.a_secondary_above,
        ]
    }

    /// CSV header line
    pub fn csv_header() -> String {
        COLUMNS.join(",")
    }

    /// CSV data line (integers stay integral)
    pub fn to_csv_row(&self) -> String {
        let mut fields = vec![self.n.to_string(), self.sampling_rate.to_string()];
        fields.extend(self.values()[2..].iter().map(|v| v.to_string()));
        fields.join(",")
    }

    /// Header plus one data line, newline terminated
    pub fn to_csv(&self) -> String {
        format!("{}\n{}\n", Self::csv_header(), self.to_csv_row())
    }

    /// JSON object keyed by column name
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>6}  {:>14}", "N", self.n)?;
        writeln!(f, "{:>6}  {:>14}", "FR", self.sampling_rate)?;
        for (name, value) in COLUMNS.iter().zip(self.values().iter()).skip(2) {
            writeln!(f, "{:>6}  {:>14.6}", name, value)?;
        }
        Ok(())
    }
}
