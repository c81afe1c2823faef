//! Result-table export (CSV and JSON)

use anyhow::{Context, Result};
use std::path::Path;

use harmonic_dft::ResultRow;

/// Write the header and the single result line
pub fn write_csv(row: &ResultRow, path: &Path) -> Result<()> {
    std::fs::write(path, row.to_csv())
        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
    log::info!("Saved CSV to {}", path.display());
    Ok(())
}

/// Write the row as a JSON object keyed by column name
pub fn write_json(row: &ResultRow, path: &Path) -> Result<()> {
    let json = row.to_json().context("Failed to serialize result row")?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    log::info!("Saved JSON to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonic_dft::{generate, AnalyzerConfig, SignalParameters, Tone};

    fn row() -> ResultRow {
        let params = SignalParameters::new(
            100,
            1000,
            Tone::new(1.0, 50.0, 0.0),
            Tone::new(0.8, 120.0, 0.0),
        )
        .unwrap();
        generate(&params, &AnalyzerConfig::default()).unwrap().row
    }

    #[test]
    fn test_csv_and_json_files() {
        let dir = std::env::temp_dir().join(format!("harmonic-dft-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let row = row();

        let csv_path = dir.join("peaks.csv");
        write_csv(&row, &csv_path).unwrap();
        let csv = std::fs::read_to_string(&csv_path).unwrap();
        assert!(csv.starts_with("N,FR,f1,f2,"));
        assert_eq!(csv.lines().count(), 2);

        let json_path = dir.join("peaks.json");
        write_json(&row, &json_path).unwrap();
        let json = std::fs::read_to_string(&json_path).unwrap();
        assert!(json.contains("\"fM+1\""));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let path = Path::new("/nonexistent-dir/peaks.csv");
        assert!(write_csv(&row(), path).is_err());
    }
}
