//! Two-peak extraction from the first half of a magnitude spectrum

use crate::error::{AnalysisError, Result};
use crate::spectrum::MagnitudeSpectrum;
use serde::{Deserialize, Serialize};

/// What to do when a peak sits on the edge of the half-spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryPolicy {
    /// Abort with `PeakExtraction`
    #[default]
    Fail,

    /// Clamp the missing neighbour onto the peak bin itself
    Clamp,
}

/// Frequency and magnitude of one spectrum bin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinSample {
    pub index: usize,
    pub frequency: f64,
    pub magnitude: f64,
}

/// A detected peak with its left and right neighbour bins
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeakRecord {
    /// Bin k-1
    pub below: BinSample,

    /// Bin k
    pub peak: BinSample,

    /// Bin k+1
    pub above: BinSample,

    /// True when a neighbour was clamped onto the peak bin
    pub clamped: bool,
}

/// Indices of the two largest values, larger first
///
/// Equal values keep the lower index first.
pub fn select_top_two(values: &[f64]) -> Result<(usize, usize)> {
    if values.len() < 2 {
        return Err(AnalysisError::PeakExtraction(format!(
            "need at least 2 candidate bins, found {}",
            values.len()
        )));
    }

    let (mut best, mut second) = if values[1] > values[0] { (1, 0) } else { (0, 1) };

    for (k, &value) in values.iter().enumerate().skip(2) {
        if value > values[best] {
            second = best;
            best = k;
        } else if value > values[second] {
            second = k;
        }
    }

    Ok((best, second))
}

/// Find the two dominant peaks among bins 0..N-1 of a 2N-bin spectrum
pub fn extract_peaks(spectrum: &MagnitudeSpectrum, policy: BoundaryPolicy) -> Result<[PeakRecord; 2]> {
    let half = spectrum.first_half();
    let (primary, secondary) = select_top_two(half)?;

    log::trace!(
        "Selected peak bins {} ({:.4}) and {} ({:.4})",
        primary,
        half[primary],
        secondary,
        half[secondary]
    );

    Ok([
        peak_record(spectrum, primary, policy)?,
        peak_record(spectrum, secondary, policy)?,
    ])
}

fn peak_record(spectrum: &MagnitudeSpectrum, k: usize, policy: BoundaryPolicy) -> Result<PeakRecord> {
    let last = spectrum.half_len() - 1;
    let on_edge = k == 0 || k == last;

    if on_edge && policy == BoundaryPolicy::Fail {
        return Err(AnalysisError::PeakExtraction(format!(
            "peak at bin {} ({} Hz) has no neighbour inside bins 0..={}",
            k, spectrum.frequencies[k], last
        )));
    }
    if on_edge {
        log::warn!("Peak at edge bin {}; clamping its missing neighbour", k);
    }

    let sample = |index: usize| BinSample {
        index,
        frequency: spectrum.frequencies[index],
        magnitude: spectrum.magnitudes[index],
    };

    Ok(PeakRecord {
        below: sample(k.saturating_sub(1)),
        peak: sample(k),
        above: sample((k + 1).min(last)),
        clamped: on_edge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2N-bin spectrum with 1 Hz spacing; second half mirrors nothing in particular
    fn spectrum(first_half: &[f64]) -> MagnitudeSpectrum {
        let mut magnitudes = first_half.to_vec();
        magnitudes.extend(std::iter::repeat(100.0).take(first_half.len()));
        MagnitudeSpectrum {
            frequencies: (0..magnitudes.len()).map(|k| k as f64).collect(),
            magnitudes,
        }
    }

    #[test]
    fn test_select_top_two_ordering() {
        assert_eq!(select_top_two(&[1.0, 5.0, 2.0, 9.0, 3.0]).unwrap(), (3, 1));
    }

    #[test]
    fn test_ties_prefer_lower_index() {
        assert_eq!(select_top_two(&[0.0, 4.0, 4.0, 4.0]).unwrap(), (1, 2));
        assert_eq!(select_top_two(&[7.0, 7.0]).unwrap(), (0, 1));
        assert_eq!(select_top_two(&[1.0, 3.0, 2.0, 3.0]).unwrap(), (1, 3));
    }

    #[test]
    fn test_too_few_candidates() {
        assert!(matches!(
            select_top_two(&[1.0]),
            Err(AnalysisError::PeakExtraction(_))
        ));
    }

    #[test]
    fn test_second_half_is_ignored() {
        let peaks = extract_peaks(&spectrum(&[0.0, 3.0, 1.0, 2.0, 0.5]), BoundaryPolicy::Fail).unwrap();

        assert_eq!(peaks[0].peak.index, 1);
        assert_eq!(peaks[1].peak.index, 3);
        assert!(peaks[0].peak.magnitude >= peaks[1].peak.magnitude);
    }

    #[test]
    fn test_neighbours() {
        let peaks = extract_peaks(&spectrum(&[0.0, 1.0, 8.0, 2.0, 6.0, 1.5]), BoundaryPolicy::Fail).unwrap();
        let primary = peaks[0];

        assert_eq!(primary.below.index, 1);
        assert_eq!(primary.peak.index, 2);
        assert_eq!(primary.above.index, 3);
        assert_eq!(primary.below.magnitude, 1.0);
        assert_eq!(primary.above.frequency, 3.0);
        assert!(!primary.clamped);
        assert_eq!(peaks[1].peak.index, 4);
    }

    #[test]
    fn test_edge_peak_fails_by_default() {
        let err = extract_peaks(&spectrum(&[9.0, 1.0, 5.0, 1.0]), BoundaryPolicy::Fail).unwrap_err();
        assert!(matches!(err, AnalysisError::PeakExtraction(_)));

        let err = extract_peaks(&spectrum(&[1.0, 5.0, 1.0, 9.0]), BoundaryPolicy::Fail).unwrap_err();
        assert!(matches!(err, AnalysisError::PeakExtraction(_)));
    }

    #[test]
    fn test_edge_peak_clamped() {
        let peaks = extract_peaks(&spectrum(&[9.0, 1.0, 5.0, 1.0, 6.0]), BoundaryPolicy::Clamp).unwrap();

        let low = peaks[0];
        assert!(low.clamped);
        assert_eq!(low.below.index, 0);
        assert_eq!(low.below, low.peak);
        assert_eq!(low.above.index, 1);

        let high = peaks[1];
        assert!(high.clamped);
        assert_eq!(high.peak.index, 4);
        assert_eq!(high.above, high.peak);
    }
}
