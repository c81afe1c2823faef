//! Zero-padding ahead of the transform
//!
//! Appending N zeros to an N-sample signal halves the bin spacing of the
//! spectrum without adding information.

/// Append `signal.len()` zeros, yielding a buffer of twice the length
pub fn zero_pad(signal: &[f64]) -> Vec<f64> {
    pad_to(signal, 2 * signal.len())
}

/// Copy `signal` into a zeroed buffer of `length` samples
///
/// Samples beyond `length` are dropped.
pub fn pad_to(signal: &[f64], length: usize) -> Vec<f64> {
    let mut padded = vec![0.0; length];
    let copy_len = signal.len().min(length);
    padded[..copy_len].copy_from_slice(&signal[..copy_len]);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_pad_doubles_length() {
        let padded = zero_pad(&[1.0, -2.0, 3.0]);
        assert_eq!(padded, vec![1.0, -2.0, 3.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_pad_to_truncates() {
        assert_eq!(pad_to(&[1.0, 2.0, 3.0], 2), vec![1.0, 2.0]);
    }
}
