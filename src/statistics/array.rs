//! Extraction from dense 0/1 arrays.

use super::SufficientStatistics;
use crate::error::{Result, SimilarityError};
use log::debug;

impl SufficientStatistics {
    /// Builds statistics from two equal-length presence arrays and an
    /// optional universe mask.
    ///
    /// Any non-zero element counts as present. `n` is always `x.len()`,
    /// so positions where both arrays are 0 contribute to `n` even when
    /// no mask is given (unlike [`SufficientStatistics::from_sets`]).
    /// With a mask, `d` counts masked positions where both are 0.
    pub fn from_arrays(x: &[u8], y: &[u8], universe: Option<&[u8]>) -> Result<Self> {
        check_len(x.len(), y.len())?;
        if let Some(u) = universe {
            check_len(x.len(), u.len())?;
        }

        let (mut a, mut b, mut c) = (0usize, 0usize, 0usize);
        for (&xi, &yi) in x.iter().zip(y) {
            match (xi != 0, yi != 0) {
                (true, true) => a += 1,
                (true, false) => b += 1,
                (false, true) => c += 1,
                (false, false) => {}
            }
        }

        let d = universe.map_or(0, |u| {
            x.iter()
                .zip(y)
                .zip(u)
                .filter(|&((&xi, &yi), &ui)| ui != 0 && xi == 0 && yi == 0)
                .count()
        });

        let stats = Self::new(a as f64, b as f64, c as f64, d as f64, x.len() as f64);
        debug!("Extracted array statistics: {}", stats);
        Ok(stats)
    }
}

#[inline]
fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(SimilarityError::LengthMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_mask() {
        let x = [1, 1, 0, 1, 0, 0];
        let y = [1, 0, 1, 1, 0, 0];

        let stats = SufficientStatistics::from_arrays(&x, &y, None).unwrap();
        // Two all-zero positions still count towards n.
        assert_eq!(stats.as_tuple(), (2.0, 1.0, 1.0, 0.0, 6.0));
    }

    #[test]
    fn test_with_mask() {
        let x = [1, 1, 0, 1, 0, 0];
        let y = [1, 0, 1, 1, 0, 0];
        let u = [1, 1, 1, 1, 1, 0];

        let stats = SufficientStatistics::from_arrays(&x, &y, Some(&u[..])).unwrap();
        assert_eq!(stats.as_tuple(), (2.0, 1.0, 1.0, 1.0, 6.0));
    }

    #[test]
    fn test_nonzero_is_present() {
        let x = [3, 0, 7];
        let y = [1, 2, 0];

        let stats = SufficientStatistics::from_arrays(&x, &y, None).unwrap();
        assert_eq!(stats.as_tuple(), (1.0, 1.0, 1.0, 0.0, 3.0));
    }

    #[test]
    fn test_length_mismatch() {
        let result = SufficientStatistics::from_arrays(&[1, 0, 1], &[1, 0], None);
        assert_eq!(
            result,
            Err(SimilarityError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );

        let result = SufficientStatistics::from_arrays(&[1, 0], &[1, 0], Some(&[1u8][..]));
        assert!(matches!(result, Err(SimilarityError::LengthMismatch { .. })));
    }

    #[test]
    fn test_empty_arrays() {
        let stats = SufficientStatistics::from_arrays(&[], &[], None).unwrap();
        assert_eq!(stats.as_tuple(), (0.0, 0.0, 0.0, 0.0, 0.0));
    }
}
