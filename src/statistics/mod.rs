//! Sufficient statistics of a pair of binary observations.
//!
//! Every coefficient in this crate is a function of the 2x2 contingency
//! table of two binary vectors plus the size of the universe they are
//! drawn from:
//!
//! |          | y = 1 | y = 0 |
//! |----------|-------|-------|
//! | **x = 1**| `a`   | `b`   |
//! | **x = 0**| `c`   | `d`   |
//!
//! The table can be extracted from a pair of sets, from a pair of dense
//! 0/1 arrays, or injected directly.

mod array;
mod set;

use crate::error::{Result, SimilarityError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// The recognized shapes of binary input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Sets of hashable elements.
    Set,
    /// Fixed-length 0/1 arrays.
    Array,
}

impl InputKind {
    /// Returns the canonical name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Set => "set",
            InputKind::Array => "array",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "set" => Ok(InputKind::Set),
            "array" => Ok(InputKind::Array),
            other => Err(SimilarityError::UnsupportedInputKind(other.to_string())),
        }
    }
}

/// One binary observation tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation<T: Hash + Eq> {
    /// Set of present elements.
    Set(HashSet<T>),
    /// Dense presence flags; any non-zero value counts as present.
    Array(Vec<u8>),
}

impl<T: Hash + Eq> Observation<T> {
    /// Creates a set observation.
    pub fn set<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Observation::Set(elements.into_iter().collect())
    }

    /// Returns the kind of this observation.
    pub fn kind(&self) -> InputKind {
        match self {
            Observation::Set(_) => InputKind::Set,
            Observation::Array(_) => InputKind::Array,
        }
    }
}

impl Observation<u64> {
    /// Creates an array observation from 0/1 flags.
    pub fn array(flags: Vec<u8>) -> Self {
        Observation::Array(flags)
    }
}

impl<T: Hash + Eq + Copy + Into<u64>> Observation<T> {
    /// Interprets `values` according to a kind name.
    ///
    /// `"set"` collects the values as set elements, `"array"` treats each
    /// value as a presence flag. Any other name is rejected.
    pub fn from_values(kind: &str, values: &[T]) -> Result<Self> {
        match kind.parse::<InputKind>()? {
            InputKind::Set => Ok(Observation::Set(values.iter().copied().collect())),
            InputKind::Array => Ok(Observation::Array(
                values.iter().map(|&v| u8::from(Into::<u64>::into(v) != 0)).collect(),
            )),
        }
    }
}

/// The contingency counts `(a, b, c, d)` and universe size `n`.
///
/// Immutable once built: a new pair of inputs needs a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SufficientStatistics {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    n: f64,
}

impl SufficientStatistics {
    /// Injects pre-computed counts verbatim.
    ///
    /// No consistency check is made; negative or inconsistent counts are
    /// accepted and flow into the formulas as given.
    pub fn new(a: f64, b: f64, c: f64, d: f64, n: f64) -> Self {
        Self { a, b, c, d, n }
    }

    /// Builds statistics from a pair of observations of the same kind.
    ///
    /// The universe, when given, must have the same kind as `x` and `y`.
    pub fn extract<T: Hash + Eq>(
        x: &Observation<T>,
        y: &Observation<T>,
        universe: Option<&Observation<T>>,
    ) -> Result<Self> {
        let mismatch = |other: InputKind| {
            SimilarityError::UnsupportedInputKind(format!(
                "cannot combine {} input with {} input",
                x.kind(),
                other
            ))
        };

        match (x, y) {
            (Observation::Set(x), Observation::Set(y)) => {
                let universe = match universe {
                    None => None,
                    Some(Observation::Set(u)) => Some(u),
                    Some(other) => return Err(mismatch(other.kind())),
                };
                Ok(Self::from_sets(x, y, universe))
            }
            (Observation::Array(x), Observation::Array(y)) => {
                let universe = match universe {
                    None => None,
                    Some(Observation::Array(u)) => Some(u.as_slice()),
                    Some(other) => return Err(mismatch(other.kind())),
                };
                Self::from_arrays(x, y, universe)
            }
            (_, other) => Err(mismatch(other.kind())),
        }
    }

    /// Count of elements present in both observations.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Count of elements present in `x` only.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Count of elements present in `y` only.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Count of universe elements present in neither observation.
    #[inline]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Universe size.
    #[inline]
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Returns `(a, b, c, d, n)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (self.a, self.b, self.c, self.d, self.n)
    }

    /// `a + b`: elements present in `x`.
    #[inline]
    pub(crate) fn x_total(&self) -> f64 {
        self.a + self.b
    }

    /// `a + c`: elements present in `y`.
    #[inline]
    pub(crate) fn y_total(&self) -> f64 {
        self.a + self.c
    }

    /// Product of the four marginals `(a+b)(a+c)(c+d)(b+d)`.
    #[inline]
    pub(crate) fn marginal_product(&self) -> f64 {
        (self.a + self.b) * (self.a + self.c) * (self.c + self.d) * (self.b + self.d)
    }
}

impl From<(f64, f64, f64, f64, f64)> for SufficientStatistics {
    fn from((a, b, c, d, n): (f64, f64, f64, f64, f64)) -> Self {
        Self::new(a, b, c, d, n)
    }
}

impl fmt::Display for SufficientStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a={} b={} c={} d={} n={}",
            self.a, self.b, self.c, self.d, self.n
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_kind_parse() {
        assert_eq!("set".parse::<InputKind>().unwrap(), InputKind::Set);
        assert_eq!("array".parse::<InputKind>().unwrap(), InputKind::Array);
        assert!(matches!(
            "matrix".parse::<InputKind>(),
            Err(SimilarityError::UnsupportedInputKind(k)) if k == "matrix"
        ));
    }

    #[test]
    fn test_direct_injection_is_verbatim() {
        let stats = SufficientStatistics::new(-1.0, 2.5, 0.0, 3.0, 100.0);
        assert_eq!(stats.as_tuple(), (-1.0, 2.5, 0.0, 3.0, 100.0));
    }

    #[test]
    fn test_from_tuple() {
        let stats: SufficientStatistics = (2.0, 1.0, 2.0, 2.0, 7.0).into();
        assert_eq!(stats, SufficientStatistics::new(2.0, 1.0, 2.0, 2.0, 7.0));
    }

    #[test]
    fn test_extract_sets() {
        let x = Observation::set(["a", "b", "e"]);
        let y = Observation::set(["a", "b", "c", "d"]);
        let u = Observation::set(["a", "b", "c", "d", "e", "f", "h"]);

        let stats = SufficientStatistics::extract(&x, &y, Some(&u)).unwrap();
        assert_eq!(stats.as_tuple(), (2.0, 1.0, 2.0, 2.0, 7.0));
    }

    #[test]
    fn test_extract_arrays() {
        let x = Observation::array(vec![1, 1, 0, 0, 1]);
        let y = Observation::array(vec![1, 0, 1, 0, 0]);

        let stats = SufficientStatistics::extract(&x, &y, None).unwrap();
        assert_eq!(stats.as_tuple(), (1.0, 2.0, 1.0, 0.0, 5.0));
    }

    #[test]
    fn test_extract_mixed_kinds_rejected() {
        let x: Observation<u64> = Observation::set([1, 2]);
        let y = Observation::array(vec![1, 0]);
        assert!(matches!(
            SufficientStatistics::extract(&x, &y, None),
            Err(SimilarityError::UnsupportedInputKind(_))
        ));

        let x: Observation<u64> = Observation::set([1, 2]);
        let y: Observation<u64> = Observation::set([2, 3]);
        let u = Observation::array(vec![1, 1, 1]);
        assert!(matches!(
            SufficientStatistics::extract(&x, &y, Some(&u)),
            Err(SimilarityError::UnsupportedInputKind(_))
        ));
    }

    #[test]
    fn test_from_values() {
        let x = Observation::<u32>::from_values("array", &[1, 0, 2]).unwrap();
        assert_eq!(x, Observation::Array(vec![1, 0, 1]));

        let x = Observation::<u32>::from_values("set", &[1, 1, 2]).unwrap();
        assert_eq!(x.kind(), InputKind::Set);

        assert!(Observation::<u32>::from_values("graph", &[1]).is_err());
    }

    #[test]
    fn test_marginals() {
        let stats = SufficientStatistics::new(2.0, 1.0, 2.0, 2.0, 7.0);
        assert_eq!(stats.x_total(), 3.0);
        assert_eq!(stats.y_total(), 4.0);
        // (3)(4)(4)(3)
        assert_eq!(stats.marginal_product(), 144.0);
    }

    #[test]
    fn test_display() {
        let stats = SufficientStatistics::new(1.0, 2.0, 3.0, 4.0, 10.0);
        assert_eq!(stats.to_string(), "a=1 b=2 c=3 d=4 n=10");
    }
}
