//! Extraction from pairs of sets.

use super::SufficientStatistics;
use log::debug;
use std::collections::HashSet;
use std::hash::Hash;

impl SufficientStatistics {
    /// Builds statistics from two sets and an optional universe.
    ///
    /// Without a universe `d` is 0 and `n = a + b + c`. With a universe,
    /// `d` counts its elements outside `x ∪ y` and `n = |U|`. An empty
    /// universe is treated the same as no universe.
    pub fn from_sets<T: Hash + Eq>(
        x: &HashSet<T>,
        y: &HashSet<T>,
        universe: Option<&HashSet<T>>,
    ) -> Self {
        let a = x.intersection(y).count();
        let b = x.difference(y).count();
        let c = y.difference(x).count();

        let (d, n) = match universe.filter(|u| !u.is_empty()) {
            Some(u) => {
                let d = u
                    .iter()
                    .filter(|e| !x.contains(e) && !y.contains(e))
                    .count();
                (d, u.len())
            }
            None => (0, a + b + c),
        };

        let stats = Self::new(a as f64, b as f64, c as f64, d as f64, n as f64);
        debug!("Extracted set statistics: {}", stats);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(elements: &[&'static str]) -> HashSet<&'static str> {
        elements.iter().copied().collect()
    }

    #[test]
    fn test_with_universe() {
        let x = set(&["a", "b", "e"]);
        let y = set(&["a", "b", "c", "d"]);
        let u = set(&["a", "b", "c", "d", "e", "f", "h"]);

        let stats = SufficientStatistics::from_sets(&x, &y, Some(&u));
        assert_eq!(stats.as_tuple(), (2.0, 1.0, 2.0, 2.0, 7.0));
    }

    #[test]
    fn test_without_universe() {
        let x = set(&["a", "b", "e"]);
        let y = set(&["a", "b", "c", "d"]);

        let stats = SufficientStatistics::from_sets(&x, &y, None);
        // n = a + b + c
        assert_eq!(stats.as_tuple(), (2.0, 1.0, 2.0, 0.0, 5.0));
    }

    #[test]
    fn test_empty_universe_is_no_universe() {
        let x = set(&["a", "b"]);
        let y = set(&["b", "c"]);
        let u = HashSet::new();

        let with_empty = SufficientStatistics::from_sets(&x, &y, Some(&u));
        let without = SufficientStatistics::from_sets(&x, &y, None);
        assert_eq!(with_empty, without);
        assert_eq!(without.n(), 3.0);
    }

    #[test]
    fn test_disjoint() {
        let x = set(&["a", "b"]);
        let y = set(&["c"]);

        let stats = SufficientStatistics::from_sets(&x, &y, None);
        assert_eq!(stats.as_tuple(), (0.0, 2.0, 1.0, 0.0, 3.0));
    }

    #[test]
    fn test_universe_not_superset_is_accepted() {
        // U only partially covers x ∪ y; n is still |U|.
        let x = set(&["a", "b"]);
        let y = set(&["b", "c"]);
        let u = set(&["b", "z"]);

        let stats = SufficientStatistics::from_sets(&x, &y, Some(&u));
        assert_eq!(stats.as_tuple(), (1.0, 1.0, 1.0, 1.0, 2.0));
    }

    #[test]
    fn test_both_empty() {
        let x: HashSet<u32> = HashSet::new();
        let y: HashSet<u32> = HashSet::new();

        let stats = SufficientStatistics::from_sets(&x, &y, None);
        assert_eq!(stats.as_tuple(), (0.0, 0.0, 0.0, 0.0, 0.0));
    }
}
