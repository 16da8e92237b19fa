//! # Binary Similarity - Coefficients for Binary Observations
//!
//! Compares two binary feature vectors (or sets) with dozens of published
//! similarity, association and correlation coefficients at once.
//!
//! ## Overview
//!
//! A pair of binary observations is summarised by its 2x2 contingency
//! table `(a, b, c, d)` plus the universe size `n`. Every coefficient is a
//! pure function of those five numbers, so the table is extracted once and
//! the whole catalog can be evaluated against it.
//!
//! ## Key Features
//!
//! - **Set and array inputs**, with or without a universe
//! - **63 named coefficients**: Jaccard, Dice, Sokal & Michener, Ochiai, Yule, ...
//! - **Batch evaluation** with per-formula fault isolation
//! - **Run-time extension** with caller-supplied formulas
//!
//! ## Quick Start
//!
//! ```rust
//! use binary_similarity::Evaluator;
//! use std::collections::HashSet;
//!
//! let x: HashSet<_> = ["a", "b", "e"].into_iter().collect();
//! let y: HashSet<_> = ["a", "b", "c", "d"].into_iter().collect();
//! let u: HashSet<_> = ["a", "b", "c", "d", "e", "f", "h"].into_iter().collect();
//!
//! let eval = Evaluator::from_sets(&x, &y, Some(&u));
//! assert_eq!(eval.raw_statistics(), (2.0, 1.0, 2.0, 2.0, 7.0));
//!
//! let jaccard = eval.evaluate(Some("Jaccard")).unwrap();
//! assert!((jaccard - 0.4).abs() < 1e-10);
//!
//! let all = eval.evaluate_all();
//! assert_eq!(all.len(), eval.formula_names().len());
//! ```
//!
//! ## Architecture
//!
//! - [`statistics`] - Extraction of the contingency table
//! - [`similarity`] - The coefficient catalog
//! - [`evaluator`] - Single, batch and extended evaluation
//! - [`config`] - Evaluator configuration
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod evaluator;
pub mod similarity;
pub mod statistics;

// Re-export commonly used types
pub use config::{EvaluatorConfig, DEFAULT_FORMULA};
pub use error::{Result, SimilarityError};
pub use evaluator::{is_undefined, Evaluator, UNDEFINED};
pub use similarity::{Formula, FormulaFn, SimilarityMeasure};
pub use statistics::{InputKind, Observation, SufficientStatistics};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_formula_is_builtin() {
        assert!(similarity::lookup(DEFAULT_FORMULA).is_some());
    }
}
