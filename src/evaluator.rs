//! Evaluation façade over the coefficient catalog.

use crate::config::EvaluatorConfig;
use crate::error::{Result, SimilarityError};
use crate::similarity::{self, SimilarityMeasure};
use crate::statistics::SufficientStatistics;
use log::{debug, trace, warn};
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::Hash;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Sentinel recorded by batch evaluation for undefined results.
pub const UNDEFINED: f64 = f64::NAN;

/// Returns true if `value` is the undefined sentinel.
#[inline]
pub fn is_undefined(value: f64) -> bool {
    value.is_nan()
}

type Measure = dyn SimilarityMeasure + Send + Sync;

/// Evaluates coefficients against one fixed set of statistics.
///
/// Formulas registered with [`Evaluator::register_formula`] belong to this
/// instance only and shadow built-ins of the same name.
#[derive(Clone)]
pub struct Evaluator {
    stats: SufficientStatistics,
    extensions: HashMap<String, Arc<Measure>>,
    config: EvaluatorConfig,
}

impl Evaluator {
    /// Creates an evaluator with the default configuration.
    pub fn new(stats: SufficientStatistics) -> Self {
        Self {
            stats,
            extensions: HashMap::new(),
            config: EvaluatorConfig::default(),
        }
    }

    /// Creates an evaluator with a custom configuration.
    pub fn with_config(stats: SufficientStatistics, config: EvaluatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            stats,
            extensions: HashMap::new(),
            config,
        })
    }

    /// Creates an evaluator for two sets and an optional universe.
    pub fn from_sets<T: Hash + Eq>(
        x: &HashSet<T>,
        y: &HashSet<T>,
        universe: Option<&HashSet<T>>,
    ) -> Self {
        Self::new(SufficientStatistics::from_sets(x, y, universe))
    }

    /// Creates an evaluator for two presence arrays and an optional mask.
    pub fn from_arrays(x: &[u8], y: &[u8], universe: Option<&[u8]>) -> Result<Self> {
        SufficientStatistics::from_arrays(x, y, universe).map(Self::new)
    }

    /// Creates an evaluator from pre-computed counts.
    pub fn from_counts(a: f64, b: f64, c: f64, d: f64, n: f64) -> Self {
        Self::new(SufficientStatistics::new(a, b, c, d, n))
    }

    /// Returns the statistics being evaluated.
    pub fn statistics(&self) -> &SufficientStatistics {
        &self.stats
    }

    /// Returns `(a, b, c, d, n)`.
    pub fn raw_statistics(&self) -> (f64, f64, f64, f64, f64) {
        self.stats.as_tuple()
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Adds or replaces a formula on this instance.
    ///
    /// The function is not checked here; faults surface when it is evaluated.
    pub fn register_formula<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&SufficientStatistics) -> f64 + Send + Sync + 'static,
    {
        let name = name.into();
        if similarity::formula(&name).is_some() {
            debug!("Formula {} overrides the built-in of the same name", name);
        }
        self.extensions.insert(name, Arc::new(function));
    }

    /// Evaluates one formula, or the configured default when `name` is `None`.
    ///
    /// Not fault isolated: a non-finite result is returned as
    /// [`SimilarityError::ArithmeticFault`].
    pub fn evaluate(&self, name: Option<&str>) -> Result<f64> {
        let name = name.unwrap_or(self.config.default_formula.as_str());
        let measure = self
            .resolve(name)
            .ok_or_else(|| SimilarityError::UnknownFormula(name.to_string()))?;

        let value = measure.similarity(&self.stats);
        trace!("{} = {} for {}", name, value, self.stats);

        if !value.is_finite() {
            return Err(SimilarityError::ArithmeticFault {
                formula: name.to_string(),
                value,
            });
        }
        Ok(value)
    }

    /// Evaluates every built-in and registered formula.
    ///
    /// Never fails. Each formula runs in isolation; non-finite results and
    /// panics from registered formulas are recorded as [`UNDEFINED`].
    pub fn evaluate_all(&self) -> HashMap<String, f64> {
        let measures = self.measures();
        let stats = &self.stats;

        let results: HashMap<String, f64> = if self.config.parallel {
            measures
                .par_iter()
                .map(|&(name, measure)| (name.to_string(), isolate(name, measure, stats)))
                .collect()
        } else {
            measures
                .iter()
                .map(|&(name, measure)| (name.to_string(), isolate(name, measure, stats)))
                .collect()
        };

        debug!(
            "Evaluated {} formulas, {} undefined, for {}",
            results.len(),
            results.values().filter(|v| is_undefined(**v)).count(),
            stats
        );
        results
    }

    /// Returns the names of all formulas available on this instance.
    pub fn formula_names(&self) -> BTreeSet<String> {
        similarity::names()
            .into_iter()
            .map(str::to_string)
            .chain(self.extensions.keys().cloned())
            .collect()
    }

    fn resolve(&self, name: &str) -> Option<&Measure> {
        if let Some(extension) = self.extensions.get(name) {
            return Some(extension.as_ref());
        }
        similarity::formula(name).map(|formula| formula as &Measure)
    }

    /// One entry per name, extensions taking precedence over built-ins.
    fn measures(&self) -> Vec<(&str, &Measure)> {
        similarity::builtins()
            .iter()
            .filter(|formula| !self.extensions.contains_key(formula.name()))
            .map(|formula| (formula.name(), formula as &Measure))
            .chain(
                self.extensions
                    .iter()
                    .map(|(name, measure)| (name.as_str(), measure.as_ref())),
            )
            .collect()
    }
}

/// Runs one formula, mapping non-finite results and panics to [`UNDEFINED`].
fn isolate(name: &str, measure: &Measure, stats: &SufficientStatistics) -> f64 {
    match panic::catch_unwind(AssertUnwindSafe(|| measure.similarity(stats))) {
        Ok(value) if value.is_finite() => value,
        Ok(value) => {
            debug!("{} is undefined ({}) for {}", name, value, stats);
            UNDEFINED
        }
        Err(_) => {
            warn!("{} panicked for {}; recorded as undefined", name, stats);
            UNDEFINED
        }
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("stats", &self.stats)
            .field("extensions", &self.extensions.keys().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Evaluator {
        Evaluator::from_counts(2.0, 1.0, 2.0, 2.0, 7.0)
    }

    #[test]
    fn test_default_is_jaccard() {
        let eval = example();
        assert!((eval.evaluate(None).unwrap() - 0.4).abs() < 1e-10);
        assert_eq!(eval.evaluate(None), eval.evaluate(Some("Jaccard")));
    }

    #[test]
    fn test_configured_default() {
        let config = EvaluatorConfig {
            default_formula: "SokalMichener".to_string(),
            ..Default::default()
        };
        let eval = Evaluator::with_config(*example().statistics(), config).unwrap();
        assert!((eval.evaluate(None).unwrap() - 4.0 / 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_unknown_formula() {
        let eval = example();
        assert_eq!(
            eval.evaluate(Some("evaluateAll")),
            Err(SimilarityError::UnknownFormula("evaluateAll".to_string()))
        );
    }

    #[test]
    fn test_single_evaluation_surfaces_faults() {
        let eval = Evaluator::from_counts(0.0, 2.0, 1.0, 3.0, 6.0);
        match eval.evaluate(Some("GilbertWells")) {
            Err(SimilarityError::ArithmeticFault { formula, value }) => {
                assert_eq!(formula, "GilbertWells");
                assert!(!value.is_finite());
            }
            other => panic!("expected arithmetic fault, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_all_covers_catalog() {
        let eval = example();
        let results = eval.evaluate_all();
        assert_eq!(results.len(), similarity::builtins().len());
        assert!((results["Jaccard"] - 0.4).abs() < 1e-10);
        assert!(results.values().all(|v| v.is_finite()));
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let stats = *example().statistics();
        let parallel = Evaluator::new(stats).evaluate_all();
        let sequential = Evaluator::with_config(stats, EvaluatorConfig::sequential())
            .unwrap()
            .evaluate_all();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_register_and_override() {
        let mut eval = example();
        eval.register_formula("AplusD", |s: &SufficientStatistics| s.a() + s.d());
        eval.register_formula("Jaccard", |_: &SufficientStatistics| 42.0);

        assert_eq!(eval.evaluate(Some("AplusD")).unwrap(), 4.0);
        assert_eq!(eval.evaluate(Some("Jaccard")).unwrap(), 42.0);

        let results = eval.evaluate_all();
        assert_eq!(results.len(), similarity::builtins().len() + 1);
        assert_eq!(results["Jaccard"], 42.0);

        // Registration is scoped to the instance.
        assert!((example().evaluate(None).unwrap() - 0.4).abs() < 1e-10);
    }

    #[test]
    fn test_panicking_formula_is_isolated() {
        let mut eval = Evaluator::with_config(
            *example().statistics(),
            EvaluatorConfig::sequential(),
        )
        .unwrap();
        eval.register_formula("Broken", |_: &SufficientStatistics| -> f64 {
            panic!("broken formula")
        });

        let results = eval.evaluate_all();
        assert!(is_undefined(results["Broken"]));
        assert!((results["Jaccard"] - 0.4).abs() < 1e-10);
    }

    #[test]
    fn test_formula_names() {
        let mut eval = example();
        let names = eval.formula_names();
        assert_eq!(names.len(), similarity::builtins().len());
        assert!(!names.contains("evaluate"));

        eval.register_formula("Custom", |s: &SufficientStatistics| s.a());
        eval.register_formula("Jaccard", |s: &SufficientStatistics| s.a());
        let names = eval.formula_names();
        assert_eq!(names.len(), similarity::builtins().len() + 1);
        assert!(names.contains("Custom"));
    }

    #[test]
    fn test_raw_statistics() {
        assert_eq!(example().raw_statistics(), (2.0, 1.0, 2.0, 2.0, 7.0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EvaluatorConfig {
            default_formula: String::new(),
            ..Default::default()
        };
        assert!(Evaluator::with_config(*example().statistics(), config).is_err());
    }
}
