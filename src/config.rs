//! Configuration for the similarity evaluator.

use crate::error::{Result, SimilarityError};
use serde::{Deserialize, Serialize};

/// Name of the formula used when none is requested.
pub const DEFAULT_FORMULA: &str = "Jaccard";

/// Evaluator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Formula evaluated by `evaluate(None)`.
    /// Default: "Jaccard".
    pub default_formula: String,

    /// Evaluate the batch on the rayon thread pool.
    /// Default: true.
    pub parallel: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            default_formula: DEFAULT_FORMULA.to_string(),
            parallel: true,
        }
    }
}

impl EvaluatorConfig {
    /// Returns a sequential configuration.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    /// Checks the configuration for obviously unusable values.
    ///
    /// Whether the default formula exists is only known once extensions
    /// are registered, so it is checked at evaluation time instead.
    pub fn validate(&self) -> Result<()> {
        if self.default_formula.trim().is_empty() {
            return Err(SimilarityError::Config(
                "default_formula must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
