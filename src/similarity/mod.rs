//! The catalog of binary similarity and association coefficients.
//!
//! Every coefficient is a pure function of [`SufficientStatistics`]. The
//! catalog is an explicit static table keyed by stable names; those names
//! are the public identifiers used by [`crate::Evaluator`].
//!
//! Formulas follow IEEE-754 semantics and may return NaN or infinity for
//! degenerate tables (for example `a = 0`). Deciding what to do with such
//! values is the caller's job.

mod association;
mod correlation;
mod derived;
mod matching;

pub use association::*;
pub use correlation::*;
pub use derived::*;
pub use matching::*;

use crate::statistics::SufficientStatistics;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Signature of a built-in coefficient.
pub type FormulaFn = fn(&SufficientStatistics) -> f64;

/// Trait for anything that scores a contingency table.
///
/// Implemented for built-in [`Formula`] entries and for any closure
/// `Fn(&SufficientStatistics) -> f64`, so caller-supplied formulas are
/// interchangeable with the catalog.
pub trait SimilarityMeasure {
    /// Computes the coefficient for the given statistics.
    fn similarity(&self, stats: &SufficientStatistics) -> f64;
}

impl<F> SimilarityMeasure for F
where
    F: Fn(&SufficientStatistics) -> f64,
{
    fn similarity(&self, stats: &SufficientStatistics) -> f64 {
        self(stats)
    }
}

/// A named catalog entry.
#[derive(Clone, Copy)]
pub struct Formula {
    name: &'static str,
    function: FormulaFn,
}

impl Formula {
    const fn new(name: &'static str, function: FormulaFn) -> Self {
        Self { name, function }
    }

    /// Returns the public name of the coefficient.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the underlying function.
    #[inline]
    pub fn function(&self) -> FormulaFn {
        self.function
    }
}

impl SimilarityMeasure for Formula {
    #[inline]
    fn similarity(&self, stats: &SufficientStatistics) -> f64 {
        (self.function)(stats)
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formula").field("name", &self.name).finish()
    }
}

static BUILTINS: &[Formula] = &[
    // Matching
    Formula::new("Jaccard", jaccard),
    Formula::new("Dice_2", dice_2),
    Formula::new("Dice_1", dice_1),
    Formula::new("Jaccard_3w", jaccard_3w),
    Formula::new("NeiLi", nei_li),
    Formula::new("SokalSneath_1", sokal_sneath_1),
    Formula::new("SokalMichener", sokal_michener),
    Formula::new("SokalSneath_2", sokal_sneath_2),
    Formula::new("RogerTanimoto", roger_tanimoto),
    Formula::new("Faith", faith),
    Formula::new("GowerLegendre", gower_legendre),
    Formula::new("Intersection", intersection),
    Formula::new("InnerProduct", inner_product),
    Formula::new("RusselRao", russel_rao),
    // Association
    Formula::new("Cosine", cosine),
    Formula::new("GilbertWells", gilbert_wells),
    Formula::new("Ochiai_1", ochiai_1),
    Formula::new("Forbes_1", forbes_1),
    Formula::new("Fossum", fossum),
    Formula::new("Sorgenfiel", sorgenfiel),
    Formula::new("Mountford", mountford),
    Formula::new("Otsuka", otsuka),
    Formula::new("Mcconnaughey", mcconnaughey),
    Formula::new("Tarwid", tarwid),
    Formula::new("Kulczynski_2", kulczynski_2),
    Formula::new("DriverKroeber", driver_kroeber),
    Formula::new("Johnson", johnson),
    Formula::new("Dennis", dennis),
    Formula::new("Simpson", simpson),
    Formula::new("BraunBanquet", braun_banquet),
    Formula::new("FagerMcGowan", fager_mcgowan),
    Formula::new("Forbes_2", forbes_2),
    Formula::new("SokalSneath_4", sokal_sneath_4),
    Formula::new("Gower", gower),
    Formula::new("Kulczynski_1", kulczynski_1),
    Formula::new("Tanimoto", tanimoto),
    // Correlation
    Formula::new("Pearson_1", pearson_1),
    Formula::new("Pearson_2", pearson_2),
    Formula::new("PearsonHeron_1", pearson_heron_1),
    Formula::new("Pearson_3", pearson_3),
    Formula::new("PearsonHeron_2", pearson_heron_2),
    Formula::new("SokalSneath_3", sokal_sneath_3),
    Formula::new("SokalSneath_5", sokal_sneath_5),
    Formula::new("Stiles", stiles),
    Formula::new("Ochiai_2", ochiai_2),
    Formula::new("Yuleq", yule_q),
    Formula::new("Yulew", yule_w),
    Formula::new("Disperson", disperson),
    Formula::new("Hamann", hamann),
    Formula::new("Michael", michael),
    Formula::new("GoodmanKruskal", goodman_kruskal),
    Formula::new("Anderberg", anderberg),
    Formula::new("Baroni_UrbaniBuser_1", baroni_urbani_buser_1),
    Formula::new("Baroni_UrbaniBuser_2", baroni_urbani_buser_2),
    Formula::new("Peirce", peirce),
    Formula::new("Eyraud", eyraud),
    Formula::new("Tarantula", tarantula),
    Formula::new("Ample", ample),
    // Log-derived
    Formula::new("Derived_RusellRao", derived_russel_rao),
    Formula::new("Derived_Jaccard", derived_jaccard),
    Formula::new("Var_of_Correlation", var_of_correlation),
    Formula::new("Derived_SokalMichener", derived_sokal_michener),
    Formula::new("Derived_logSokalMichener", derived_log_sokal_michener),
];

static INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    BUILTINS
        .iter()
        .enumerate()
        .map(|(i, formula)| (formula.name, i))
        .collect()
});

/// Returns every built-in catalog entry.
pub fn builtins() -> &'static [Formula] {
    BUILTINS
}

/// Returns the built-in catalog entry with this name.
pub fn formula(name: &str) -> Option<&'static Formula> {
    INDEX.get(name).map(|&i| &BUILTINS[i])
}

/// Looks up a built-in coefficient by name.
pub fn lookup(name: &str) -> Option<FormulaFn> {
    formula(name).map(Formula::function)
}

/// Returns the names of all built-in coefficients without evaluating them.
pub fn names() -> BTreeSet<&'static str> {
    BUILTINS.iter().map(Formula::name).collect()
}

/// Larger of two values; NaN if either is NaN.
#[inline]
pub(crate) fn nan_max(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        f64::NAN
    } else {
        x.max(y)
    }
}

/// Smaller of two values; NaN if either is NaN.
#[inline]
pub(crate) fn nan_min(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        f64::NAN
    } else {
        x.min(y)
    }
}
