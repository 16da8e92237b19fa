//! Log-scaled variants of the matching and correlation coefficients.

use crate::statistics::SufficientStatistics;

/// `ln(1 + a) / ln(1 + n)`.
pub fn derived_russel_rao(s: &SufficientStatistics) -> f64 {
    (1.0 + s.a()).ln() / (1.0 + s.n()).ln()
}

/// `ln(1 + a) / ln(1 + a + b + c)`.
pub fn derived_jaccard(s: &SufficientStatistics) -> f64 {
    let (a, b, c, _, _) = s.as_tuple();
    (1.0 + a).ln() / (1.0 + a + b + c).ln()
}

/// `(ln(1 + ad) - ln(1 + bc)) / ln((1 + n^2) / 4)`.
pub fn var_of_correlation(s: &SufficientStatistics) -> f64 {
    let (a, b, c, d, n) = s.as_tuple();
    ((1.0 + (a * d)).ln() - (1.0 + (b * c)).ln()) / ((1.0 + n.powi(2)) / 4.0).ln()
}

/// `ln(1 + a + d) / ln(1 + n)`.
pub fn derived_sokal_michener(s: &SufficientStatistics) -> f64 {
    (1.0 + s.a() + s.d()).ln() / (1.0 + s.n()).ln()
}

/// `(ln(1 + n) - ln(1 + b + c)) / ln(1 + n)`.
pub fn derived_log_sokal_michener(s: &SufficientStatistics) -> f64 {
    let log_n = (1.0 + s.n()).ln();
    (log_n - (1.0 + s.b() + s.c()).ln()) / log_n
}
