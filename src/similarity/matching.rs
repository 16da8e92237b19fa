//! Matching coefficients: ratios of agreements to (weighted) totals.

use crate::statistics::SufficientStatistics;

/// Jaccard: `a / (a + b + c)`.
pub fn jaccard(s: &SufficientStatistics) -> f64 {
    let (a, b, c, _, _) = s.as_tuple();
    a / (a + b + c)
}

/// Dice with single-weighted intersection: `a / (2a + b + c)`.
pub fn dice_2(s: &SufficientStatistics) -> f64 {
    let (a, b, c, _, _) = s.as_tuple();
    a / (2.0 * a + b + c)
}

/// Dice (Sørensen): `2a / (2a + b + c)`.
pub fn dice_1(s: &SufficientStatistics) -> f64 {
    let (a, b, c, _, _) = s.as_tuple();
    2.0 * a / (2.0 * a + b + c)
}

/// Three-way Jaccard: `3a / (3a + b + c)`.
pub fn jaccard_3w(s: &SufficientStatistics) -> f64 {
    let (a, b, c, _, _) = s.as_tuple();
    3.0 * a / (3.0 * a + b + c)
}

/// Nei & Li: `2a / ((a + b) + (a + c))`.
pub fn nei_li(s: &SufficientStatistics) -> f64 {
    2.0 * s.a() / (s.x_total() + s.y_total())
}

/// Sokal & Sneath I: `a / (a + 2b + 2c)`.
pub fn sokal_sneath_1(s: &SufficientStatistics) -> f64 {
    let (a, b, c, _, _) = s.as_tuple();
    a / (a + 2.0 * b + 2.0 * c)
}

/// Sokal & Michener simple matching: `(a + d) / (a + b + c + d)`.
pub fn sokal_michener(s: &SufficientStatistics) -> f64 {
    let (a, b, c, d, _) = s.as_tuple();
    (a + d) / (a + b + c + d)
}

/// Sokal & Sneath II: `2(a + d) / (2a + b + c + 2d)`.
pub fn sokal_sneath_2(s: &SufficientStatistics) -> f64 {
    let (a, b, c, d, _) = s.as_tuple();
    2.0 * (a + d) / (2.0 * a + b + c + 2.0 * d)
}

/// Rogers & Tanimoto: `(a + d) / (a + 2(b + c) + d)`.
pub fn roger_tanimoto(s: &SufficientStatistics) -> f64 {
    let (a, b, c, d, _) = s.as_tuple();
    (a + d) / (a + 2.0 * (b + c) + d)
}

/// Faith: `(a + d/2) / (a + b + c + d)`.
pub fn faith(s: &SufficientStatistics) -> f64 {
    let (a, b, c, d, _) = s.as_tuple();
    (a + 0.5 * d) / (a + b + c + d)
}

/// Gower & Legendre: `(a + d) / (a + (b + c)/2 + d)`.
pub fn gower_legendre(s: &SufficientStatistics) -> f64 {
    let (a, b, c, d, _) = s.as_tuple();
    (a + d) / (a + 0.5 * (b + c) + d)
}

/// Raw intersection size `a`.
pub fn intersection(s: &SufficientStatistics) -> f64 {
    s.a()
}

/// Inner product of the binary vectors: `a + d`.
pub fn inner_product(s: &SufficientStatistics) -> f64 {
    s.a() + s.d()
}

/// Russell & Rao: `a / (a + b + c + d)`.
pub fn russel_rao(s: &SufficientStatistics) -> f64 {
    let (a, b, c, d, _) = s.as_tuple();
    a / (a + b + c + d)
}
