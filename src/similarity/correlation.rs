//! Correlation-type coefficients built on the cross products `ad` and `bc`.

use super::nan_max;
use crate::statistics::SufficientStatistics;
use std::f64::consts::PI;

#[inline]
fn cross_products(s: &SufficientStatistics) -> (f64, f64) {
    (s.a() * s.d(), s.b() * s.c())
}

/// Pearson chi-square: `n (ad - bc)^2 / ((a + b)(a + c)(c + d)(b + d))`.
pub fn pearson_1(s: &SufficientStatistics) -> f64 {
    let (ad, bc) = cross_products(s);
    s.n() * (ad - bc).powi(2) / s.marginal_product()
}

/// Pearson contingency from chi-square: `sqrt(X^2 / (n + X^2))`, `X` = Pearson_1.
pub fn pearson_2(s: &SufficientStatistics) -> f64 {
    let x = pearson_1(s);
    (x.powi(2) / (s.n() + x.powi(2))).sqrt()
}

/// Pearson & Heron I (phi): `(ad - bc) / sqrt((a + b)(a + c)(c + d)(b + d))`.
pub fn pearson_heron_1(s: &SufficientStatistics) -> f64 {
    let (ad, bc) = cross_products(s);
    (ad - bc) / s.marginal_product().sqrt()
}

/// Pearson contingency from phi: `sqrt(p / (n + p))` for `p >= 0`, else 0.
///
/// A NaN `p` fails the comparison and yields 0.
pub fn pearson_3(s: &SufficientStatistics) -> f64 {
    let p = pearson_heron_1(s);
    if p >= 0.0 {
        (p / (s.n() + p)).sqrt()
    } else {
        0.0
    }
}

/// Pearson & Heron II: `cos(pi sqrt(bc) / (sqrt(ad) + sqrt(bc)))`.
pub fn pearson_heron_2(s: &SufficientStatistics) -> f64 {
    let (ad, bc) = cross_products(s);
    ((PI * bc.sqrt()) / (ad.sqrt() + bc.sqrt())).cos()
}

/// Sokal & Sneath III: `(a + d) / (b + c)`.
pub fn sokal_sneath_3(s: &SufficientStatistics) -> f64 {
    (s.a() + s.d()) / (s.b() + s.c())
}

/// Sokal & Sneath V: `ad / ((a + b)(a + c)(c + d)(b + d))^0.5`.
pub fn sokal_sneath_5(s: &SufficientStatistics) -> f64 {
    (s.a() * s.d()) / s.marginal_product().powf(0.5)
}

/// Stiles, grouped as `log10(n (|ad - bc| - n/2)^2) / ((a + b)(a + c)(c + d)(b + d))`.
pub fn stiles(s: &SufficientStatistics) -> f64 {
    let (ad, bc) = cross_products(s);
    let n = s.n();
    (n * ((ad - bc).abs() - (n / 2.0)).powi(2)).log10() / s.marginal_product()
}

/// Ochiai II: `ad / sqrt((a + b)(a + c)(c + d)(b + d))`.
pub fn ochiai_2(s: &SufficientStatistics) -> f64 {
    (s.a() * s.d()) / s.marginal_product().sqrt()
}

/// Yule's Q: `(ad - bc) / (ad + bc)`.
pub fn yule_q(s: &SufficientStatistics) -> f64 {
    let (ad, bc) = cross_products(s);
    (ad - bc) / (ad + bc)
}

/// Yule's W: `(sqrt(ad) - sqrt(bc)) / (sqrt(ad) + sqrt(bc))`.
pub fn yule_w(s: &SufficientStatistics) -> f64 {
    let (ad, bc) = cross_products(s);
    (ad.sqrt() - bc.sqrt()) / (ad.sqrt() + bc.sqrt())
}

/// Dispersion: `(ad - bc) / (ad + bc)^2`.
pub fn disperson(s: &SufficientStatistics) -> f64 {
    let (ad, bc) = cross_products(s);
    (ad - bc) / (ad + bc).powi(2)
}

/// Hamann: `((a + d) - (b + c)) / (ad + bc)`.
pub fn hamann(s: &SufficientStatistics) -> f64 {
    let (ad, bc) = cross_products(s);
    ((s.a() + s.d()) - (s.b() + s.c())) / (ad + bc)
}

/// Michael: `4(ad - bc) / ((a + d)^2 + (b + c)^2)`.
pub fn michael(s: &SufficientStatistics) -> f64 {
    let (ad, bc) = cross_products(s);
    (4.0 * (ad - bc)) / ((s.a() + s.d()).powi(2) + (s.b() + s.c()).powi(2))
}

/// Sums of row/column maxima used by Goodman-Kruskal and Anderberg.
fn sigmas(s: &SufficientStatistics) -> (f64, f64) {
    let (a, b, c, d, _) = s.as_tuple();
    let sigma = nan_max(a, b) + nan_max(c, d) + nan_max(a, c) + nan_max(b, d);
    let sigma_lin = nan_max(a + c, b + d) + nan_max(a + b, c + d);
    (sigma, sigma_lin)
}

/// Goodman & Kruskal lambda: `(σ - σ') / (2n - σ')`.
pub fn goodman_kruskal(s: &SufficientStatistics) -> f64 {
    let (sigma, sigma_lin) = sigmas(s);
    (sigma - sigma_lin) / ((2.0 * s.n()) - sigma_lin)
}

/// Anderberg: `(σ - σ') / 2n`.
pub fn anderberg(s: &SufficientStatistics) -> f64 {
    let (sigma, sigma_lin) = sigmas(s);
    (sigma - sigma_lin) / (2.0 * s.n())
}

/// Baroni-Urbani & Buser I: `(sqrt(ad) + a) / (sqrt(ad) + a + b + c)`.
pub fn baroni_urbani_buser_1(s: &SufficientStatistics) -> f64 {
    let (a, b, c, d, _) = s.as_tuple();
    let root = (a * d).sqrt();
    (root + a) / (root + a + b + c)
}

/// Baroni-Urbani & Buser II: `(sqrt(ad) + a - (b + c)) / (sqrt(ad) + a + b + c)`.
pub fn baroni_urbani_buser_2(s: &SufficientStatistics) -> f64 {
    let (a, b, c, d, _) = s.as_tuple();
    let root = (a * d).sqrt();
    (root + a - (b + c)) / (root + a + b + c)
}

/// Peirce: `(ab + bc) / (ab + 2bc + cd)`.
pub fn peirce(s: &SufficientStatistics) -> f64 {
    let (a, b, c, d, _) = s.as_tuple();
    ((a * b) + (b * c)) / ((a * b) + (2.0 * b * c) + (c * d))
}

/// Eyraud: `n^2 (na - (a + b)(a + c)) / ((a + b)(a + c)(c + d)(b + d))`.
pub fn eyraud(s: &SufficientStatistics) -> f64 {
    let (a, _, _, _, n) = s.as_tuple();
    (n.powi(2) * ((n * a) - (s.x_total() * s.y_total()))) / s.marginal_product()
}

/// Tarantula: `a (a + b) / (c (c + d))`.
pub fn tarantula(s: &SufficientStatistics) -> f64 {
    let (a, b, c, d, _) = s.as_tuple();
    (a * (a + b)) / (c * (c + d))
}

/// Ample: `|Tarantula|`.
pub fn ample(s: &SufficientStatistics) -> f64 {
    tarantula(s).abs()
}
