//! Association coefficients built on the marginals `a + b` and `a + c`.
//!
//! `Forbes_1`, `Fossum` and `Sorgenfiel` are evaluated left to right as
//! `(X / (a + b)) * (a + c)`, not `X / ((a + b)(a + c))`.

use super::{nan_max, nan_min};
use crate::statistics::SufficientStatistics;

/// Cosine: `a / sqrt((a + b)(a + c))`.
pub fn cosine(s: &SufficientStatistics) -> f64 {
    s.a() / (s.x_total() * s.y_total()).sqrt()
}

/// Gilbert & Wells: `ln a - ln n - ln((a + b)/n) - ln((a + c)/n)`.
pub fn gilbert_wells(s: &SufficientStatistics) -> f64 {
    let (a, _, _, _, n) = s.as_tuple();
    a.ln() - n.ln() - (s.x_total() / n).ln() - (s.y_total() / n).ln()
}

/// Ochiai I; same expression as [`cosine`].
pub fn ochiai_1(s: &SufficientStatistics) -> f64 {
    s.a() / (s.x_total() * s.y_total()).sqrt()
}

/// Forbes I: `(n a) / (a + b) * (a + c)`.
pub fn forbes_1(s: &SufficientStatistics) -> f64 {
    let (a, _, _, _, n) = s.as_tuple();
    (n * a) / s.x_total() * s.y_total()
}

/// Fossum: `(n (a - 1/2)^2) / (a + b) * (a + c)`.
pub fn fossum(s: &SufficientStatistics) -> f64 {
    let (a, _, _, _, n) = s.as_tuple();
    (n * (a - 0.5).powi(2)) / s.x_total() * s.y_total()
}

/// Sorgenfrei: `a^2 / (a + b) * (a + c)`.
pub fn sorgenfiel(s: &SufficientStatistics) -> f64 {
    s.a().powi(2) / s.x_total() * s.y_total()
}

/// Mountford: `a / ((ab + ac)/2 + bc)`.
pub fn mountford(s: &SufficientStatistics) -> f64 {
    let (a, b, c, _, _) = s.as_tuple();
    a / (0.5 * ((a * b) + (a * c)) + (b * c))
}

/// Otsuka; same expression as [`cosine`].
pub fn otsuka(s: &SufficientStatistics) -> f64 {
    s.a() / (s.x_total() * s.y_total()).sqrt()
}

/// McConnaughey: `(a^2 - bc) / ((a + b)(a + c))`.
pub fn mcconnaughey(s: &SufficientStatistics) -> f64 {
    let (a, b, c, _, _) = s.as_tuple();
    (a.powi(2) - b * c) / (s.x_total() * s.y_total())
}

/// Tarwid: `(na - (a + b)(a + c)) / (na + (a + b)(a + c))`.
pub fn tarwid(s: &SufficientStatistics) -> f64 {
    let (a, _, _, _, n) = s.as_tuple();
    let marginals = s.x_total() * s.y_total();
    (n * a - marginals) / (n * a + marginals)
}

/// Kulczynski II: `(a/2)(2a + b + c) / ((a + b)(a + c))`.
pub fn kulczynski_2(s: &SufficientStatistics) -> f64 {
    let (a, b, c, _, _) = s.as_tuple();
    ((a / 2.0) * (2.0 * a + b + c)) / (s.x_total() * s.y_total())
}

/// Driver & Kroeber: `(a/2)(1/(a + b) + 1/(a + c))`.
pub fn driver_kroeber(s: &SufficientStatistics) -> f64 {
    (s.a() / 2.0) * ((1.0 / s.x_total()) + (1.0 / s.y_total()))
}

/// Johnson: `a/(a + b) + a/(a + c)`.
pub fn johnson(s: &SufficientStatistics) -> f64 {
    (s.a() / s.x_total()) + (s.a() / s.y_total())
}

/// Dennis: `(ad - bc) / sqrt(n (a + b)(a + c))`.
pub fn dennis(s: &SufficientStatistics) -> f64 {
    let (a, b, c, d, n) = s.as_tuple();
    ((a * d) - (b * c)) / (n * (s.x_total() * s.y_total())).sqrt()
}

/// Simpson (overlap): `a / min(a + b, a + c)`.
pub fn simpson(s: &SufficientStatistics) -> f64 {
    s.a() / nan_min(s.x_total(), s.y_total())
}

/// Braun-Blanquet: `a / max(a + b, a + c)`.
pub fn braun_banquet(s: &SufficientStatistics) -> f64 {
    s.a() / nan_max(s.x_total(), s.y_total())
}

/// Fager & McGowan: `a / sqrt((a + b)(a + c)) - max(a + b, a + c)/2`.
pub fn fager_mcgowan(s: &SufficientStatistics) -> f64 {
    (s.a() / (s.x_total() * s.y_total()).sqrt()) - (nan_max(s.x_total(), s.y_total()) / 2.0)
}

/// Forbes II.
pub fn forbes_2(s: &SufficientStatistics) -> f64 {
    let (a, _, _, _, n) = s.as_tuple();
    let p1 = (n * a) - (s.x_total() * s.y_total());
    let p2 = n * nan_min(s.x_total(), s.y_total());
    let p3 = s.x_total() * s.y_total();
    p1 / (p2 - p3)
}

/// Sokal & Sneath IV: mean of the four conditional agreement ratios.
pub fn sokal_sneath_4(s: &SufficientStatistics) -> f64 {
    let (a, b, c, d, _) = s.as_tuple();
    ((a / (a + b)) + (a / (a + c)) + (d / (b + d)) + (d / (c + d))) / 4.0
}

/// Gower: `(a + d) / sqrt((a + b)(a + c)(c + d)(b + d))`.
pub fn gower(s: &SufficientStatistics) -> f64 {
    (s.a() + s.d()) / s.marginal_product().sqrt()
}

/// Kulczynski I: `a / (b + c)`.
pub fn kulczynski_1(s: &SufficientStatistics) -> f64 {
    s.a() / (s.b() + s.c())
}

/// Tanimoto: `a / ((a + b) + (a + c) - a)`.
pub fn tanimoto(s: &SufficientStatistics) -> f64 {
    s.a() / (s.x_total() + s.y_total() - s.a())
}
