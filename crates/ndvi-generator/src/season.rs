//! Seasonal vegetation curve.

use std::f64::consts::PI;

/// Seasonal baseline for a calendar month (1 = January).
///
/// `0.5 + 0.3 * sin((month - 3) * pi / 6)`: a sinusoid that climbs from
/// spring, tops out mid-year and bottoms out around the turn of the year.
/// Always within `[0.2, 0.8]`.
pub fn season_factor(month: u32) -> f64 {
    0.5 + 0.3 * ((month as f64 - 3.0) * PI / 6.0).sin()
}
