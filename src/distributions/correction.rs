//! # Correction
//!
//! $$
//! F_n(z)\approx F_\infty(z)+\frac{1}{n}\,g_n\!\left(F_\infty(z)\right)
//! $$
//!
//! Empirical finite-sample corrections fitted to simulation. The coefficients
//! are reproduced verbatim; the piecewise fit is continuous at the breakpoints
//! only to the precision of the fit.
use super::tables::coad;
use super::tables::f2ad;
use super::tables::H;
use super::tables::TABLE_LEN;

/// Adds the `O(1/n)` correction to a limiting cdf value `x = A∞(z)`.
pub fn finite_sample_cdf(n: usize, x: f64) -> f64 {
  let n = n as f64;

  if x > 0.8 {
    let v = (-130.2137
      + (745.2337 - (1705.091 - (1950.646 - (1116.360 - 255.7844 * x) * x) * x) * x) * x)
      / n;
    return x + v;
  }

  let c = 0.01265 + 0.1757 / n;
  if x < c {
    let v = x / c;
    let v = v.sqrt() * (1.0 - v) * (49.0 * v - 102.0);
    return x + v * (0.0037 / (n * n) + 0.00078 / n + 0.00006) / n;
  }

  let v = (x - c) / (0.8 - c);
  let v = -0.00022633
    + (6.54034 - (14.6538 - (14.458 - (8.259 - 1.91864 * v) * v) * v) * v) * v;
  x + v * (0.04213 + 0.01365 / n) / n
}

/// Survival function from the tables, for statistic values in `(0.2, 5]`.
///
/// Newton backward quadratic interpolation of the limiting cdf through the
/// grid points `i - 2, i - 1, i`, plus the interpolated `1/n` correction.
pub fn table_sf(n: usize, x: f64) -> f64 {
  let f = f2ad();
  let co = coad();

  let i = ((1.0 + x / H) as usize).clamp(2, TABLE_LEN - 2);
  let q = x / H - i as f64;

  let mut res = (f[i - 2] - 2.0 * f[i - 1] + f[i]) * q * (q + 1.0) / 2.0
    + (f[i] - f[i - 1]) * q
    + f[i];
  res += (co[i] * (q + 1.0) - co[i - 1] * q) / n as f64;

  (1.0 - res).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;

  use super::*;
  use crate::distributions::asymptotic::ad_inf;

  #[test]
  fn correction_vanishes_for_large_n() {
    for &x in &[0.005, 0.2, 0.5, 0.9] {
      assert_abs_diff_eq!(finite_sample_cdf(1_000_000, x), x, epsilon = 1e-6);
    }
  }

  #[test]
  fn regimes_join_without_large_jumps() {
    for &n in &[2, 5, 10, 100] {
      let c = 0.01265 + 0.1757 / n as f64;
      for &b in &[c, 0.8] {
        let below = finite_sample_cdf(n, b - 1e-9);
        let above = finite_sample_cdf(n, b + 1e-9);
        assert_abs_diff_eq!(below, above, epsilon = 1e-3);
      }
    }
  }

  #[test]
  fn corrected_cdf_at_one() {
    assert_abs_diff_eq!(finite_sample_cdf(5, ad_inf(1.0)), 0.6474, epsilon = 1e-3);
    assert_abs_diff_eq!(finite_sample_cdf(10, ad_inf(1.0)), 0.6450, epsilon = 1e-3);
  }

  #[test]
  fn interpolation_reproduces_grid_points() {
    // on a grid point the quadratic term drops out
    let f = f2ad();
    let co = coad();
    for i in [10usize, 40, 80] {
      let x = (i - 1) as f64 * H;
      let n = 50;
      let expected = 1.0 - f[i - 1] - co[i - 1] / n as f64;
      assert_abs_diff_eq!(table_sf(n, x), expected, epsilon = 1e-7);
    }
  }

  #[test]
  fn table_sf_tracks_limiting_series() {
    let mut x = 0.25;
    while x <= 5.0 {
      assert_abs_diff_eq!(table_sf(1_000_000, x), 1.0 - ad_inf(x), epsilon = 5e-4);
      x += 0.01;
    }
  }

  #[test]
  fn table_sf_stays_in_unit_interval() {
    for &n in &[2, 3, 10] {
      let mut x = 0.21;
      while x <= 5.0 {
        let v = table_sf(n, x);
        assert!((0.0..=1.0).contains(&v), "table_sf({n}, {x}) = {v}");
        x += 0.03;
      }
    }
  }
}
