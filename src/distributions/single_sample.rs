//! # Single Sample
//!
//! $$
//! F_1(x)=\sqrt{1-4e^{-x-1}},\qquad \ln 4-1\le x
//! $$
//!
//! Closed forms for the degenerate sample size $n=1$, shared by both
//! evaluators.
use super::XBIGM;

/// Lower end of the support, $\ln 4 - 1$.
pub const X0: f64 = 0.386_294_361_119_890_62;
/// Upper end of the support; `exp(-x - 1)` no longer moves the cdf beyond it.
pub const X1: f64 = 37.816_242_111_357;

pub fn pdf(x: f64) -> f64 {
  if x <= X0 || x >= X1 {
    return 0.0;
  }
  let t = (-x - 1.0).exp();
  2.0 * t / (1.0 - 4.0 * t).sqrt()
}

pub fn cdf(x: f64) -> f64 {
  if x <= X0 {
    return 0.0;
  }
  if x >= X1 {
    return 1.0;
  }
  (1.0 - 4.0 * (-x - 1.0).exp()).sqrt()
}

/// Survival function. For `x >= 6` the value `1 - sqrt(1 - q)` is expanded in
/// powers of `q = 4 exp(-x - 1)` to keep relative precision in the far tail.
pub fn sf(x: f64) -> f64 {
  if x <= X0 {
    return 1.0;
  }
  if x >= XBIGM {
    return 0.0;
  }

  if x < 6.0 {
    let q = 1.0 - 4.0 * (-x - 1.0).exp();
    return 1.0 - q.sqrt();
  }
  let q = 4.0 * (-x - 1.0).exp();
  0.5 * q * (1.0 + 0.25 * q * (1.0 + 0.5 * q * (1.0 + 0.125 * q * (5.0 + 3.5 * q))))
}

pub fn inv_cdf(u: f64) -> f64 {
  if u <= 0.0 {
    return X0;
  }
  if u >= 1.0 {
    return X1;
  }
  X0 - (-u * u).ln_1p()
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use approx::assert_relative_eq;

  use super::*;

  #[test]
  fn lower_support_is_ln4_minus_one() {
    assert_abs_diff_eq!(X0, 4.0f64.ln() - 1.0, epsilon = 1e-15);
  }

  #[test]
  fn cdf_matches_closed_form() {
    let mut x: f64 = 0.3863;
    while x < 6.0 {
      let expected = (1.0 - 4.0 * (-x - 1.0).exp()).sqrt();
      assert_eq!(cdf(x), expected);
      x += 0.01;
    }
  }

  #[test]
  fn cdf_is_zero_and_one_outside_support() {
    assert_eq!(cdf(0.0), 0.0);
    assert_eq!(cdf(X0), 0.0);
    assert_eq!(cdf(X1), 1.0);
    assert_eq!(cdf(100.0), 1.0);
  }

  #[test]
  fn pdf_at_one() {
    let t = (-2.0f64).exp();
    let expected = 2.0 * t / (1.0 - 4.0 * t).sqrt();
    assert_relative_eq!(pdf(1.0), expected, max_relative = 1e-15);
    assert_abs_diff_eq!(pdf(1.0), 0.399_66, epsilon = 1e-4);
    assert_eq!(pdf(0.2), 0.0);
    assert_eq!(pdf(40.0), 0.0);
  }

  #[test]
  fn pdf_is_derivative_of_cdf() {
    for &x in &[0.5, 1.0, 2.5, 7.0] {
      let h = 1e-6;
      let numeric = (cdf(x + h) - cdf(x - h)) / (2.0 * h);
      assert_relative_eq!(pdf(x), numeric, max_relative = 1e-5);
    }
  }

  #[test]
  fn sf_complements_cdf() {
    for &x in &[0.2, 0.4, 0.7, 1.0, 3.0, 5.99, 6.0, 8.0, 20.0, 37.0] {
      assert_abs_diff_eq!(cdf(x) + sf(x), 1.0, epsilon = 1e-12);
    }
  }

  #[test]
  fn sf_tail_series_keeps_precision() {
    assert_relative_eq!(sf(6.0), 1.0 - cdf(6.0), max_relative = 1e-9);
    let x: f64 = 30.0;
    let q = 4.0 * (-x - 1.0).exp();
    assert_relative_eq!(sf(x), 0.5 * q, max_relative = 1e-12);
    assert!(sf(40.0) > 0.0);
    assert_eq!(sf(1000.0), 0.0);
  }

  #[test]
  fn inverse_round_trips() {
    for &u in &[1e-3, 0.01, 0.25, 0.5, 0.75, 0.99, 0.999_999] {
      assert_abs_diff_eq!(cdf(inv_cdf(u)), u, epsilon = 1e-10);
    }
  }

  #[test]
  fn inverse_boundaries() {
    assert_eq!(inv_cdf(0.0), X0);
    assert_eq!(inv_cdf(-0.5), X0);
    assert_eq!(inv_cdf(1.0), X1);
    assert_abs_diff_eq!(inv_cdf(0.5), X0 - 0.75f64.ln(), epsilon = 1e-15);
    assert_abs_diff_eq!(inv_cdf(0.5), 0.673_976, epsilon = 1e-6);
  }
}
