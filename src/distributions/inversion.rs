//! # Inversion
//!
//! $$
//! F_n^{-1}(u)=x\quad\text{s.t.}\quad u-F_n(x)=0,\ x\in[0,50]
//! $$
//!
use impl_new_derive::ImplNew;
use roots::find_root_brent;
use roots::Convergency;

use crate::error::Error;

/// Configuration of the bracketing search used by `inv_cdf`.
#[derive(ImplNew, Debug, Clone, Copy, PartialEq)]
pub struct InversionConfig {
  /// Left end of the bracket, where the cdf is 0.
  pub lower: f64,
  /// Right end of the bracket; the cdf is 1 to within `1e-3 / n` there.
  pub upper: f64,
  /// Width of the final bracket, in units of the statistic.
  pub tolerance: f64,
  /// Iteration budget of the root finder.
  pub max_iter: usize,
}

impl InversionConfig {
  /// Settings of the exact evaluator.
  pub const EXACT: Self = Self {
    lower: 0.0,
    upper: 50.0,
    tolerance: 1e-10,
    max_iter: 100,
  };

  /// Settings of the quick evaluator, matched to its coarser cdf.
  pub const QUICK: Self = Self {
    lower: 0.0,
    upper: 50.0,
    tolerance: 1e-5,
    max_iter: 100,
  };
}

impl Default for InversionConfig {
  fn default() -> Self {
    Self::EXACT
  }
}

/// Stops on the width of the bracket only.
///
/// Probabilities in the tails are far below any useful tolerance on `x`, so a
/// residual test such as `|u - cdf(x)| < eps` would stop at a bracket end.
#[derive(Debug, Clone, Copy)]
pub struct BracketConvergency {
  tolerance: f64,
  max_iter: usize,
}

impl BracketConvergency {
  pub fn new(cfg: &InversionConfig) -> Self {
    Self {
      tolerance: cfg.tolerance,
      max_iter: cfg.max_iter,
    }
  }
}

impl Convergency<f64> for BracketConvergency {
  fn is_root_found(&mut self, y: f64) -> bool {
    y == 0.0
  }

  fn is_converged(&mut self, x1: f64, x2: f64) -> bool {
    (x1 - x2).abs() < self.tolerance
  }

  fn is_iteration_limit_reached(&mut self, iter: usize) -> bool {
    iter >= self.max_iter
  }
}

/// `u - cdf(x)`, the function whose root is the `u`-quantile.
#[derive(Debug, Clone, Copy)]
pub struct Objective<F> {
  u: f64,
  cdf: F,
}

impl<F: Fn(f64) -> f64> Objective<F> {
  pub fn new(u: f64, cdf: F) -> Self {
    Self { u, cdf }
  }

  pub fn evaluate(&self, x: f64) -> f64 {
    self.u - (self.cdf)(x)
  }
}

/// Solves `cdf(x) = u` for `u` in `(0, 1)` on `[cfg.lower, cfg.upper]`.
///
/// `n` only labels the log events. Fails with [`Error::BracketingFailure`]
/// when `cdf(cfg.upper) < u` or the iteration budget runs out.
pub fn invert<F>(n: usize, u: f64, cdf: F, cfg: &InversionConfig) -> Result<f64, Error>
where
  F: Fn(f64) -> f64,
{
  let objective = Objective::new(u, cdf);
  let mut convergency = BracketConvergency::new(cfg);

  tracing::trace!(n, u, lower = cfg.lower, upper = cfg.upper, "inverting cdf");
  match find_root_brent(
    cfg.lower,
    cfg.upper,
    |x| objective.evaluate(x),
    &mut convergency,
  ) {
    Ok(x) => {
      tracing::trace!(n, u, x, "quantile found");
      Ok(x)
    }
    Err(err) => {
      tracing::warn!(n, u, %err, "root search failed");
      Err(Error::BracketingFailure {
        low: cfg.lower,
        high: cfg.upper,
        reason: err.to_string(),
      })
    }
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use tracing_test::traced_test;

  use super::*;

  // cdf of Exp(rate): 1 - e^{-rate x}
  fn exp_cdf(rate: f64) -> impl Fn(f64) -> f64 {
    move |x| {
      if x <= 0.0 {
        return 0.0;
      }
      1.0 - (-rate * x).exp()
    }
  }

  #[test]
  fn objective_is_target_minus_cdf() {
    let obj = Objective::new(0.5, exp_cdf(2.0));
    assert_eq!(obj.evaluate(0.0), 0.5);
    assert_abs_diff_eq!(obj.evaluate(2f64.ln() / 2.0), 0.0, epsilon = 1e-15);
    assert!(obj.evaluate(10.0) < 0.0);
  }

  #[test]
  fn finds_known_quantile() {
    for &u in &[0.01, 0.5, 0.99] {
      let x = invert(3, u, exp_cdf(3.0), &InversionConfig::EXACT).unwrap();
      assert_abs_diff_eq!(x, -(1.0 - u).ln() / 3.0, epsilon = 1e-8);
    }
  }

  // e^{-1/x}, flat near 0 like the lower tail of A_n^2
  fn frechet_cdf(x: f64) -> f64 {
    if x <= 0.0 {
      return 0.0;
    }
    (-1.0 / x).exp()
  }

  #[test]
  fn tolerance_applies_to_the_statistic() {
    for &u in &[1e-12, 1e-7] {
      let x = invert(1, u, frechet_cdf, &InversionConfig::QUICK).unwrap();
      assert_abs_diff_eq!(x, -1.0 / u.ln(), epsilon = 1e-5);
    }
    let u = 1.0 - 1e-7;
    let x = invert(1, u, exp_cdf(1.0), &InversionConfig::QUICK).unwrap();
    assert_abs_diff_eq!(x, 7.0 * 10f64.ln(), epsilon = 1e-4);
  }

  #[test]
  fn bracket_convergency_ignores_residual() {
    let mut conv = BracketConvergency::new(&InversionConfig::QUICK);
    assert!(!conv.is_root_found(1e-300));
    assert!(conv.is_root_found(0.0));
    assert!(conv.is_converged(1.0, 1.0 + 5e-6));
    assert!(!conv.is_converged(1.0, 1.0 + 5e-5));
    assert!(conv.is_iteration_limit_reached(100));
    assert!(!conv.is_iteration_limit_reached(99));
  }

  #[test]
  fn config_constructor_and_defaults() {
    let cfg = InversionConfig::new(0.0, 50.0, 1e-10, 100);
    assert_eq!(cfg, InversionConfig::default());
    assert_eq!(InversionConfig::QUICK.tolerance, 1e-5);
  }

  #[test]
  #[traced_test]
  fn reports_bracketing_failure() {
    let cfg = InversionConfig::new(0.0, 0.001, 1e-10, 100);
    let err = invert(1, 0.99, exp_cdf(1.0), &cfg).unwrap_err();
    assert!(matches!(err, Error::BracketingFailure { high, .. } if high == 0.001));
    assert!(logs_contain("root search failed"));
  }
}
