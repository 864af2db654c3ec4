//! # Traits
//!
//! $$
//! \text{Trait contracts: }x\mapsto\left(f_n(x),F_n(x),\bar F_n(x)\right),\quad u\mapsto F_n^{-1}(u)
//! $$
//!
use crate::error::Error;

/// Capability set shared by the exact and quick evaluators.
///
/// The sample size is validated when the distribution is built, so only the
/// inverse, which also validates its argument, can fail.
pub trait DistributionExt {
  /// Probability density function of the distribution
  fn pdf(&self, x: f64) -> f64;

  /// Cumulative distribution function of the distribution
  fn cdf(&self, x: f64) -> f64;

  /// Survival function `1 - cdf(x)`
  fn sf(&self, x: f64) -> f64 {
    (1.0 - self.cdf(x)).clamp(0.0, 1.0)
  }

  /// Inverse cumulative distribution function of the distribution
  fn inv_cdf(&self, p: f64) -> Result<f64, Error>;

  /// Median of the distribution
  fn median(&self) -> Result<f64, Error> {
    self.inv_cdf(0.5)
  }

  /// Parameters in catalogue order, here `[n]`.
  fn params(&self) -> [f64; 1];

  /// Interval outside of which the density is (practically) zero.
  fn support(&self) -> (f64, f64);
}
