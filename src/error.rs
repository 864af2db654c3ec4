//! # Error
//!
//! $$
//! n\ge 1,\qquad u\in[0,1]
//! $$
//!
use thiserror::Error as ThisError;

/// Errors raised while evaluating the Anderson-Darling distribution.
#[derive(Debug, Clone, PartialEq, ThisError)]
#[non_exhaustive]
pub enum Error {
  /// The sample size parameter must be at least 1.
  #[error("Sample size n must be at least 1, but was given {given}.")]
  InvalidSampleSize { given: usize },

  /// The probability passed to the inverse CDF is outside `[0, 1]` (or NaN).
  #[error("Probability must be in [0, 1], but was given {0}.")]
  InvalidProbability(f64),

  /// The root finder could not isolate a quantile in the search interval.
  #[error("Root search failed in [{low}, {high}]: {reason}")]
  BracketingFailure { low: f64, high: f64, reason: String },
}

pub(crate) fn check_n(n: usize) -> Result<(), Error> {
  if n < 1 {
    return Err(Error::InvalidSampleSize { given: n });
  }
  Ok(())
}

pub(crate) fn check_probability(u: f64) -> Result<(), Error> {
  if !(0.0..=1.0).contains(&u) {
    return Err(Error::InvalidProbability(u));
  }
  Ok(())
}
