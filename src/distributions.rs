//! # Distributions
//!
//! $$
//! A_n^2=-n-\frac1n\sum_{j=1}^{n}\left[(2j-1)\ln U_{(j)}+(2n+1-2j)\ln\left(1-U_{(j)}\right)\right]
//! $$
//!
//! Distribution of the Anderson-Darling statistic for `n` i.i.d. uniforms.
//! [`AndersonDarling`] evaluates the limiting series with a rational
//! finite-sample correction, [`AndersonDarlingQuick`] interpolates tables and
//! is accurate to about `1e-3`.
pub mod anderson_darling;
pub mod anderson_darling_quick;
pub mod asymptotic;
pub mod correction;
pub mod inversion;
pub mod single_sample;
pub mod tables;

pub use anderson_darling::AndersonDarling;
pub use anderson_darling_quick::AndersonDarlingQuick;
pub use asymptotic::Strategy;
pub use inversion::InversionConfig;

/// Above this the cdf is taken to be exactly 1.
pub const XBIG: f64 = 100.0;
/// Above this the survival function is taken to be exactly 0.
pub const XBIGM: f64 = 1000.0;

/// Support for a given sample size. For `n > 1` the upper end is a practical
/// cutoff; the statistic itself is unbounded.
pub(crate) fn support(n: usize) -> (f64, f64) {
  if n == 1 {
    (single_sample::X0, single_sample::X1)
  } else {
    (0.0, XBIGM)
  }
}
