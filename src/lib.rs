//! # ad-dist
//!
//! $$
//! P\left[A_n^2\le x\right],\qquad A_n^2=n\int_0^1\frac{\left(F_n(t)-t\right)^2}{t(1-t)}\,dt
//! $$
//!
//! Distribution of the Anderson-Darling goodness-of-fit statistic under the
//! null hypothesis, for a sample of `n` independent uniforms.
//!
//! Two evaluators share the same interface:
//!
//! - [`AndersonDarling`] uses Marsaglia & Marsaglia (2004): the limiting
//!   series followed by an empirical correction in `1/n`.
//! - [`AndersonDarlingQuick`] interpolates precomputed tables in the body and
//!   uses Sinclair & Spurr (1988) in the tails, accurate to about `1e-3`.
//!
//! Every operation exists as a free function of `(n, x)` in its module and as
//! a method on a distribution instance through [`DistributionExt`].
pub mod distributions;
pub mod error;
pub mod traits;

pub use distributions::AndersonDarling;
pub use distributions::AndersonDarlingQuick;
pub use distributions::InversionConfig;
pub use distributions::Strategy;
pub use error::Error;
pub use traits::DistributionExt;
