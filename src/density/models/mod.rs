//! density::models — concrete density models.
//!
//! Currently hosts [`DiagGaussian`], the diagonal-covariance Gaussian used as
//! the per-component scorer of mixture classifiers.

pub mod gaussian;

pub use self::gaussian::DiagGaussian;
