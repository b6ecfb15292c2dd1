//! Gaussian parameter snapshot — the lossless persistence surface of a
//! diagonal Gaussian.
//!
//! Purpose
//! -------
//! Give serializers (and trainers that want to hand a full parameter set to a
//! model in one step) a plain container for the triple
//! `(mean, variance, variance_thresholds)`. The dimension is implied by the
//! common length; the normalization constant is never stored and is always
//! rederived by the model.
//!
//! Invariants & assumptions
//! ------------------------
//! - All three vectors have the same length once constructed through
//!   [`GaussianParams::new`].
//! - Value-level checks (finiteness, non-negative floors, flooring) are left
//!   to [`DiagGaussian::from_params`](crate::density::DiagGaussian::from_params),
//!   which applies the same rules as the individual setters.
use crate::density::errors::{DensityError, DensityResult};
use ndarray::Array1;

/// GaussianParams — mean, variance and variance floor of a diagonal Gaussian.
///
/// Fields
/// ------
/// - `mean`: `Array1<f64>` — per-dimension mean.
/// - `variance`: `Array1<f64>` — diagonal of the covariance matrix.
/// - `variance_thresholds`: `Array1<f64>` — per-dimension variance floor.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianParams {
    pub mean: Array1<f64>,
    pub variance: Array1<f64>,
    pub variance_thresholds: Array1<f64>,
}

impl GaussianParams {
    /// Bundle three parameter vectors after checking their lengths agree.
    ///
    /// Errors
    /// ------
    /// - `DensityError::ParamsLengthMismatch` if the lengths differ.
    pub fn new(
        mean: Array1<f64>, variance: Array1<f64>, variance_thresholds: Array1<f64>,
    ) -> DensityResult<Self> {
        if mean.len() != variance.len() || mean.len() != variance_thresholds.len() {
            return Err(DensityError::ParamsLengthMismatch {
                mean: mean.len(),
                variance: variance.len(),
                variance_thresholds: variance_thresholds.len(),
            });
        }
        Ok(GaussianParams { mean, variance, variance_thresholds })
    }

    /// Feature dimensionality shared by the three vectors.
    pub fn dimension(&self) -> usize {
        self.mean.len()
    }
}
