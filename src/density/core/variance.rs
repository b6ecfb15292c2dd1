//! Variance flooring and the cached Gaussian normalization constant.
//!
//! The diagonal Gaussian log-density is
//!
//! ```text
//! ln p(x) = -0.5 * ( n·ln(2π) + Σ ln σ²ᵢ + Σ (xᵢ - μᵢ)² / σ²ᵢ )
//! ```
//!
//! The first two terms only depend on the dimension and the variance, so a
//! model caches them as `norm_constant` and recomputes them whenever either
//! changes. [`floor_variance`] produces a *candidate* variance vector that
//! is floored and checked for degeneracy, so the model can reject a mutation
//! before touching its state, then commit the candidate and recompute the
//! constant with [`norm_constant`].
use crate::{
    density::{
        core::options::DegeneracyPolicy,
        errors::{DensityError, DensityResult},
    },
    log_domain::LOG_2PI,
};
use ndarray::{Array1, ArrayView1, Zip};

/// Outcome of flooring a proposed variance vector.
#[derive(Debug, Clone, PartialEq)]
pub struct FlooredVariance {
    /// Variance after flooring and degeneracy handling; every entry is > 0.
    pub variance: Array1<f64>,
    /// Number of entries raised to their floor, a zero floor included.
    pub floored: usize,
    /// Number of entries raised to the clamp epsilon after flooring.
    pub clamped: usize,
}

/// Apply the variance floor elementwise.
///
/// `out[i] = thresholds[i]` when `variance[i] < thresholds[i]`, else
/// `variance[i]`. Returns the floored vector and the number of raised
/// entries. Both views must have the same length.
pub fn apply_floor(
    variance: ArrayView1<f64>, thresholds: ArrayView1<f64>,
) -> (Array1<f64>, usize) {
    let mut floored = 0usize;
    let out = Zip::from(&variance).and(&thresholds).map_collect(|&v, &t| {
        if v < t {
            floored += 1;
            t
        } else {
            v
        }
    });
    (out, floored)
}

/// `n·ln(2π) + Σ ln variance[i]`.
///
/// Assumes every entry is strictly positive; callers go through
/// [`floor_variance`] which guarantees it. Zero-length input yields `0`.
pub fn norm_constant(variance: ArrayView1<f64>) -> f64 {
    let log_det: f64 = variance.iter().map(|v| v.ln()).sum();
    variance.len() as f64 * LOG_2PI + log_det
}

/// Floor a proposed variance and resolve degenerate entries per `policy`.
///
/// Parameters
/// ----------
/// - `variance`: proposed variance, already length- and finiteness-checked.
/// - `thresholds`: current (or proposed) floors, same length.
/// - `policy`: handling of entries still `<= 0` after flooring.
///
/// Errors
/// ------
/// - `DensityError::DegenerateVariance` under `DegeneracyPolicy::Reject`,
///   reporting the first entry `<= 0`.
/// - `DensityError::DegenerateVariance` under either policy when an entry is
///   not finite and `> 0` once the policy has been applied.
pub fn floor_variance(
    variance: ArrayView1<f64>, thresholds: ArrayView1<f64>, policy: DegeneracyPolicy,
) -> DensityResult<FlooredVariance> {
    let (mut out, floored) = apply_floor(variance, thresholds);

    let mut clamped = 0usize;
    match policy {
        DegeneracyPolicy::Reject => {
            if let Some(index) = out.iter().position(|&v| v <= 0.0) {
                return Err(DensityError::DegenerateVariance { index, value: out[index] });
            }
        }
        DegeneracyPolicy::Clamp { epsilon } => {
            let epsilon = epsilon.value();
            out.mapv_inplace(|v| {
                if v <= 0.0 {
                    clamped += 1;
                    epsilon
                } else {
                    v
                }
            });
        }
    }

    // The constant takes ln of every entry.
    if let Some(index) = out.iter().position(|&v| !(v.is_finite() && v > 0.0)) {
        return Err(DensityError::DegenerateVariance { index, value: out[index] });
    }

    Ok(FlooredVariance { variance: out, floored, clamped })
}
