//! Capability traits for scoring models.
//!
//! - [`Scoreable`]: "score this fixed-length input" — what a mixture or a
//!   classifier needs from each of its components. Object-safe, so
//!   heterogeneous scorers can live side by side as `Box<dyn Scoreable>`.
//! - [`LogDensity`]: "evaluate the log-likelihood of this sample" — what a
//!   trainer needs from a density.
//!
//! A density implementing both must return the same value from
//! `forward` and `log_likelihood`.
use crate::density::errors::DensityResult;
use ndarray::ArrayView1;

/// Generic scoring interface.
///
/// Required:
/// - `n_inputs()`: length of the vectors `forward` accepts.
/// - `forward(x)`: score `x`; returns `DensityError::LengthMismatch` when
///   `x.len() != n_inputs()`.
pub trait Scoreable {
    fn n_inputs(&self) -> usize;
    fn forward(&self, input: ArrayView1<'_, f64>) -> DensityResult<f64>;
}

/// Log-density interface.
pub trait LogDensity {
    fn log_likelihood(&self, sample: ArrayView1<'_, f64>) -> DensityResult<f64>;
}
