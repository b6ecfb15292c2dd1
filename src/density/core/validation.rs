//! Density validation helpers — reusable checks for vector lengths and
//! parameter values.
//!
//! Purpose
//! -------
//! Centralize the boundary checks every mutator and evaluator of a density
//! model performs, so the model code can fail fast with structured errors
//! before touching its state.
//!
//! Conventions
//! -----------
//! - Functions return [`DensityResult`] and never panic on invalid inputs.
//! - The first violation encountered (lowest index) is reported.
//! - No I/O and no logging; only lengths and values are inspected.
use crate::density::errors::{DensityError, DensityResult};
use ndarray::ArrayView1;

/// Check that `values.len() == expected`.
///
/// Errors
/// ------
/// - `DensityError::LengthMismatch { what, expected, actual }`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_gaussian::density::core::validation::validate_length;
/// # use rust_gaussian::density::DensityError;
/// use ndarray::array;
///
/// let v = array![1.0, 2.0];
/// assert!(validate_length(v.view(), 2, "mean").is_ok());
/// assert!(matches!(
///     validate_length(v.view(), 3, "mean"),
///     Err(DensityError::LengthMismatch { expected: 3, actual: 2, .. })
/// ));
/// ```
pub fn validate_length(
    values: ArrayView1<f64>, expected: usize, what: &'static str,
) -> DensityResult<()> {
    if values.len() != expected {
        return Err(DensityError::LengthMismatch { what, expected, actual: values.len() });
    }
    Ok(())
}

/// Check that every entry is finite.
///
/// Errors
/// ------
/// - `DensityError::NonFiniteValue` with the first offending index and value.
pub fn validate_finite(values: ArrayView1<f64>, what: &'static str) -> DensityResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(DensityError::NonFiniteValue { what, index, value: values[index] }),
        None => Ok(()),
    }
}

/// Validate a parameter vector: length first, then finiteness.
pub fn validate_param_vector(
    values: ArrayView1<f64>, expected: usize, what: &'static str,
) -> DensityResult<()> {
    validate_length(values, expected, what)?;
    validate_finite(values, what)
}

/// Validate a variance-floor vector of length `expected`.
///
/// Floors must be finite and non-negative; a negative floor would silently
/// permit negative variances.
///
/// Errors
/// ------
/// - `DensityError::LengthMismatch`
/// - `DensityError::NonFiniteValue`
/// - `DensityError::NegativeThreshold`
pub fn validate_thresholds(thresholds: ArrayView1<f64>, expected: usize) -> DensityResult<()> {
    validate_param_vector(thresholds, expected, "variance_thresholds")?;
    match thresholds.iter().position(|&t| t < 0.0) {
        Some(index) => Err(DensityError::NegativeThreshold { index, value: thresholds[index] }),
        None => Ok(()),
    }
}

/// Validate the scaling factor used to derive floors from the current
/// variance.
///
/// Errors
/// ------
/// - `DensityError::InvalidFactor` if `factor` is NaN, ±∞ or negative.
pub fn validate_factor(factor: f64) -> DensityResult<f64> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(DensityError::InvalidFactor { factor });
    }
    Ok(factor)
}
