//! Errors for density models (shape preconditions, parameter validation,
//! degenerate variances and numeric anomalies during scoring).
//!
//! This module defines a single error type, [`DensityError`], returned by
//! every fallible operation on [`DiagGaussian`](crate::density::DiagGaussian)
//! and its supporting configuration types.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - `what` fields name the vector that failed validation (`"mean"`,
//!   `"variance"`, `"variance_thresholds"`, `"input"`).
//! - Log-domain failures raised inside density code are wrapped in
//!   [`DensityError::LogDomain`] so `?` works across both subsystems.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::log_domain::errors::LogDomainError;

/// Crate-wide result alias for density operations.
pub type DensityResult<T> = Result<T, DensityError>;

/// Unified error type for density models.
#[derive(Debug, Clone, PartialEq)]
pub enum DensityError {
    // ---- Shape preconditions ----
    /// A supplied vector does not match the model dimension.
    LengthMismatch { what: &'static str, expected: usize, actual: usize },

    /// A parameter snapshot carries vectors of different lengths.
    ParamsLengthMismatch { mean: usize, variance: usize, variance_thresholds: usize },

    // ---- Parameter validation ----
    /// A parameter entry is NaN/±inf.
    NonFiniteValue { what: &'static str, index: usize, value: f64 },

    /// Variance floors must be non-negative.
    NegativeThreshold { index: usize, value: f64 },

    /// Threshold scaling factor must be finite and >= 0.
    InvalidFactor { factor: f64 },

    /// Clamp epsilon must be finite and > 0.
    InvalidEpsilon { value: f64 },

    // ---- Degenerate configuration ----
    /// A floored variance is <= 0, so ln(variance) is undefined.
    DegenerateVariance { index: usize, value: f64 },

    // ---- Numeric anomalies ----
    /// Scoring produced NaN (an input entry was NaN).
    NumericAnomaly { value: f64 },

    /// Wrapper for failures of the log-domain helpers.
    LogDomain(LogDomainError),
}

impl std::error::Error for DensityError {}

impl std::fmt::Display for DensityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Shape preconditions ----
            DensityError::LengthMismatch { what, expected, actual } => {
                write!(f, "Length mismatch for {what}: expected {expected}, got {actual}.")
            }
            DensityError::ParamsLengthMismatch { mean, variance, variance_thresholds } => {
                write!(
                    f,
                    "Parameter vectors must share one length; got mean = {mean}, \
                     variance = {variance}, variance_thresholds = {variance_thresholds}."
                )
            }
            // ---- Parameter validation ----
            DensityError::NonFiniteValue { what, index, value } => {
                write!(f, "Entry {index} of {what} is non-finite: {value}")
            }
            DensityError::NegativeThreshold { index, value } => {
                write!(f, "Variance threshold at index {index} must be >= 0; got: {value}")
            }
            DensityError::InvalidFactor { factor } => {
                write!(f, "Variance threshold factor must be finite and >= 0; got: {factor}")
            }
            DensityError::InvalidEpsilon { value } => {
                write!(f, "Clamp epsilon must be finite and > 0; got: {value}")
            }
            // ---- Degenerate configuration ----
            DensityError::DegenerateVariance { index, value } => {
                write!(
                    f,
                    "Variance at index {index} is {value} after flooring; \
                     the normalization constant is undefined."
                )
            }
            // ---- Numeric anomalies ----
            DensityError::NumericAnomaly { value } => {
                write!(f, "Log-likelihood evaluated to {value}; the input contains NaN.")
            }
            DensityError::LogDomain(err) => write!(f, "Log-domain error: {err}"),
        }
    }
}

impl From<LogDomainError> for DensityError {
    fn from(err: LogDomainError) -> Self {
        DensityError::LogDomain(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<DensityError> for PyErr {
    fn from(err: DensityError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
