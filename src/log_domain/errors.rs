//! log_domain::errors — failures of stable log-space arithmetic.
//!
//! Purpose
//! -------
//! Report the two ways a log-domain operation can go wrong: an operand is
//! not-a-number, or a subtraction would produce a negative quantity. Callers
//! receive these as values instead of having diagnostics printed on their
//! behalf.
//!
//! Conventions
//! -----------
//! - Both variants carry the operands exactly as the caller supplied them.
//! - Under `python-bindings` every variant maps to a Python `ValueError` whose
//!   message is the `Display` text.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for log-domain operations.
pub type LogDomainResult<T> = Result<T, LogDomainError>;

/// Error conditions raised by [`log_add`](super::log_add),
/// [`log_sub`](super::log_sub) and [`log_sum`](super::log_sum).
///
/// Variants
/// --------
/// - `NotANumber { a, b }`
///   The difference of the operands is NaN, i.e. at least one operand is NaN
///   or both are `+∞`.
/// - `NegativeDifference { a, b }`
///   `log_sub(a, b)` was asked for `ln(exp(a) - exp(b))` with `a < b`.
#[derive(Debug, Clone, PartialEq)]
pub enum LogDomainError {
    // ---- Numeric anomalies ----
    NotANumber { a: f64, b: f64 },

    // ---- Preconditions ----
    NegativeDifference { a: f64, b: f64 },
}

impl std::error::Error for LogDomainError {}

impl std::fmt::Display for LogDomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogDomainError::NotANumber { a, b } => {
                write!(f, "Log-domain difference is NaN for operands a = {a}, b = {b}.")
            }
            LogDomainError::NegativeDifference { a, b } => {
                write!(f, "Log-domain subtraction requires a >= b; got a = {a}, b = {b}.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<LogDomainError> for PyErr {
    fn from(err: LogDomainError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
