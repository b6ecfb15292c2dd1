//! log_domain — stable arithmetic on natural-log encoded quantities.
//!
//! Purpose
//! -------
//! Combine probabilities and densities that are stored as logarithms without
//! overflowing on large magnitudes or underflowing to `ln(0)` on very small
//! ones. This is the building block for mixture accumulation and for any
//! training code that sums per-component responsibilities.
//!
//! Key behaviors
//! -------------
//! - [`log_add`] computes `ln(exp(a) + exp(b))` by factoring out the larger
//!   operand.
//! - [`log_sub`] computes `ln(exp(a) - exp(b))` for `a >= b`, returning
//!   exactly [`LOG_ZERO`] when the operands are equal.
//! - [`log_sum`] folds `log_add` over a vector.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`LOG_ZERO`] is finite (`-f64::MAX`); `-∞` inputs are read as
//!   `LOG_ZERO`.
//! - A NaN difference is always reported as
//!   [`LogDomainError::NotANumber`], never returned as a value.
//!
//! Conventions
//! -----------
//! - All functions are pure: no logging, no I/O, no global state.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`log_arith`] cover symmetry, the `LOG_ZERO` identity,
//!   agreement with direct exponentiation on `[-50, 50]`, the `a < b`
//!   precondition of `log_sub` and NaN reporting.

pub mod errors;
pub mod log_arith;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{LogDomainError, LogDomainResult};
pub use self::log_arith::{LOG_2PI, LOG_ZERO, MINUS_LOG_THRESHOLD, log_add, log_sub, log_sum};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_gaussian::log_domain::prelude::*;
//
// to import the log-domain surface in a single line.

pub mod prelude {
    pub use super::errors::{LogDomainError, LogDomainResult};
    pub use super::log_arith::{LOG_ZERO, MINUS_LOG_THRESHOLD, log_add, log_sub, log_sum};
}
