//! Stable addition and subtraction of values held as natural logarithms.
//!
//! A log-domain value `a` stands for the non-negative quantity `exp(a)`.
//! Combining two of them naïvely (`(a.exp() + b.exp()).ln()`) overflows for
//! large operands and underflows to `ln(0)` for very negative ones, which is
//! exactly the regime of per-sample likelihoods. The helpers here factor out
//! the larger operand so only `exp` of a non-positive number is ever taken.
//!
//! # Provided items
//! - [`LOG_ZERO`]: finite sentinel for `ln(0)`.
//! - [`MINUS_LOG_THRESHOLD`]: differences below this are lost in `f64`
//!   rounding and the smaller term is dropped.
//! - [`LOG_2PI`]: `ln(2π)`, the per-dimension Gaussian normalization term.
//! - [`log_add`], [`log_sub`], [`log_sum`].
use crate::log_domain::errors::{LogDomainError, LogDomainResult};
use ndarray::ArrayView1;

/// Log-domain representation of exactly zero.
///
/// A finite stand-in for `-∞` so that sums such as `LOG_ZERO + c` stay
/// comparable instead of turning into NaN.
pub const LOG_ZERO: f64 = -f64::MAX;

/// Cutoff on `lo - hi` below which `exp(lo - hi)` no longer changes `1.0`
/// in double precision (`exp(-39.14) ≈ 1e-17`).
pub const MINUS_LOG_THRESHOLD: f64 = -39.14;

/// Natural log of `2π`.
pub const LOG_2PI: f64 = 1.837_877_066_409_345_5;

/// Switch point of the two-branch `ln(1 - exp(d))` evaluation.
const MINUS_LN_2: f64 = -std::f64::consts::LN_2;

/// Read `-∞` as [`LOG_ZERO`] so `0.0_f64.ln()` can be passed in directly.
#[inline]
fn as_log_value(x: f64) -> f64 {
    if x == f64::NEG_INFINITY { LOG_ZERO } else { x }
}

/// Stable `ln(1 - exp(d))` for `d < 0`.
///
/// Near zero `1 - exp(d)` cancels, so `-expm1(d)` is used there; further out
/// `exp(d)` is small and `ln_1p(-exp(d))` keeps full precision.
#[inline]
fn log1m_exp(d: f64) -> f64 {
    if d > MINUS_LN_2 { (-d.exp_m1()).ln() } else { (-d.exp()).ln_1p() }
}

/// Log-domain addition: `ln(exp(a) + exp(b))`.
///
/// Parameters
/// ----------
/// - `a`, `b`: `f64`
///   Log-domain operands. [`LOG_ZERO`] and `-∞` both stand for zero.
///
/// Returns
/// -------
/// `LogDomainResult<f64>`
///   - The larger operand if the smaller one is more than
///     `|MINUS_LOG_THRESHOLD|` below it.
///   - `hi + ln_1p(exp(lo - hi))` otherwise.
///
/// Errors
/// ------
/// - `LogDomainError::NotANumber`
///   Returned when `lo - hi` is NaN (a NaN operand, or both operands `+∞`).
///
/// Notes
/// -----
/// - Commutative bit-for-bit: operands are ordered before any arithmetic.
/// - `log_add(a, LOG_ZERO) == a` exactly for every finite `a`.
///
/// Examples
/// --------
/// ```rust
/// use rust_gaussian::log_domain::log_add;
///
/// let c = log_add(2.0_f64.ln(), 3.0_f64.ln()).unwrap();
/// assert!((c.exp() - 5.0).abs() < 1e-12);
/// ```
pub fn log_add(a: f64, b: f64) -> LogDomainResult<f64> {
    let (x, y) = (as_log_value(a), as_log_value(b));
    let (hi, lo) = if x < y { (y, x) } else { (x, y) };

    let minus_dif = lo - hi;
    if minus_dif.is_nan() {
        return Err(LogDomainError::NotANumber { a, b });
    }
    if minus_dif < MINUS_LOG_THRESHOLD {
        return Ok(hi);
    }
    Ok(hi + minus_dif.exp().ln_1p())
}

/// Log-domain subtraction: `ln(exp(a) - exp(b))`, defined for `a >= b`.
///
/// Parameters
/// ----------
/// - `a`: `f64`
///   Minuend in log space.
/// - `b`: `f64`
///   Subtrahend in log space; must not exceed `a`.
///
/// Returns
/// -------
/// `LogDomainResult<f64>`
///   - Exactly [`LOG_ZERO`] when `a == b`.
///   - `a` when `b - a < MINUS_LOG_THRESHOLD`.
///   - `a + ln(1 - exp(b - a))` otherwise.
///
/// Errors
/// ------
/// - `LogDomainError::NotANumber`
///   Returned when `b - a` is NaN.
/// - `LogDomainError::NegativeDifference`
///   Returned when `a < b`; the difference of the underlying quantities would
///   be negative and has no logarithm.
///
/// Examples
/// --------
/// ```rust
/// use rust_gaussian::log_domain::{LOG_ZERO, log_sub};
///
/// let c = log_sub(5.0_f64.ln(), 3.0_f64.ln()).unwrap();
/// assert!((c.exp() - 2.0).abs() < 1e-12);
/// assert_eq!(log_sub(1.0, 1.0).unwrap(), LOG_ZERO);
/// assert!(log_sub(0.0, 1.0).is_err());
/// ```
pub fn log_sub(a: f64, b: f64) -> LogDomainResult<f64> {
    let (x, y) = (as_log_value(a), as_log_value(b));

    let minus_dif = y - x;
    if minus_dif.is_nan() {
        return Err(LogDomainError::NotANumber { a, b });
    }
    if x < y {
        return Err(LogDomainError::NegativeDifference { a, b });
    }
    if x == y {
        return Ok(LOG_ZERO);
    }
    if minus_dif < MINUS_LOG_THRESHOLD {
        return Ok(x);
    }
    Ok(x + log1m_exp(minus_dif))
}

/// Log-domain sum of a vector: `ln(Σ exp(values[i]))`.
///
/// Folds [`log_add`] from [`LOG_ZERO`], so an empty view yields `LOG_ZERO`
/// and the first NaN encountered is reported.
pub fn log_sum(values: ArrayView1<'_, f64>) -> LogDomainResult<f64> {
    values.iter().try_fold(LOG_ZERO, |acc, &v| log_add(acc, v))
}
