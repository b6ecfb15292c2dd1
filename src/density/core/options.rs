//! Density options — configuration for degenerate-variance handling and
//! diagnostics.
//!
//! Purpose
//! -------
//! Collect the configuration knobs of a density model in one place so the
//! policy for zero variances and the verbosity of mutators are explicit and
//! reproducible, instead of being hidden in ad-hoc flags.
//!
//! Key behaviors
//! -------------
//! - Represent the zero-variance policy via [`DegeneracyPolicy`]: either
//!   reject a configuration whose floored variance is `<= 0`, or clamp such
//!   entries to a small positive epsilon.
//! - Bundle the policy with a `verbose` flag in [`DensityOptions`]; when the
//!   `obs_slog` feature is enabled, verbose models emit structured records
//!   from their mutators.
//!
//! Invariants & assumptions
//! ------------------------
//! - A `Clamp` policy always carries a finite, strictly positive epsilon:
//!   [`ClampEpsilon`] has a private field and is only built by the validating
//!   constructors on [`DegeneracyPolicy`].
//! - Options are plain data: cheap to copy, compared by value.
//!
//! Testing notes
//! -------------
//! - Unit tests check the documented defaults and epsilon validation. The
//!   effect of each policy on a model is tested alongside the model.
use crate::density::errors::{DensityError, DensityResult};

/// Default epsilon used by [`DegeneracyPolicy::clamp_default`].
pub const DEFAULT_CLAMP_EPSILON: f64 = 1e-10;

/// ClampEpsilon — validated replacement value for degenerate variances.
///
/// Only [`DegeneracyPolicy::clamp`] and [`DegeneracyPolicy::clamp_default`]
/// build one, so a `Clamp` policy always carries a finite epsilon `> 0`.
///
/// ```compile_fail
/// use rust_gaussian::density::core::options::{ClampEpsilon, DegeneracyPolicy};
/// let _ = DegeneracyPolicy::Clamp { epsilon: ClampEpsilon(0.0) };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampEpsilon(f64);

impl ClampEpsilon {
    /// The wrapped epsilon.
    pub fn value(self) -> f64 {
        self.0
    }
}

/// DegeneracyPolicy — what to do with a variance that is `<= 0` after
/// flooring.
///
/// Variants
/// --------
/// - `Reject`
///   The mutation fails with `DensityError::DegenerateVariance` and the model
///   is left untouched.
/// - `Clamp { epsilon }`
///   Offending entries are raised to `epsilon` before the normalization
///   constant is recomputed.
///
/// Notes
/// -----
/// - A degenerate variance can only arise when the matching floor is `0`,
///   because any positive floor already lifts the variance above zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DegeneracyPolicy {
    #[default]
    Reject,
    Clamp { epsilon: ClampEpsilon },
}

impl DegeneracyPolicy {
    /// Build a validated clamping policy.
    ///
    /// Errors
    /// ------
    /// - `DensityError::InvalidEpsilon` if `epsilon` is NaN, ±∞ or `<= 0`.
    pub fn clamp(epsilon: f64) -> DensityResult<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(DensityError::InvalidEpsilon { value: epsilon });
        }
        Ok(DegeneracyPolicy::Clamp { epsilon: ClampEpsilon(epsilon) })
    }

    /// Clamping policy with [`DEFAULT_CLAMP_EPSILON`].
    pub fn clamp_default() -> Self {
        DegeneracyPolicy::Clamp { epsilon: ClampEpsilon(DEFAULT_CLAMP_EPSILON) }
    }

    /// Clamp epsilon, or `None` under `Reject`.
    pub fn epsilon(&self) -> Option<f64> {
        match self {
            DegeneracyPolicy::Reject => None,
            DegeneracyPolicy::Clamp { epsilon } => Some(epsilon.value()),
        }
    }
}

/// DensityOptions — run-time configuration carried by a density model.
///
/// Fields
/// ------
/// - `degeneracy`: [`DegeneracyPolicy`]
///   Handling of variances that are `<= 0` after flooring.
/// - `verbose`: `bool`
///   If `true` and the `obs_slog` feature is enabled, mutators log resize and
///   flooring events. Ignored otherwise.
///
/// Default
/// -------
/// - `degeneracy`: `Reject`
/// - `verbose`: `false`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DensityOptions {
    pub degeneracy: DegeneracyPolicy,
    pub verbose: bool,
}

impl DensityOptions {
    /// Construct options from an already-validated policy.
    pub fn new(degeneracy: DegeneracyPolicy, verbose: bool) -> DensityOptions {
        DensityOptions { degeneracy, verbose }
    }
}
