//! density — diagonal-covariance Gaussian scoring with variance flooring.
//!
//! Purpose
//! -------
//! Provide the density primitive that larger probabilistic classifiers
//! (mixtures, per-class models) evaluate per sample: a diagonal Gaussian that
//! returns a stable log-likelihood and lets an external trainer update its
//! mean, variance and variance floor between evaluation phases.
//!
//! Key behaviors
//! -------------
//! - [`DiagGaussian`] owns the parameter vectors and the cached
//!   normalization constant `n·ln(2π) + Σ ln σ²ᵢ`, recomputed after every
//!   mutation that changes the dimension or the variance.
//! - Variance flooring is re-applied whenever the variance or the floor
//!   changes; zero variances are handled per [`DegeneracyPolicy`].
//! - [`Scoreable`] and [`LogDensity`] expose scoring as narrow capabilities
//!   so heterogeneous models can be composed without inheritance.
//! - [`GaussianParams`] is the lossless snapshot a serializer reads and
//!   writes; the constant is never part of it.
//!
//! Invariants & assumptions
//! ------------------------
//! - `mean`, `variance` and `variance_thresholds` always have length
//!   `dimension()`.
//! - `variance[i] >= variance_thresholds[i] >= 0` and `variance[i] > 0`
//!   after every successful mutation.
//! - A failed mutation leaves the model unchanged.
//!
//! Conventions
//! -----------
//! - Inputs are borrowed as `ndarray::ArrayView1<f64>`; getters return owned
//!   copies.
//! - Errors are reported as [`DensityError`]; nothing panics on bad input.
//! - Mutators may emit `slog` records when the `obs_slog` feature is enabled
//!   and `DensityOptions::verbose` is set. Scoring never logs.
//!
//! Downstream usage
//! ----------------
//! - Trainers call `set_mean`, `set_variance`, `set_variance_thresholds`
//!   (or `set_variance_thresholds_factor`) once per iteration.
//! - Classifiers call `log_likelihood` / `forward` per sample, possibly from
//!   several threads at once on a shared `&DiagGaussian`.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`models::gaussian`] cover the reference scenarios,
//!   flooring, degeneracy policies, atomicity and deep copies; the
//!   [`core`] submodules test their helpers in isolation.
//! - `tests/integration_gaussian_pipeline.rs` drives the public surface end
//!   to end (training phase, persistence, concurrent scoring, log-domain
//!   accumulation).

pub mod core;
pub mod errors;
pub mod models;
pub mod traits;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{DegeneracyPolicy, DensityOptions, GaussianParams};
pub use self::errors::{DensityError, DensityResult};
pub use self::models::DiagGaussian;
pub use self::traits::{LogDensity, Scoreable};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_gaussian::density::prelude::*;
//
// to import the density surface, including the capability traits, in a
// single line.

pub mod prelude {
    pub use super::{
        DegeneracyPolicy, DensityError, DensityOptions, DensityResult, DiagGaussian,
        GaussianParams, LogDensity, Scoreable,
    };
}
