//! density::core — configuration, validation and variance plumbing shared by
//! density models.
//!
//! Purpose
//! -------
//! Hold the pieces a density model is assembled from but that are not the
//! model itself: run-time options, boundary validation, the variance-floor
//! and normalization-constant helpers, the parameter snapshot used for
//! persistence, and the optional diagnostics hooks.
//!
//! Key behaviors
//! -------------
//! - [`options`]: [`DensityOptions`] and the zero-variance
//!   [`DegeneracyPolicy`].
//! - [`validation`]: length, finiteness, floor and factor checks returning
//!   [`DensityError`](crate::density::DensityError).
//! - [`variance`]: elementwise flooring, degeneracy handling and
//!   `n·ln(2π) + Σ ln σ²ᵢ`.
//! - [`params`]: [`GaussianParams`], the lossless `(mean, variance, floor)`
//!   snapshot.
//! - `observer` (crate-private): `slog` records for mutators when the
//!   `obs_slog` feature is on.
//!
//! Conventions
//! -----------
//! - Vectors are `ndarray::Array1<f64>` when owned and `ArrayView1<f64>` when
//!   borrowed from a caller.
//! - Helpers in this module never mutate a model; they compute candidates
//!   that the model commits only once every check has passed.

pub mod options;
pub mod params;
pub mod validation;
pub mod variance;

pub(crate) mod observer;

pub use self::options::{ClampEpsilon, DEFAULT_CLAMP_EPSILON, DegeneracyPolicy, DensityOptions};
pub use self::params::GaussianParams;
pub use self::variance::{FlooredVariance, apply_floor, floor_variance, norm_constant};
