//! rust_gaussian — diagonal-covariance Gaussian scoring with stable log-domain
//! arithmetic, with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the density primitive to Python via the `_rust_gaussian` extension module.
//! When the `python-bindings` feature is enabled, this module defines the
//! Python-facing class and submodules used by the `rust_gaussian` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`log_domain` and `density`) as the
//!   public crate surface.
//! - Define the `Gaussian` `#[pyclass]` wrapper, the `log_add`/`log_sub`
//!   functions and the `#[pymodule]` initializer for `_rust_gaussian`.
//! - Register the `density` and `log_domain` Python submodules under
//!   `rust_gaussian` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - Python-visible methods mirror the invariants of [`DiagGaussian`]: length
//!   checks, flooring and the degeneracy policy apply unchanged.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as [`DensityError`] /
//!   [`LogDomainError`](log_domain::LogDomainError) internally and converted
//!   to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on [`density`] and
//!   [`log_domain`] and can ignore the items guarded by `python-bindings`.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by the integration test under `tests/`.

pub mod density;
pub mod log_domain;
pub mod utils;

pub use crate::density::{DensityError, DensityResult, DiagGaussian};

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{
    density::{DegeneracyPolicy, DensityOptions, Scoreable},
    utils::extract_vector,
};

/// Gaussian — Python-facing wrapper for [`DiagGaussian`].
///
/// Purpose
/// -------
/// Expose the diagonal Gaussian to Python callers while preserving the core
/// Rust invariants and error handling.
///
/// Parameters
/// ----------
/// Constructed from Python via `Gaussian(n_inputs=0, clamp_epsilon=None,
/// verbose=False)`:
/// - `n_inputs`: feature dimensionality.
/// - `clamp_epsilon`: if given, zero variances are clamped to this value
///   instead of being rejected.
/// - `verbose`: enables mutator logging when built with `obs_slog`.
///
/// Notes
/// -----
/// - `set_variance_thresholds` accepts either a vector of floors or a single
///   float factor applied to the current variance.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_gaussian.density")]
pub struct Gaussian {
    /// Underlying Rust model.
    pub inner: DiagGaussian,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Gaussian {
    #[new]
    #[pyo3(
        text_signature = "(n_inputs=0, /, clamp_epsilon=None, verbose=False)",
        signature = (n_inputs = 0, clamp_epsilon = None, verbose = false)
    )]
    pub fn new(n_inputs: usize, clamp_epsilon: Option<f64>, verbose: bool) -> PyResult<Gaussian> {
        let degeneracy = match clamp_epsilon {
            Some(eps) => DegeneracyPolicy::clamp(eps)?,
            None => DegeneracyPolicy::Reject,
        };
        let options = DensityOptions::new(degeneracy, verbose);
        Ok(Gaussian { inner: DiagGaussian::with_options(n_inputs, options) })
    }

    pub fn resize(&mut self, n_inputs: usize) {
        self.inner.resize(n_inputs);
    }

    pub fn set_mean<'py>(&mut self, py: Python<'py>, mean: &Bound<'py, PyAny>) -> PyResult<()> {
        let mean = extract_vector(py, mean)?;
        self.inner.set_mean(mean.view())?;
        Ok(())
    }

    pub fn set_variance<'py>(
        &mut self, py: Python<'py>, variance: &Bound<'py, PyAny>,
    ) -> PyResult<()> {
        let variance = extract_vector(py, variance)?;
        self.inner.set_variance(variance.view())?;
        Ok(())
    }

    pub fn set_variance_thresholds<'py>(
        &mut self, py: Python<'py>, thresholds: &Bound<'py, PyAny>,
    ) -> PyResult<()> {
        if let Ok(factor) = thresholds.extract::<f64>() {
            self.inner.set_variance_thresholds_factor(factor)?;
            return Ok(());
        }
        let thresholds = extract_vector(py, thresholds)?;
        self.inner.set_variance_thresholds(thresholds.view())?;
        Ok(())
    }

    pub fn log_likelihood<'py>(&self, py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<f64> {
        let x = extract_vector(py, x)?;
        Ok(self.inner.log_likelihood(x.view())?)
    }

    pub fn forward<'py>(&self, py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<f64> {
        let x = extract_vector(py, x)?;
        Ok(self.inner.forward(x.view())?)
    }

    #[getter]
    pub fn n_inputs(&self) -> usize {
        self.inner.dimension()
    }

    #[getter]
    pub fn mean(&self) -> Vec<f64> {
        self.inner.mean().to_vec()
    }

    #[getter]
    pub fn variance(&self) -> Vec<f64> {
        self.inner.variance().to_vec()
    }

    #[getter]
    pub fn variance_thresholds(&self) -> Vec<f64> {
        self.inner.variance_thresholds().to_vec()
    }

    #[getter]
    pub fn norm_constant(&self) -> f64 {
        self.inner.norm_constant()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// `ln(exp(a) + exp(b))`; raises `ValueError` on NaN.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "log_add")]
fn py_log_add(a: f64, b: f64) -> PyResult<f64> {
    Ok(log_domain::log_add(a, b)?)
}

/// `ln(exp(a) - exp(b))`; raises `ValueError` on NaN or when `a < b`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "log_sub")]
fn py_log_sub(a: f64, b: f64) -> PyResult<f64> {
    Ok(log_domain::log_sub(a, b)?)
}

/// _rust_gaussian — PyO3 module initializer for the Python extension.
///
/// Creates the `density` and `log_domain` submodules, attaches them to the
/// parent module and registers them in `sys.modules` so they are importable
/// via dotted paths. Invoked by Python on import; never called directly.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_gaussian<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let density_mod = PyModule::new(_py, "density")?;
    let log_domain_mod = PyModule::new(_py, "log_domain")?;
    density(_py, m, &density_mod)?;
    log_domain_functions(_py, m, &log_domain_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_gaussian.density", density_mod)?;

    _py.import("sys")?.getattr("modules")?.set_item("rust_gaussian.log_domain", log_domain_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn density<'py>(
    _py: Python, rust_gaussian: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<Gaussian>()?;
    rust_gaussian.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn log_domain_functions<'py>(
    _py: Python, rust_gaussian: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_log_add, m)?)?;
    m.add_function(wrap_pyfunction!(py_log_sub, m)?)?;
    m.add("LOG_ZERO", log_domain::LOG_ZERO)?;
    rust_gaussian.add_submodule(m)?;
    Ok(())
}
