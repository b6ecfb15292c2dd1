//! Structured diagnostics for density mutators (behind the `obs_slog`
//! feature).
//!
//! When the feature is enabled and a model's options have `verbose == true`,
//! resize and variance updates emit one `slog` record each through a shared
//! synchronous terminal logger on stderr. Records are written as they are
//! emitted, so nothing is pending at process exit. Without the feature every
//! hook compiles to a no-op. Evaluation paths never call into this module.
use crate::density::core::options::DensityOptions;

#[cfg(feature = "obs_slog")]
use slog::{Logger, info, o, warn};
#[cfg(feature = "obs_slog")]
use std::sync::OnceLock;

#[cfg(feature = "obs_slog")]
fn logger() -> &'static Logger {
    static LOGGER: OnceLock<Logger> = OnceLock::new();
    LOGGER.get_or_init(|| {
        use slog::Drain;
        let decorator = slog_term::PlainSyncDecorator::new(std::io::stderr());
        let drain = slog_term::FullFormat::new(decorator).build().fuse();
        Logger::root(drain, o!("component" => "rust_gaussian::density"))
    })
}

#[cfg(feature = "obs_slog")]
fn emit_resize(log: &Logger, dimension: usize) {
    info!(log, "resized"; "dimension" => dimension);
}

#[cfg(feature = "obs_slog")]
fn emit_variance_update(
    log: &Logger, operation: &'static str, dimension: usize, floored: usize, clamped: usize,
) {
    if clamped > 0 {
        warn!(log, "degenerate variance clamped";
            "operation" => operation, "dimension" => dimension, "clamped" => clamped);
    }
    info!(log, "variance updated";
        "operation" => operation, "dimension" => dimension, "floored" => floored);
}

/// Record a resize to `dimension`.
#[inline]
pub(crate) fn record_resize(options: &DensityOptions, dimension: usize) {
    #[cfg(feature = "obs_slog")]
    {
        if options.verbose {
            emit_resize(logger(), dimension);
        }
    }
    #[cfg(not(feature = "obs_slog"))]
    let _ = (options, dimension);
}

/// Record a variance update performed by `operation`.
///
/// `floored` and `clamped` count the entries raised to their floor and to the
/// clamp epsilon respectively; clamping is reported as a warning.
#[inline]
pub(crate) fn record_variance_update(
    options: &DensityOptions, operation: &'static str, dimension: usize, floored: usize,
    clamped: usize,
) {
    #[cfg(feature = "obs_slog")]
    {
        if options.verbose {
            emit_variance_update(logger(), operation, dimension, floored, clamped);
        }
    }
    #[cfg(not(feature = "obs_slog"))]
    let _ = (options, operation, dimension, floored, clamped);
}
