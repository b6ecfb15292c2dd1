//! Diagonal-covariance Gaussian density with a cached normalization constant.
//!
//! The model owns three parameter vectors (mean, variance, variance floor)
//! and the constant `g = n·ln(2π) + Σ ln σ²ᵢ`, so that scoring a sample is a
//! single pass over the input:
//!
//! ```text
//! ln p(x) = -0.5 * (g + Σ (xᵢ - μᵢ)² / σ²ᵢ)
//! ```
//!
//! Key ideas:
//! - Every mutator validates first, builds a candidate, and only then writes
//!   to the model, so a failed call leaves the model exactly as it was.
//! - `g` is recomputed eagerly at the end of every mutation that touches the
//!   dimension or the variance; there is no dirty flag.
//! - Flooring (`σ²ᵢ ← max-by-floor`) is applied whenever the variance or the
//!   floor changes, so `variance[i] >= variance_thresholds[i]` always holds.
//! - Evaluation borrows `&self` and allocates nothing shared; concurrent
//!   scoring of one model is safe, mutation needs `&mut self`.
use crate::density::{
    core::{
        observer,
        options::DensityOptions,
        params::GaussianParams,
        validation::{validate_factor, validate_length, validate_param_vector, validate_thresholds},
        variance::{FlooredVariance, floor_variance, norm_constant},
    },
    errors::{DensityError, DensityResult},
    traits::{LogDensity, Scoreable},
};
use ndarray::{Array1, ArrayView1, ArrayView2, Zip};

/// Diagonal-covariance Gaussian density.
///
/// Encapsulates the feature dimensionality (`n_inputs`), the parameter
/// vectors, the cached normalization constant and the run-time
/// [`DensityOptions`]. Fields are private: the constant and the flooring
/// invariant are only maintained through the methods below.
///
/// # Notes
/// - `n_inputs == 0` is a valid empty model whose score is always `0`.
/// - `Clone` is a deep copy; no buffers are shared between clones.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagGaussian {
    /// Feature dimensionality.
    n_inputs: usize,
    /// Per-dimension mean.
    mean: Array1<f64>,
    /// Diagonal of the covariance matrix; always >= `variance_thresholds`.
    variance: Array1<f64>,
    /// Per-dimension variance floor.
    variance_thresholds: Array1<f64>,
    /// `n_inputs·ln(2π) + Σ ln variance[i]`.
    norm_constant: f64,
    /// Degeneracy policy and verbosity.
    options: DensityOptions,
}

impl Default for DiagGaussian {
    /// Empty model (`n_inputs == 0`) with default options.
    fn default() -> Self {
        DiagGaussian::new(0)
    }
}

impl DiagGaussian {
    /// Construct a standard Gaussian of dimension `n_inputs`: zero mean, unit
    /// variance, zero floor, default options.
    pub fn new(n_inputs: usize) -> Self {
        DiagGaussian::with_options(n_inputs, DensityOptions::default())
    }

    /// Same as [`DiagGaussian::new`] with explicit options.
    pub fn with_options(n_inputs: usize, options: DensityOptions) -> Self {
        let mut model = DiagGaussian {
            n_inputs: 0,
            mean: Array1::zeros(0),
            variance: Array1::ones(0),
            variance_thresholds: Array1::zeros(0),
            norm_constant: 0.0,
            options,
        };
        model.resize(n_inputs);
        model
    }

    /// Rebuild a model from a parameter snapshot.
    ///
    /// The floor is installed first, then the variance (floored against it),
    /// then the mean, so the result matches a model that went through the
    /// individual setters. The normalization constant is rederived.
    ///
    /// # Errors
    /// Any error the individual setters can return for these vectors.
    pub fn from_params(params: GaussianParams, options: DensityOptions) -> DensityResult<Self> {
        let mut model = DiagGaussian::with_options(params.dimension(), options);
        model.set_variance_thresholds(params.variance_thresholds.view())?;
        model.set_variance(params.variance.view())?;
        model.set_mean(params.mean.view())?;
        Ok(model)
    }

    /// Snapshot of `(mean, variance, variance_thresholds)`.
    pub fn params(&self) -> GaussianParams {
        GaussianParams {
            mean: self.mean.clone(),
            variance: self.variance.clone(),
            variance_thresholds: self.variance_thresholds.clone(),
        }
    }

    /// Reset to dimension `n_inputs` with zero mean, unit variance and zero
    /// floor. Previous contents are discarded, not carried over.
    pub fn resize(&mut self, n_inputs: usize) {
        self.n_inputs = n_inputs;
        self.mean = Array1::zeros(n_inputs);
        self.variance = Array1::ones(n_inputs);
        self.variance_thresholds = Array1::zeros(n_inputs);
        self.pre_compute_constants();
        observer::record_resize(&self.options, n_inputs);
    }

    /// Alias of [`DiagGaussian::resize`] for callers that configure scorers
    /// by input count.
    pub fn set_n_inputs(&mut self, n_inputs: usize) {
        self.resize(n_inputs);
    }

    /// Feature dimensionality.
    pub fn dimension(&self) -> usize {
        self.n_inputs
    }

    pub fn options(&self) -> &DensityOptions {
        &self.options
    }

    /// Replace the options. Takes effect on the next mutation; the current
    /// parameters are not re-validated.
    pub fn set_options(&mut self, options: DensityOptions) {
        self.options = options;
    }

    /// Replace the mean.
    ///
    /// # Errors
    /// - `LengthMismatch` if `mean.len() != dimension()`.
    /// - `NonFiniteValue` if any entry is NaN/±inf.
    pub fn set_mean(&mut self, mean: ArrayView1<'_, f64>) -> DensityResult<()> {
        validate_param_vector(mean, self.n_inputs, "mean")?;
        self.mean.assign(&mean);
        Ok(())
    }

    /// Replace the variance, raising entries below the current floor to the
    /// floor, and recompute the normalization constant.
    ///
    /// # Errors
    /// - `LengthMismatch`, `NonFiniteValue` on malformed input.
    /// - `DegenerateVariance` if a floored entry is `<= 0` and the policy is
    ///   `Reject`.
    pub fn set_variance(&mut self, variance: ArrayView1<'_, f64>) -> DensityResult<()> {
        validate_param_vector(variance, self.n_inputs, "variance")?;
        let floored =
            floor_variance(variance, self.variance_thresholds.view(), self.options.degeneracy)?;
        self.commit_variance(floored, "set_variance");
        Ok(())
    }

    /// Replace the variance floor and re-apply it to the current variance, so
    /// entries now below their floor are raised. Recomputes the constant.
    ///
    /// # Errors
    /// - `LengthMismatch`, `NonFiniteValue`, `NegativeThreshold` on malformed
    ///   input.
    /// - `DegenerateVariance` under `Reject` if a zero floor leaves a
    ///   non-positive variance.
    pub fn set_variance_thresholds(
        &mut self, thresholds: ArrayView1<'_, f64>,
    ) -> DensityResult<()> {
        validate_thresholds(thresholds, self.n_inputs)?;
        let floored = floor_variance(self.variance.view(), thresholds, self.options.degeneracy)?;
        self.variance_thresholds.assign(&thresholds);
        self.commit_variance(floored, "set_variance_thresholds");
        Ok(())
    }

    /// Set every floor to `variance[i] * factor`, then behave like
    /// [`DiagGaussian::set_variance_thresholds`].
    ///
    /// # Errors
    /// - `InvalidFactor` if `factor` is NaN, ±inf or negative.
    pub fn set_variance_thresholds_factor(&mut self, factor: f64) -> DensityResult<()> {
        let factor = validate_factor(factor)?;
        let thresholds = &self.variance * factor;
        self.set_variance_thresholds(thresholds.view())
    }

    /// Copy of the mean.
    pub fn mean(&self) -> Array1<f64> {
        self.mean.clone()
    }

    /// Copy of the variance (diagonal of the covariance matrix).
    pub fn variance(&self) -> Array1<f64> {
        self.variance.clone()
    }

    /// Copy of the variance floor.
    pub fn variance_thresholds(&self) -> Array1<f64> {
        self.variance_thresholds.clone()
    }

    /// Cached `n·ln(2π) + Σ ln σ²ᵢ`.
    pub fn norm_constant(&self) -> f64 {
        self.norm_constant
    }

    /// Log-likelihood of `sample`: `-0.5 * (g + Σ (xᵢ - μᵢ)² / σ²ᵢ)`.
    ///
    /// # Errors
    /// - `LengthMismatch` if `sample.len() != dimension()`.
    /// - `NumericAnomaly` if the score is NaN (a NaN entry in `sample`).
    ///
    /// An infinite entry yields `-inf`, the log of a zero density.
    pub fn log_likelihood(&self, sample: ArrayView1<'_, f64>) -> DensityResult<f64> {
        validate_length(sample, self.n_inputs, "input")?;
        let z = Zip::from(&sample).and(&self.mean).and(&self.variance).fold(
            0.0,
            |acc, &x, &mu, &var| {
                let d = x - mu;
                acc + d * d / var
            },
        );
        let ll = -0.5 * (self.norm_constant + z);
        if ll.is_nan() {
            return Err(DensityError::NumericAnomaly { value: ll });
        }
        Ok(ll)
    }

    /// Log-likelihood of every row of `samples`.
    ///
    /// # Errors
    /// - `LengthMismatch` if the column count differs from `dimension()`.
    /// - The first per-row error otherwise.
    pub fn log_likelihood_batch(&self, samples: ArrayView2<'_, f64>) -> DensityResult<Array1<f64>> {
        if samples.ncols() != self.n_inputs {
            return Err(DensityError::LengthMismatch {
                what: "input columns",
                expected: self.n_inputs,
                actual: samples.ncols(),
            });
        }
        samples
            .rows()
            .into_iter()
            .map(|row| self.log_likelihood(row))
            .collect::<DensityResult<Vec<f64>>>()
            .map(Array1::from)
    }

    // ---- Helper Methods ----

    fn commit_variance(&mut self, floored: FlooredVariance, operation: &'static str) {
        self.variance = floored.variance;
        self.pre_compute_constants();
        observer::record_variance_update(
            &self.options,
            operation,
            self.n_inputs,
            floored.floored,
            floored.clamped,
        );
    }

    fn pre_compute_constants(&mut self) {
        self.norm_constant = norm_constant(self.variance.view());
    }
}

impl Scoreable for DiagGaussian {
    fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    fn forward(&self, input: ArrayView1<'_, f64>) -> DensityResult<f64> {
        DiagGaussian::log_likelihood(self, input)
    }
}

impl LogDensity for DiagGaussian {
    fn log_likelihood(&self, sample: ArrayView1<'_, f64>) -> DensityResult<f64> {
        DiagGaussian::log_likelihood(self, sample)
    }
}

impl std::fmt::Display for DiagGaussian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mean = {}", self.mean)?;
        write!(f, "Variance = {}", self.variance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{density::core::options::DegeneracyPolicy, log_domain::LOG_2PI};
    use approx::assert_relative_eq;
    use ndarray::{Array2, array};
    use statrs::distribution::{Continuous, Normal};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // - Construction, resize reset and the empty model.
    // - Scenarios A–D (default score, flooring on set, score with offset
    //   mean, factor-derived floors).
    // - Flooring invariant under sequences of variance/floor updates.
    // - Atomicity of failed mutations and both degeneracy policies.
    // - Agreement with an independent univariate normal (statrs).
    // - Deep-copy independence, batch scoring, snapshots, trait dispatch.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-10;

    fn assert_floored(g: &DiagGaussian) {
        for (v, t) in g.variance().iter().zip(g.variance_thresholds().iter()) {
            assert!(v >= t, "variance {v} below floor {t}");
        }
    }

    #[test]
    fn resize_resets_all_parameter_vectors() {
        let mut g = DiagGaussian::new(2);
        g.set_mean(array![3.0, -1.0].view()).unwrap();
        g.set_variance_thresholds(array![0.2, 0.2].view()).unwrap();
        g.set_variance(array![5.0, 7.0].view()).unwrap();

        g.resize(3);
        assert_eq!(g.dimension(), 3);
        assert_eq!(g.mean(), Array1::<f64>::zeros(3));
        assert_eq!(g.variance(), Array1::<f64>::ones(3));
        assert_eq!(g.variance_thresholds(), Array1::<f64>::zeros(3));
        assert_relative_eq!(g.norm_constant(), 3.0 * LOG_2PI, epsilon = TOL);

        let before = g.clone();
        g.resize(3);
        assert_eq!(g, before);
    }

    #[test]
    fn set_n_inputs_behaves_like_resize() {
        let mut a = DiagGaussian::new(1);
        let mut b = DiagGaussian::new(1);
        a.resize(4);
        b.set_n_inputs(4);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_model_scores_zero() {
        let g = DiagGaussian::default();
        assert_eq!(g.dimension(), 0);
        assert_eq!(g.norm_constant(), 0.0);
        let x: Array1<f64> = Array1::zeros(0);
        assert_eq!(g.log_likelihood(x.view()).unwrap(), 0.0);
    }

    #[test]
    // Scenario A: 2-D standard Gaussian at its mean.
    fn standard_gaussian_at_mean() {
        let g = DiagGaussian::new(2);
        let ll = g.log_likelihood(array![0.0, 0.0].view()).unwrap();
        assert_relative_eq!(ll, -0.5 * 2.0 * (2.0 * std::f64::consts::PI).ln(), epsilon = TOL);
        assert_relative_eq!(ll, -1.8378770664, epsilon = 1e-9);
    }

    #[test]
    // Scenario B: setting a variance below the floor raises it to the floor.
    fn set_variance_applies_floor() {
        let mut g = DiagGaussian::new(2);
        g.set_variance_thresholds(array![0.5, 0.5].view()).unwrap();
        g.set_variance(array![0.1, 2.0].view()).unwrap();
        assert_eq!(g.variance(), array![0.5, 2.0]);
        assert_relative_eq!(
            g.norm_constant(),
            2.0 * LOG_2PI + 0.5_f64.ln() + 2.0_f64.ln(),
            epsilon = TOL
        );
    }

    #[test]
    // Scenario C: unit offset from the mean in every dimension. The squared
    // distance is 3, so the score is -0.5 * (3 ln 2π + 3).
    fn score_with_offset_mean() {
        let mut g = DiagGaussian::new(3);
        g.set_mean(array![1.0, 1.0, 1.0].view()).unwrap();
        g.set_variance(array![1.0, 1.0, 1.0].view()).unwrap();
        let ll = g.log_likelihood(array![2.0, 2.0, 2.0].view()).unwrap();
        assert_relative_eq!(ll, -0.5 * (3.0 * LOG_2PI + 3.0), epsilon = TOL);
        assert_relative_eq!(ll, -4.2568156, epsilon = 1e-6);
    }

    #[test]
    // Scenario D: floors derived from the variance by a factor.
    fn thresholds_from_factor_leave_variance_untouched() {
        let mut g = DiagGaussian::new(2);
        g.set_variance(array![4.0, 1.0].view()).unwrap();
        g.set_variance_thresholds_factor(0.5).unwrap();
        assert_eq!(g.variance_thresholds(), array![2.0, 0.5]);
        assert_eq!(g.variance(), array![4.0, 1.0]);
    }

    #[test]
    fn raising_the_floor_raises_existing_variances() {
        let mut g = DiagGaussian::new(3);
        g.set_variance(array![0.2, 1.0, 3.0].view()).unwrap();
        let before = g.norm_constant();
        g.set_variance_thresholds(array![0.5, 0.5, 0.5].view()).unwrap();
        assert_eq!(g.variance(), array![0.5, 1.0, 3.0]);
        assert!(g.norm_constant() > before);
        assert_relative_eq!(g.norm_constant(), norm_constant(g.variance().view()), epsilon = TOL);
    }

    #[test]
    fn flooring_invariant_holds_across_update_sequences() {
        let mut g = DiagGaussian::new(4);
        let updates: [(&str, Array1<f64>); 6] = [
            ("var", array![0.01, 2.0, 0.3, 9.0]),
            ("floor", array![0.1, 0.1, 0.5, 0.5]),
            ("var", array![0.05, 0.05, 0.05, 0.05]),
            ("floor", array![1.0, 0.0, 0.0, 2.0]),
            ("var", array![3.0, 0.2, 0.7, 1.0]),
            ("floor", array![0.0, 0.0, 0.0, 0.0]),
        ];
        for (kind, v) in updates.iter() {
            match *kind {
                "var" => g.set_variance(v.view()).unwrap(),
                _ => g.set_variance_thresholds(v.view()).unwrap(),
            }
            assert_floored(&g);
            assert_relative_eq!(
                g.norm_constant(),
                norm_constant(g.variance().view()),
                epsilon = TOL
            );
        }
        g.set_variance_thresholds_factor(1.5).unwrap();
        assert_floored(&g);
    }

    #[test]
    fn length_mismatch_is_reported_for_every_operation() {
        let mut g = DiagGaussian::new(3);
        let short = array![1.0, 2.0];
        let expect = |res: DensityResult<_>| {
            assert!(matches!(res, Err(DensityError::LengthMismatch { expected: 3, actual: 2, .. })))
        };
        expect(g.set_mean(short.view()).map(|_| 0.0));
        expect(g.set_variance(short.view()).map(|_| 0.0));
        expect(g.set_variance_thresholds(short.view()).map(|_| 0.0));
        expect(g.log_likelihood(short.view()));
        expect(g.forward(short.view()));
        assert_eq!(g, DiagGaussian::new(3));
    }

    #[test]
    fn invalid_values_leave_model_unchanged() {
        let mut g = DiagGaussian::new(2);
        g.set_variance(array![2.0, 3.0].view()).unwrap();
        let before = g.clone();

        assert!(matches!(
            g.set_mean(array![0.0, f64::NAN].view()),
            Err(DensityError::NonFiniteValue { what: "mean", index: 1, .. })
        ));
        assert!(matches!(
            g.set_variance(array![f64::INFINITY, 1.0].view()),
            Err(DensityError::NonFiniteValue { what: "variance", index: 0, .. })
        ));
        assert!(matches!(
            g.set_variance_thresholds(array![-0.1, 0.0].view()),
            Err(DensityError::NegativeThreshold { index: 0, .. })
        ));
        assert!(matches!(
            g.set_variance_thresholds_factor(-2.0),
            Err(DensityError::InvalidFactor { .. })
        ));
        assert_eq!(g, before);
    }

    #[test]
    fn zero_variance_with_zero_floor_is_rejected_by_default() {
        let mut g = DiagGaussian::new(2);
        let before = g.clone();
        assert_eq!(
            g.set_variance(array![1.0, 0.0].view()),
            Err(DensityError::DegenerateVariance { index: 1, value: 0.0 })
        );
        assert_eq!(g, before);
        assert!(g.norm_constant().is_finite());
    }

    #[test]
    // Purpose
    // -------
    // A clamping model never commits a variance whose logarithm is not
    // finite, so its constant and its scores stay finite.
    //
    // Given
    // -----
    // - The smallest positive epsilon and an all-zero proposed variance.
    //
    // Expect
    // ------
    // - Every variance equals epsilon; constant and score are finite.
    fn clamp_policy_keeps_constant_and_scores_finite() {
        let opts = DensityOptions::new(DegeneracyPolicy::clamp(f64::MIN_POSITIVE).unwrap(), false);
        let mut g = DiagGaussian::with_options(3, opts);
        g.set_variance(array![0.0, 0.0, 0.0].view()).unwrap();
        assert!(g.variance().iter().all(|&v| v == f64::MIN_POSITIVE));
        assert!(g.norm_constant().is_finite());
        assert!(g.log_likelihood(array![0.0, 0.0, 0.0].view()).unwrap().is_finite());
    }

    #[test]
    fn zero_variance_is_clamped_under_clamp_policy() {
        let opts = DensityOptions::new(DegeneracyPolicy::clamp(1e-6).unwrap(), false);
        let mut g = DiagGaussian::with_options(2, opts);
        g.set_variance(array![1.0, 0.0].view()).unwrap();
        assert_eq!(g.variance(), array![1.0, 1e-6]);
        assert_relative_eq!(g.norm_constant(), 2.0 * LOG_2PI + (1e-6_f64).ln(), epsilon = TOL);
        let ll = g.log_likelihood(array![0.0, 0.0].view()).unwrap();
        assert!(ll.is_finite());
    }

    #[test]
    fn nan_input_is_a_numeric_anomaly_and_infinite_input_scores_minus_infinity() {
        let g = DiagGaussian::new(2);
        assert!(matches!(
            g.log_likelihood(array![0.0, f64::NAN].view()),
            Err(DensityError::NumericAnomaly { .. })
        ));
        assert_eq!(
            g.log_likelihood(array![f64::INFINITY, 0.0].view()).unwrap(),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn matches_product_of_independent_univariate_normals() {
        let mut g = DiagGaussian::new(3);
        let mean = array![0.5, -2.0, 10.0];
        let variance = array![0.25, 4.0, 9.0];
        g.set_mean(mean.view()).unwrap();
        g.set_variance(variance.view()).unwrap();

        let x = array![1.0, -1.5, 4.0];
        let expected: f64 = (0..3)
            .map(|i| Normal::new(mean[i], variance[i].sqrt()).unwrap().ln_pdf(x[i]))
            .sum();
        assert_relative_eq!(g.log_likelihood(x.view()).unwrap(), expected, epsilon = 1e-9);
    }

    #[test]
    fn clone_is_independent_of_original() {
        let mut g = DiagGaussian::new(2);
        g.set_mean(array![1.0, 2.0].view()).unwrap();
        let copy = g.clone();

        g.set_mean(array![-5.0, -5.0].view()).unwrap();
        g.set_variance(array![3.0, 3.0].view()).unwrap();
        g.set_variance_thresholds(array![1.0, 1.0].view()).unwrap();

        assert_eq!(copy.mean(), array![1.0, 2.0]);
        assert_eq!(copy.variance(), array![1.0, 1.0]);
        assert_eq!(copy.variance_thresholds(), array![0.0, 0.0]);
        assert_relative_eq!(copy.norm_constant(), 2.0 * LOG_2PI, epsilon = TOL);
    }

    #[test]
    fn getters_return_copies() {
        let g = DiagGaussian::new(2);
        let mut m = g.mean();
        m[0] = 42.0;
        assert_eq!(g.mean(), array![0.0, 0.0]);
    }

    #[test]
    fn forward_and_log_likelihood_agree() {
        let mut g = DiagGaussian::new(2);
        g.set_mean(array![0.3, -0.7].view()).unwrap();
        g.set_variance(array![1.5, 0.4].view()).unwrap();
        let x = array![1.0, 1.0];
        let as_scorer: &dyn Scoreable = &g;
        let as_density: &dyn LogDensity = &g;
        assert_eq!(as_scorer.forward(x.view()).unwrap(), g.log_likelihood(x.view()).unwrap());
        assert_eq!(as_density.log_likelihood(x.view()).unwrap(), g.forward(x.view()).unwrap());
        assert_eq!(as_scorer.n_inputs(), 2);
    }

    #[test]
    fn batch_scores_every_row() {
        let g = DiagGaussian::new(2);
        let xs = Array2::from_shape_vec((3, 2), vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0]).unwrap();
        let scores = g.log_likelihood_batch(xs.view()).unwrap();
        assert_eq!(scores.len(), 3);
        for (row, &s) in xs.rows().into_iter().zip(scores.iter()) {
            assert_eq!(s, g.log_likelihood(row).unwrap());
        }

        let wrong = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            g.log_likelihood_batch(wrong.view()),
            Err(DensityError::LengthMismatch { what: "input columns", .. })
        ));
    }

    #[test]
    fn params_round_trip_is_lossless() {
        let mut g = DiagGaussian::new(3);
        g.set_variance_thresholds(array![0.1, 0.2, 0.3].view()).unwrap();
        g.set_variance(array![0.05, 1.0, 2.0].view()).unwrap();
        g.set_mean(array![1.0, -1.0, 0.5].view()).unwrap();

        let rebuilt = DiagGaussian::from_params(g.params(), *g.options()).unwrap();
        assert_eq!(rebuilt, g);
    }

    #[test]
    fn display_prints_mean_and_variance() {
        let g = DiagGaussian::new(2);
        let text = g.to_string();
        assert!(text.starts_with("Mean = "));
        assert!(text.contains("Variance = "));
    }
}
