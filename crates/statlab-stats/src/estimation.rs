use serde::Serialize;
use statlab_dist::Family;

use crate::descriptive::{mean, variance};

/// Which estimation principle to apply.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    derive_more::Display,
    derive_more::FromStr,
)]
pub enum Method {
    /// Maximum likelihood estimation.
    #[display("mle")]
    Mle,
    /// Method of moments.
    #[display("mom")]
    Mom,
}

/// One labeled parameter estimate, e.g. `("mean(μ)", 3.2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub label: &'static str,
    pub value: f64,
}

/// Parameter estimates for one family/method combination.
///
/// Estimates keep their insertion order so output renders parameters in their
/// conventional order (location before scale). The result is empty when the
/// sample is empty or the family has no estimator defined.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EstimationResult {
    estimates: Vec<Estimate>,
}

impl EstimationResult {
    fn push(&mut self, label: &'static str, value: f64) {
        self.estimates.push(Estimate { label, value });
    }

    /// Looks an estimate up by its label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.estimates
            .iter()
            .find(|estimate| estimate.label == label)
            .map(|estimate| estimate.value)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    #[must_use]
    pub fn estimates(&self) -> &[Estimate] {
        &self.estimates
    }
}

/// Estimates the parameters of `family` from observed values.
///
/// For the normal and exponential families the maximum-likelihood and
/// method-of-moments estimators coincide analytically, so both methods share
/// one computation. For the uniform family they diverge: MLE uses the order
/// statistics (sample min/max) while MoM inverts Var = (b−a)²/12.
///
/// The binomial and Poisson families have no estimator defined here and yield
/// an empty result; see the crate docs before extending them. An empty sample
/// also yields an empty result rather than an error.
///
/// # Examples
///
/// ```
/// use statlab_dist::Family;
/// use statlab_stats::{Method, estimate};
///
/// let values = [2.0, 4.0, 6.0];
/// let result = estimate(&values, Family::Normal, Method::Mle);
/// assert_eq!(result.get("mean(μ)"), Some(4.0));
/// assert_eq!(result.get("variance(σ²)"), Some(4.0));
/// ```
#[must_use]
pub fn estimate(values: &[f64], family: Family, method: Method) -> EstimationResult {
    let mut result = EstimationResult::default();
    if values.is_empty() {
        return result;
    }

    match (family, method) {
        (Family::Normal, _) => {
            let mean = mean(values);
            let variance = variance(values, mean);
            result.push("mean(μ)", mean);
            result.push("variance(σ²)", variance);
            result.push("std_dev(σ)", variance.sqrt());
        }
        (Family::Exponential, _) => {
            let mean = mean(values);
            result.push("rate(λ)", 1.0 / mean);
            result.push("mean(1/λ)", mean);
        }
        (Family::Uniform, Method::Mle) => {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            result.push("min(a)", min);
            result.push("max(b)", max);
            result.push("midpoint((a+b)/2)", f64::midpoint(min, max));
        }
        (Family::Uniform, Method::Mom) => {
            let mean = mean(values);
            let range = (12.0 * variance(values, mean)).sqrt();
            result.push("min(a)", mean - range / 2.0);
            result.push("max(b)", mean + range / 2.0);
            result.push("midpoint((a+b)/2)", mean);
        }
        // Scope gap carried over from the reference: no MLE/MoM formulas are
        // defined for the discrete count families.
        (Family::Binomial | Family::Poisson, _) => {}
    }
    result
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;
    use statlab_dist::{DistributionSpec, GenerationRequest, generate};

    use super::*;

    #[test]
    fn empty_sample_yields_empty_result() {
        assert!(estimate(&[], Family::Normal, Method::Mle).is_empty());
    }

    #[test]
    fn binomial_and_poisson_have_no_estimator() {
        let values = [1.0, 2.0, 3.0];
        for family in [Family::Binomial, Family::Poisson] {
            for method in [Method::Mle, Method::Mom] {
                assert!(estimate(&values, family, method).is_empty());
            }
        }
    }

    #[test]
    fn normal_mle_and_mom_coincide() {
        let values = [0.5, 1.5, 2.0, 4.0, 9.0];
        let mle = estimate(&values, Family::Normal, Method::Mle);
        let mom = estimate(&values, Family::Normal, Method::Mom);
        assert_eq!(mle, mom);
        assert_eq!(mle.get("mean(μ)"), Some(3.4));
    }

    #[test]
    fn exponential_rate_is_reciprocal_mean() {
        let values = [1.0, 2.0, 3.0, 2.0];
        let result = estimate(&values, Family::Exponential, Method::Mle);
        assert_eq!(result.get("mean(1/λ)"), Some(2.0));
        assert_eq!(result.get("rate(λ)"), Some(0.5));
        assert_eq!(result, estimate(&values, Family::Exponential, Method::Mom));
    }

    #[test]
    fn uniform_mle_bounds_bracket_every_observation() {
        let values = [3.0, -1.0, 4.5, 2.0, 0.0];
        let result = estimate(&values, Family::Uniform, Method::Mle);
        let min = result.get("min(a)").unwrap();
        let max = result.get("max(b)").unwrap();
        assert!(values.iter().all(|v| (min..=max).contains(v)));
        assert_eq!(min, -1.0);
        assert_eq!(max, 4.5);
        assert_eq!(result.get("midpoint((a+b)/2)"), Some(1.75));
    }

    #[test]
    fn uniform_mom_inverts_the_variance_formula() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let result = estimate(&values, Family::Uniform, Method::Mom);
        let mean = 3.0;
        let range = (12.0_f64 * 2.5).sqrt();
        assert!((result.get("min(a)").unwrap() - (mean - range / 2.0)).abs() < 1e-12);
        assert!((result.get("max(b)").unwrap() - (mean + range / 2.0)).abs() < 1e-12);
        assert_eq!(result.get("midpoint((a+b)/2)"), Some(mean));
    }

    #[test]
    fn normal_round_trip_recovers_parameters() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let sample = generate(
            &GenerationRequest {
                spec: DistributionSpec::Normal {
                    mean: 12.0,
                    std_dev: 3.0,
                },
                sample_size: 50_000,
            },
            &mut rng,
        )
        .unwrap();
        let result = estimate(&sample.values(), Family::Normal, Method::Mle);
        assert!((result.get("mean(μ)").unwrap() - 12.0).abs() < 0.05);
        assert!((result.get("std_dev(σ)").unwrap() - 3.0).abs() < 0.05);
    }
}
