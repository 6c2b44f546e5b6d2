use std::f64::consts::TAU;

use rand::Rng;

use crate::{
    sample::Sample,
    spec::{DistributionSpec, GenerationRequest, ParameterError},
};

/// Generates a sample of exactly `request.sample_size` i.i.d. observations.
///
/// Parameters are validated up front; generation itself has no failure path
/// and is deterministic given the draw sequence of `rng`. Pass a seeded
/// [`rand_pcg::Pcg32`](https://docs.rs/rand_pcg) for reproducible datasets, or
/// [`rand::rng()`] when reproducibility does not matter.
///
/// # Errors
///
/// Returns [`ParameterError`] when a family parameter violates its constraint
/// (σ ≤ 0, p ∉ [0, 1], λ ≤ 0, rate ≤ 0, min > max, non-finite input).
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use statlab_dist::{DistributionSpec, GenerationRequest, generate};
///
/// let request = GenerationRequest {
///     spec: DistributionSpec::Normal { mean: 10.0, std_dev: 2.0 },
///     sample_size: 5,
/// };
/// let mut rng = rand_pcg::Pcg32::seed_from_u64(7);
/// let sample = generate(&request, &mut rng).unwrap();
/// assert_eq!(sample.len(), 5);
/// ```
pub fn generate<R>(request: &GenerationRequest, rng: &mut R) -> Result<Sample, ParameterError>
where
    R: Rng + ?Sized,
{
    request.spec.validate()?;
    let n = request.sample_size;
    let values = match request.spec {
        DistributionSpec::Normal { mean, std_dev } => normal_values(n, mean, std_dev, rng),
        DistributionSpec::Binomial {
            trials,
            probability,
        } => binomial_values(n, trials, probability, rng),
        DistributionSpec::Poisson { lambda } => poisson_values(n, lambda, rng),
        DistributionSpec::Exponential { rate } => exponential_values(n, rate, rng),
        DistributionSpec::Uniform { min, max } => uniform_values(n, min, max, rng),
    };
    Ok(Sample::from_values(values))
}

/// Box-Muller transform, single-output form.
///
/// Draws one fresh (u1, u2) pair per output and keeps only the cosine branch.
/// The sine branch would give a second independent normal per pair; the
/// single-output form spends twice the uniforms but keeps one draw pattern
/// per observation, which makes seeded sequences easier to reason about.
fn box_muller<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // random() yields [0, 1); flip u1 into (0, 1] so ln stays finite.
    let u1 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

fn normal_values<R: Rng + ?Sized>(n: usize, mean: f64, std_dev: f64, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| box_muller(rng) * std_dev + mean).collect()
}

/// Sum of `trials` Bernoulli(p) draws per observation. O(n × trials).
#[expect(clippy::cast_precision_loss)]
fn binomial_values<R: Rng + ?Sized>(n: usize, trials: u64, p: f64, rng: &mut R) -> Vec<f64> {
    (0..n)
        .map(|_| {
            let successes = (0..trials)
                .filter(|_| rng.random::<f64>() < p)
                .count();
            successes as f64
        })
        .collect()
}

/// Knuth's algorithm: multiply fresh uniforms until the product drops to
/// e^(-λ); the number of draws, minus one, is Poisson(λ).
#[expect(clippy::cast_precision_loss)]
fn poisson_values<R: Rng + ?Sized>(n: usize, lambda: f64, rng: &mut R) -> Vec<f64> {
    let limit = (-lambda).exp();
    (0..n)
        .map(|_| {
            let mut k: u64 = 0;
            let mut p = 1.0;
            loop {
                k += 1;
                p *= rng.random::<f64>();
                if p <= limit {
                    break;
                }
            }
            (k - 1) as f64
        })
        .collect()
}

/// Inverse transform: if U ~ Uniform(0,1) then -ln(1-U)/λ ~ Exp(λ).
fn exponential_values<R: Rng + ?Sized>(n: usize, rate: f64, rng: &mut R) -> Vec<f64> {
    (0..n)
        .map(|_| -(1.0 - rng.random::<f64>()).ln() / rate)
        .collect()
}

fn uniform_values<R: Rng + ?Sized>(n: usize, min: f64, max: f64, rng: &mut R) -> Vec<f64> {
    (0..n)
        .map(|_| min + rng.random::<f64>() * (max - min))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[expect(clippy::cast_precision_loss)]
    fn mean_and_variance(values: &[f64]) -> (f64, f64) {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        (mean, variance)
    }

    fn generate_values(spec: DistributionSpec, sample_size: usize, seed: u64) -> Vec<f64> {
        let mut rng = Pcg32::seed_from_u64(seed);
        generate(&GenerationRequest { spec, sample_size }, &mut rng)
            .unwrap()
            .values()
    }

    #[test]
    fn every_family_returns_exactly_n_points() {
        let specs = [
            DistributionSpec::Normal {
                mean: 0.0,
                std_dev: 1.0,
            },
            DistributionSpec::Binomial {
                trials: 10,
                probability: 0.5,
            },
            DistributionSpec::Poisson { lambda: 3.0 },
            DistributionSpec::Exponential { rate: 2.0 },
            DistributionSpec::Uniform { min: 0.0, max: 1.0 },
        ];
        for spec in specs {
            for sample_size in [0, 1, 7, 100] {
                assert_eq!(
                    generate_values(spec, sample_size, 1).len(),
                    sample_size,
                    "{spec:?} with n={sample_size}"
                );
            }
        }
    }

    #[test]
    fn generated_points_use_one_based_positions() {
        let mut rng = Pcg32::seed_from_u64(9);
        let sample = generate(
            &GenerationRequest {
                spec: DistributionSpec::Poisson { lambda: 1.0 },
                sample_size: 3,
            },
            &mut rng,
        )
        .unwrap();
        let positions: Vec<f64> = sample.points().iter().map(|p| p.x).collect();
        assert_eq!(positions, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn invalid_parameters_fail_before_sampling() {
        let mut rng = Pcg32::seed_from_u64(0);
        let result = generate(
            &GenerationRequest {
                spec: DistributionSpec::Exponential { rate: -1.0 },
                sample_size: 10,
            },
            &mut rng,
        );
        assert_eq!(result.unwrap_err(), ParameterError::NonPositiveRate { rate: -1.0 });
    }

    #[test]
    fn standard_normal_moments_match_parameters() {
        let values = generate_values(
            DistributionSpec::Normal {
                mean: 0.0,
                std_dev: 1.0,
            },
            100_000,
            42,
        );
        let (mean, variance) = mean_and_variance(&values);
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((variance - 1.0).abs() < 0.1, "variance {variance}");
    }

    #[test]
    fn uniform_stays_within_bounds() {
        let values = generate_values(DistributionSpec::Uniform { min: 0.0, max: 1.0 }, 5000, 3);
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
        let (mean, _) = mean_and_variance(&values);
        assert!((mean - 0.5).abs() < 0.05, "mean {mean}");
    }

    #[test]
    fn binomial_moments_match_np_and_npq() {
        let values = generate_values(
            DistributionSpec::Binomial {
                trials: 10,
                probability: 0.5,
            },
            10_000,
            11,
        );
        let (mean, variance) = mean_and_variance(&values);
        assert!((mean - 5.0).abs() < 0.3, "mean {mean}");
        assert!((variance - 2.5).abs() < 0.3, "variance {variance}");
    }

    #[test]
    fn poisson_mean_matches_lambda() {
        let values = generate_values(DistributionSpec::Poisson { lambda: 4.0 }, 20_000, 5);
        let (mean, variance) = mean_and_variance(&values);
        assert!((mean - 4.0).abs() < 0.1, "mean {mean}");
        assert!((variance - 4.0).abs() < 0.3, "variance {variance}");
        assert!(values.iter().all(|v| *v >= 0.0 && v.fract() == 0.0));
    }

    #[test]
    fn exponential_mean_is_reciprocal_rate() {
        let values = generate_values(DistributionSpec::Exponential { rate: 2.0 }, 20_000, 8);
        let (mean, _) = mean_and_variance(&values);
        assert!((mean - 0.5).abs() < 0.02, "mean {mean}");
        assert!(values.iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn same_seed_reproduces_the_dataset() {
        let a = generate_values(DistributionSpec::Normal { mean: 1.0, std_dev: 2.0 }, 50, 77);
        let b = generate_values(DistributionSpec::Normal { mean: 1.0, std_dev: 2.0 }, 50, 77);
        assert_eq!(a, b);
    }
}
