use serde::{Deserialize, Serialize};

/// A parametric distribution family together with its parameters.
///
/// The supported families mirror the generation panel of the application:
/// normal, binomial, Poisson, exponential and uniform. Each variant carries
/// exactly the parameters that family needs, so family dispatch is an
/// exhaustive `match` and adding a family is a compile-checked change.
///
/// # Examples
///
/// ```
/// use statlab_dist::DistributionSpec;
///
/// let spec = DistributionSpec::Normal { mean: 0.0, std_dev: 1.0 };
/// assert!(spec.validate().is_ok());
///
/// let bad = DistributionSpec::Normal { mean: 0.0, std_dev: -1.0 };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum DistributionSpec {
    /// Normal distribution N(μ, σ²).
    Normal { mean: f64, std_dev: f64 },
    /// Binomial distribution B(n, p): successes out of `trials` Bernoulli runs.
    Binomial { trials: u64, probability: f64 },
    /// Poisson distribution with rate λ > 0.
    Poisson { lambda: f64 },
    /// Exponential distribution with rate λ > 0.
    Exponential { rate: f64 },
    /// Continuous uniform distribution on [min, max].
    Uniform { min: f64, max: f64 },
}

/// Family tag without parameters.
///
/// Used where only the family identity matters: choosing an estimation
/// target, labeling output, parsing a command-line argument.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    #[display("normal")]
    Normal,
    #[display("binomial")]
    Binomial,
    #[display("poisson")]
    Poisson,
    #[display("exponential")]
    Exponential,
    #[display("uniform")]
    Uniform,
}

/// A request to generate one dataset: which distribution, and how many points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(flatten)]
    pub spec: DistributionSpec,
    /// Requested sequence length. Zero is valid and yields an empty sample.
    pub sample_size: usize,
}

/// A distribution parameter outside its valid range.
///
/// Raised by [`DistributionSpec::validate`] before any sampling happens, so
/// invalid parameters fail with a descriptive error instead of silently
/// propagating NaN through the generated values.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParameterError {
    #[display("standard deviation must be positive and finite, got {std_dev}")]
    NonPositiveStdDev { std_dev: f64 },
    #[display("probability must lie in [0, 1], got {probability}")]
    ProbabilityOutOfRange { probability: f64 },
    #[display("lambda must be positive and finite, got {lambda}")]
    NonPositiveLambda { lambda: f64 },
    #[display("rate must be positive and finite, got {rate}")]
    NonPositiveRate { rate: f64 },
    #[display("uniform bounds must satisfy min <= max, got min={min}, max={max}")]
    InvertedBounds { min: f64, max: f64 },
    #[display("{name} must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
}

impl DistributionSpec {
    /// Returns the family tag of this spec.
    #[must_use]
    pub fn family(&self) -> Family {
        match self {
            Self::Normal { .. } => Family::Normal,
            Self::Binomial { .. } => Family::Binomial,
            Self::Poisson { .. } => Family::Poisson,
            Self::Exponential { .. } => Family::Exponential,
            Self::Uniform { .. } => Family::Uniform,
        }
    }

    /// Checks the family-specific parameter constraints.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] describing the first violated constraint:
    /// σ > 0, λ > 0, rate > 0, p ∈ [0, 1], min ≤ max, all values finite.
    pub fn validate(&self) -> Result<(), ParameterError> {
        match *self {
            Self::Normal { mean, std_dev } => {
                require_finite("mean", mean)?;
                if !(std_dev.is_finite() && std_dev > 0.0) {
                    return Err(ParameterError::NonPositiveStdDev { std_dev });
                }
            }
            Self::Binomial { probability, .. } => {
                if !(0.0..=1.0).contains(&probability) {
                    return Err(ParameterError::ProbabilityOutOfRange { probability });
                }
            }
            Self::Poisson { lambda } => {
                if !(lambda.is_finite() && lambda > 0.0) {
                    return Err(ParameterError::NonPositiveLambda { lambda });
                }
            }
            Self::Exponential { rate } => {
                if !(rate.is_finite() && rate > 0.0) {
                    return Err(ParameterError::NonPositiveRate { rate });
                }
            }
            Self::Uniform { min, max } => {
                require_finite("min", min)?;
                require_finite("max", max)?;
                if min > max {
                    return Err(ParameterError::InvertedBounds { min, max });
                }
            }
        }
        Ok(())
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFiniteParameter { name, value })
    }
}
