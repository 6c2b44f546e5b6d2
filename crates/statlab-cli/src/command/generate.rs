use std::path::PathBuf;

use anyhow::Context as _;
use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use statlab_dist::{DistributionSpec, Family, GenerationRequest, generate};

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Distribution family to sample from
    #[arg(long)]
    family: Family,
    /// Number of observations to generate
    #[arg(long, default_value_t = 1000)]
    sample_size: usize,
    /// Mean (μ) of the normal distribution
    #[arg(long, default_value_t = 0.0)]
    mean: f64,
    /// Standard deviation (σ) of the normal distribution
    #[arg(long, default_value_t = 1.0)]
    std_dev: f64,
    /// Number of trials per binomial observation
    #[arg(long, default_value_t = 10)]
    trials: u64,
    /// Success probability per binomial trial
    #[arg(long, default_value_t = 0.5)]
    probability: f64,
    /// Rate (λ) of the Poisson distribution
    #[arg(long, default_value_t = 5.0)]
    lambda: f64,
    /// Rate (λ) of the exponential distribution
    #[arg(long, default_value_t = 1.0)]
    rate: f64,
    /// Lower bound of the uniform distribution
    #[arg(long, default_value_t = 0.0)]
    min: f64,
    /// Upper bound of the uniform distribution
    #[arg(long, default_value_t = 1.0)]
    max: f64,
    /// Seed for reproducible generation; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

impl GenerateArg {
    fn request(&self) -> GenerationRequest {
        let spec = match self.family {
            Family::Normal => DistributionSpec::Normal {
                mean: self.mean,
                std_dev: self.std_dev,
            },
            Family::Binomial => DistributionSpec::Binomial {
                trials: self.trials,
                probability: self.probability,
            },
            Family::Poisson => DistributionSpec::Poisson {
                lambda: self.lambda,
            },
            Family::Exponential => DistributionSpec::Exponential { rate: self.rate },
            Family::Uniform => DistributionSpec::Uniform {
                min: self.min,
                max: self.max,
            },
        };
        GenerationRequest {
            spec,
            sample_size: self.sample_size,
        }
    }
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let request = arg.request();
    let mut rng = match arg.seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };
    let sample = generate(&request, &mut rng)
        .with_context(|| format!("Failed to generate {} sample", arg.family))?;
    Output::save_json(&sample, arg.output.clone())
}
