//! Parametric distribution model for the statlab workspace.
//!
//! This crate owns the distribution side of the system:
//!
//! - [`spec`]: the [`DistributionSpec`] tagged union over the supported
//!   families, parameter validation, and the [`Family`] tag used for
//!   estimation dispatch
//! - [`sample`]: the [`Sample`] / [`DataPoint`] data model shared with every
//!   producer and consumer of datasets
//! - [`sampler`]: random sample generation ([`generate`])
//! - [`density`]: closed-form pdf/pmf/cdf evaluation per family
//! - [`special`]: supporting special-function approximations
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng as _;
//! use statlab_dist::{DistributionSpec, GenerationRequest, generate};
//!
//! let request = GenerationRequest {
//!     spec: DistributionSpec::Uniform { min: 0.0, max: 1.0 },
//!     sample_size: 100,
//! };
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(42);
//! let sample = generate(&request, &mut rng).unwrap();
//! assert_eq!(sample.len(), 100);
//! ```

pub use self::{
    sample::{DataPoint, Sample},
    sampler::generate,
    spec::{DistributionSpec, Family, GenerationRequest, ParameterError},
};

pub mod density;
pub mod sample;
pub mod sampler;
pub mod spec;
pub mod special;
