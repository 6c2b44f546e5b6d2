//! Observed-data statistics for the statlab workspace.
//!
//! Two entry points, both pure transformations over an in-memory slice of
//! observations:
//!
//! - [`descriptive::DescriptiveStats`]: summary statistics (central tendency,
//!   dispersion, shape) with exact finite-sample bias corrections
//! - [`estimation::estimate`]: maximum-likelihood and method-of-moments
//!   parameter estimates for a chosen target family
//!
//! # Examples
//!
//! ```
//! use statlab_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! assert_eq!(stats.range, 4.0);
//! ```

pub use self::{
    descriptive::DescriptiveStats,
    estimation::{Estimate, EstimationResult, Method, estimate},
};

pub mod descriptive;
pub mod estimation;
