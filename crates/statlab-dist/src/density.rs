//! Closed-form density, mass and cumulative-distribution functions.
//!
//! These evaluate the theoretical curve for each supported family, e.g. to
//! overlay a fitted distribution on a chart of observed data. Out-of-support
//! arguments return 0 (densities) or clamp to 0/1 (CDFs) rather than
//! erroring, matching how the evaluators are consumed: pointwise over an
//! arbitrary plotting grid.

use crate::special::{FRAC_1_SQRT_TAU, ln_choose, standard_normal_cdf};

/// Normal pdf at `x` for N(mean, std_dev²). Returns 0 for σ ≤ 0.
#[must_use]
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return 0.0;
    }
    let z = (x - mean) / std_dev;
    FRAC_1_SQRT_TAU / std_dev * (-0.5 * z * z).exp()
}

/// Normal CDF at `x` for N(mean, std_dev²). Returns 0 for σ ≤ 0.
#[must_use]
pub fn normal_cdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return 0.0;
    }
    standard_normal_cdf((x - mean) / std_dev)
}

/// Binomial pmf P(X = k) for B(n, p). Returns 0 outside k ∈ [0, n] or p ∉ [0, 1].
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn binomial_pmf(k: u64, n: u64, p: f64) -> f64 {
    if k > n || !(0.0..=1.0).contains(&p) {
        return 0.0;
    }
    // Degenerate p needs separate handling: 0^0 = 1 by convention here,
    // but ln(0) below would poison the log-space sum.
    if p == 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p == 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }
    let ln_pmf = ln_choose(n, k) + k as f64 * p.ln() + (n - k) as f64 * (1.0 - p).ln();
    ln_pmf.exp()
}

/// Binomial CDF P(X ≤ k) for B(n, p), by summation of the pmf.
#[must_use]
pub fn binomial_cdf(k: u64, n: u64, p: f64) -> f64 {
    if k >= n {
        return 1.0;
    }
    (0..=k).map(|i| binomial_pmf(i, n, p)).sum()
}

/// Poisson pmf P(X = k) for rate λ. Returns 0 for λ ≤ 0.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn poisson_pmf(k: u64, lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return 0.0;
    }
    let k_f = k as f64;
    // Log-space: k ln λ - λ - ln k!
    (k_f * lambda.ln() - lambda - crate::special::ln_gamma(k_f + 1.0)).exp()
}

/// Poisson CDF P(X ≤ k) for rate λ, by summation of the pmf.
#[must_use]
pub fn poisson_cdf(k: u64, lambda: f64) -> f64 {
    (0..=k).map(|i| poisson_pmf(i, lambda)).sum()
}

/// Exponential pdf at `x` for rate λ. Returns 0 for x < 0 or λ ≤ 0.
#[must_use]
pub fn exponential_pdf(x: f64, rate: f64) -> f64 {
    if x < 0.0 || rate <= 0.0 {
        return 0.0;
    }
    rate * (-rate * x).exp()
}

/// Exponential CDF at `x` for rate λ. Returns 0 for x < 0 or λ ≤ 0.
#[must_use]
pub fn exponential_cdf(x: f64, rate: f64) -> f64 {
    if x < 0.0 || rate <= 0.0 {
        return 0.0;
    }
    1.0 - (-rate * x).exp()
}

/// Uniform pdf on [min, max]. Returns 0 outside the support or when min ≥ max.
#[must_use]
pub fn uniform_pdf(x: f64, min: f64, max: f64) -> f64 {
    if min >= max || x < min || x > max {
        return 0.0;
    }
    1.0 / (max - min)
}

/// Uniform CDF on [min, max], clamped to [0, 1].
#[must_use]
pub fn uniform_cdf(x: f64, min: f64, max: f64) -> f64 {
    if min >= max {
        return 0.0;
    }
    ((x - min) / (max - min)).clamp(0.0, 1.0)
}
