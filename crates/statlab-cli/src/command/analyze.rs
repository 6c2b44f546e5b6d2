use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use serde::Serialize;
use statlab_dist::{Family, Sample};
use statlab_stats::{DescriptiveStats, EstimationResult, Method, estimate};

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    /// Dataset file (JSON array of {x, y} points); stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,
    /// Target family for parameter estimation; descriptive statistics only
    /// when omitted
    #[arg(long)]
    family: Option<Family>,
    /// Estimation method (mle or mom); both when omitted
    #[arg(long)]
    method: Option<Method>,
    /// Output file path; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Everything one analysis pass produces for a dataset.
///
/// Fields are absent rather than null when not computed: `descriptive` for an
/// empty dataset, the estimation fields when no family was requested.
#[derive(Debug, Serialize)]
struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptive: Option<DescriptiveStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mle: Option<EstimationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mom: Option<EstimationResult>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let sample = load_sample(arg.input.as_deref())?;
    let values = sample.values();

    let wants = |method: Method| arg.method.is_none() || arg.method == Some(method);
    let report = AnalysisReport {
        descriptive: DescriptiveStats::from_values(&values),
        mle: arg
            .family
            .filter(|_| wants(Method::Mle))
            .map(|family| estimate(&values, family, Method::Mle)),
        mom: arg
            .family
            .filter(|_| wants(Method::Mom))
            .map(|family| estimate(&values, family, Method::Mom)),
    };
    Output::save_json(&report, arg.output.clone())
}

fn load_sample(input: Option<&std::path::Path>) -> anyhow::Result<Sample> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse dataset from {}", path.display()))
        }
        None => serde_json::from_reader(std::io::stdin().lock())
            .context("Failed to parse dataset from stdin"),
    }
}
