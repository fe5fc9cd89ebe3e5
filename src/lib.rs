pub mod error;
pub mod parser;
pub mod model;
pub mod analyzer;
pub mod visualization;
pub mod dump;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::model::{DietGroup, Metric, Observation};
use crate::parser::load_observations;
use crate::analyzer::{
    build_axes, distinct_run_ids, make_rng, sample_runs, AxisDimension, RunSample, DEFAULT_RUN_COUNT,
};
use crate::visualization::{generate_html, ChartSpec};

pub const DEFAULT_INPUT: &str = "full_set/summary_full_set.csv";
pub const DEFAULT_OUTPUT: &str = "full_set_diet_parallel_coordinates.html";

/// Settings for one report run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of runs to plot
    pub runs: usize,
    /// Fixed seed for run selection; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            runs: DEFAULT_RUN_COUNT,
            seed: None,
        }
    }
}

/// Reshaped summary table
pub struct Dataset {
    pub observations: Vec<Observation>,
    file_name: String,
}

impl Dataset {
    /// Load and reshape a summary CSV
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let observations = load_observations(path)?;
        let file_name = path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("dataset")
            .to_string();

        info!(file = %file_name, rows = observations.len(), "loaded summary table");
        Ok(Self { observations, file_name })
    }

    pub fn from_observations(observations: Vec<Observation>) -> Self {
        Self { observations, file_name: "dataset".to_string() }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Distinct run ids, first appearance order
    pub fn run_ids(&self) -> Vec<String> {
        distinct_run_ids(&self.observations)
    }

    /// Draw `count` runs and keep their rows
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<RunSample> {
        let sample = sample_runs(&self.observations, count, rng)?;
        info!(runs = %sample.run_ids.join(","), rows = sample.rows.len(), "sampled runs");
        Ok(sample)
    }

    /// Sample runs and compute the axes for them
    pub fn sample_with_axes<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<(RunSample, Vec<AxisDimension>)> {
        let sample = self.sample(count, rng)?;
        let axes = build_axes(&sample.rows)?;
        info!(axes = axes.len(), "built axes");
        Ok((sample, axes))
    }

    /// Build the chart description for a random sample of runs
    pub fn generate_chart_spec<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<ChartSpec> {
        let (sample, axes) = self.sample_with_axes(count, rng)?;
        Ok(ChartSpec::build(&sample, axes))
    }

    /// Generate HTML visualization file
    pub fn generate_visualization<P: AsRef<Path>, R: Rng + ?Sized>(
        &self,
        output_path: P,
        count: usize,
        rng: &mut R,
    ) -> Result<ChartSpec> {
        let spec = self.generate_chart_spec(count, rng)?;
        generate_html(&spec, output_path.as_ref())?;
        Ok(spec)
    }
}

/// Run the whole report: load, sample, plot, write
pub fn run_pipeline(config: &PipelineConfig) -> Result<ChartSpec> {
    let dataset = Dataset::open(&config.input)?;
    let mut rng = make_rng(config.seed);
    dataset.generate_visualization(&config.output, config.runs, &mut rng)
}

/// Print dataset info
pub fn print_dataset_info(dataset: &Dataset, verbose: bool) {
    let observations = &dataset.observations;

    println!("Diet Impact Summary Information");
    println!("===============================");
    println!("File: {}", dataset.file_name);
    println!("Rows: {}", observations.len());
    println!("Distinct runs: {}", dataset.run_ids().len());

    let mut groups: BTreeMap<&str, usize> = BTreeMap::new();
    for o in observations {
        *groups.entry(o.record.diet_group.as_str()).or_default() += 1;
    }

    println!();
    println!("Diet groups");
    println!("-----------");
    for (label, count) in &groups {
        match DietGroup::from_label(label) {
            Some(group) => println!("  {:<10} {:>6} rows  {}", label, count, group.color()),
            None => println!("  {:<10} {:>6} rows  (no color mapped)", label, count),
        }
    }

    if verbose && !observations.is_empty() {
        println!();
        println!("Metric ranges (all rows)");
        println!("------------------------");

        for metric in Metric::ALL {
            let means = observations.iter().map(|o| o.record.metric(metric).mean);
            let min = means.clone().fold(f64::INFINITY, f64::min);
            let max = means.fold(f64::NEG_INFINITY, f64::max);
            println!("  {:<26} mean {:>12.3} .. {:>12.3}", metric.label(), min, max);
        }
    }
}
