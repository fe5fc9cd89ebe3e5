//! Human-readable text dump of a sampled run set, for checking what the chart plots.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::analyzer::{make_rng, AxisDimension, RunSample, DEFAULT_RUN_COUNT};
use crate::error::Result;
use crate::model::{color_for_label, Metric};
use crate::Dataset;

const RULE: &str = "================================================================================";
const THIN_RULE: &str = "--------------------------------------------------------------------------------";

/// Options for controlling the sample that gets dumped
pub struct DumpOptions {
    /// Number of runs to draw
    pub runs: usize,
    /// Seed for the draw; `None` is random
    pub seed: Option<u64>,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self { runs: DEFAULT_RUN_COUNT, seed: None }
    }
}

/// Dump a sample to a file
pub fn dump_to_file(dataset: &Dataset, output_path: &Path, options: &DumpOptions) -> Result<()> {
    let content = dump_to_string(dataset, options)?;
    let mut file = File::create(output_path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Dump a sample to a string
pub fn dump_to_string(dataset: &Dataset, options: &DumpOptions) -> Result<String> {
    let mut rng = make_rng(options.seed);
    let (sample, axes) = dataset.sample_with_axes(options.runs, &mut rng)?;

    let mut out = String::new();
    writeln!(out, "{}", RULE).unwrap();
    writeln!(out, "Diet Impact Sample Dump").unwrap();
    writeln!(out, "{}", RULE).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "File:           {}", dataset.file_name()).unwrap();
    writeln!(out, "Rows:           {}", dataset.observations.len()).unwrap();
    writeln!(out, "Distinct runs:  {}", dataset.run_ids().len()).unwrap();
    match options.seed {
        Some(seed) => writeln!(out, "Seed:           {}", seed).unwrap(),
        None => writeln!(out, "Seed:           (none)").unwrap(),
    }

    dump_sample(&mut out, &sample);
    dump_axes(&mut out, &axes);

    Ok(out)
}

fn dump_sample(out: &mut String, sample: &RunSample) {
    writeln!(out).unwrap();
    writeln!(out, "{}", RULE).unwrap();
    writeln!(out, "SELECTED RUNS ({})", sample.run_ids.len()).unwrap();
    writeln!(out, "{}", RULE).unwrap();
    writeln!(out, "{}", sample.run_ids.join(",")).unwrap();

    writeln!(out).unwrap();
    writeln!(out, "Rows ({}):", sample.rows.len()).unwrap();
    write!(out, "  {:>4}  {:<10} {:<8} {:>8}", "#", "group", "color", "n").unwrap();
    for metric in Metric::ALL {
        write!(out, " {:>18}", metric.mean_column()).unwrap();
    }
    writeln!(out).unwrap();

    for (i, row) in sample.rows.iter().enumerate() {
        let color = color_for_label(&row.diet_group).unwrap_or("-");
        write!(out, "  {:>4}  {:<10} {:<8} {:>8}", i, row.diet_group, color, row.n_participants).unwrap();
        for value in &row.metrics {
            write!(out, " {:>18}", format!("{:.3}±{:.3}", value.mean, value.sd)).unwrap();
        }
        writeln!(out).unwrap();
    }
}

fn dump_axes(out: &mut String, axes: &[AxisDimension]) {
    writeln!(out).unwrap();
    writeln!(out, "{}", RULE).unwrap();
    writeln!(out, "AXES").unwrap();
    writeln!(out, "{}", RULE).unwrap();

    for axis in axes {
        writeln!(out).unwrap();
        writeln!(out, "{} [{}]", axis.label, axis.metric.mean_column()).unwrap();
        writeln!(out, "{}", THIN_RULE).unwrap();
        writeln!(out, "  Range:  {} .. {}", axis.range[0], axis.range[1]).unwrap();
        writeln!(out, "  Ticks:  {}", axis.tick_text.join(" | ")).unwrap();
    }
}
