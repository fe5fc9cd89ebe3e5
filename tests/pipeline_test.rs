//! End-to-end runs of the report pipeline against CSV files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use diet_impact_viz::error::DietVizError;
use diet_impact_viz::parser::canonical_columns;
use diet_impact_viz::{run_pipeline, Dataset, PipelineConfig};
use diet_impact_viz::analyzer::make_rng;

const GROUPS: [&str; 6] = ["vegan", "veggie", "fish", "meat", "meat50", "meat100"];

/// Summary CSV with `runs` runs, one row per diet group, columns in the
/// canonical order
fn write_summary(dir: &Path, runs: usize) -> PathBuf {
    let columns = canonical_columns();
    let mut csv = columns.join(",");
    csv.push('\n');

    for run in 0..runs {
        for (g, group) in GROUPS.iter().enumerate() {
            let cells: Vec<String> = columns
                .iter()
                .enumerate()
                .map(|(c, name)| match name.as_str() {
                    "mc_run_id" => (100 + run).to_string(),
                    "diet_group" => group.to_string(),
                    "n_participants" => "250".to_string(),
                    n if n.starts_with("mean_") => format!("{}", (run * 10 + g + c) as f64),
                    _ => format!("{}", 0.5 + g as f64 * 0.1),
                })
                .collect();
            csv.push_str(&cells.join(","));
            csv.push('\n');
        }
    }

    let path = dir.join("summary_full_set.csv");
    fs::write(&path, csv).unwrap();
    path
}

#[test]
fn test_pipeline_writes_html_report() {
    let dir = tempdir().unwrap();
    let input = write_summary(dir.path(), 25);
    let output = dir.path().join("report.html");
    fs::write(&output, "stale").unwrap();

    let config = PipelineConfig { input, output: output.clone(), runs: 10, seed: Some(21) };
    let spec = run_pipeline(&config).unwrap();

    assert_eq!(spec.lines.len(), 60);
    assert_eq!(spec.dimensions.len(), 9);
    assert_eq!(spec.legend.len(), 6);
    assert_eq!(spec.annotation.text.split(',').count(), 10);

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("drawParcoords"));
    assert!(html.contains(&spec.annotation.text));
    assert!(html.contains("<style>\n") && html.contains("</style>\n</head>"));
}

#[test]
fn test_fixed_seed_gives_identical_sample() {
    let dir = tempdir().unwrap();
    let input = write_summary(dir.path(), 30);
    let dataset = Dataset::open(&input).unwrap();

    let a = dataset.sample(10, &mut make_rng(Some(99))).unwrap();
    let b = dataset.sample(10, &mut make_rng(Some(99))).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_too_few_runs_fails() {
    let dir = tempdir().unwrap();
    let input = write_summary(dir.path(), 3);
    let output = dir.path().join("never.html");

    let config = PipelineConfig { input, output: output.clone(), runs: 10, seed: None };
    let err = run_pipeline(&config).unwrap_err();
    assert!(matches!(err, DietVizError::InsufficientRuns { requested: 10, available: 3 }));
    assert!(!output.exists());
}

#[test]
fn test_exactly_ten_runs_plots_everything() {
    let dir = tempdir().unwrap();
    let input = write_summary(dir.path(), 10);
    let output = dir.path().join("ten.html");

    let config = PipelineConfig { input, output, runs: 10, seed: None };
    let spec = run_pipeline(&config).unwrap();

    let mut ids: Vec<&str> = spec.annotation.text.split(',').collect();
    ids.sort_unstable();
    let expected: Vec<String> = (100..110).map(|r| r.to_string()).collect();
    assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    assert_eq!(spec.lines.len(), 60);
}

#[test]
fn test_missing_input_is_io_error() {
    let config = PipelineConfig {
        input: PathBuf::from("/nonexistent/summary_full_set.csv"),
        ..PipelineConfig::default()
    };
    assert!(matches!(run_pipeline(&config), Err(DietVizError::Io(_))));
}
