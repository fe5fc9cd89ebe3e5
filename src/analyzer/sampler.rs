use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{DietVizError, Result};
use crate::model::{ImpactRecord, Observation};

/// Number of runs drawn for the chart
pub const DEFAULT_RUN_COUNT: usize = 10;

/// Runs picked for plotting and the rows belonging to them
#[derive(Debug, Clone, PartialEq)]
pub struct RunSample {
    /// Selected run ids, in draw order
    pub run_ids: Vec<String>,
    /// Rows of the selected runs in input order, run id dropped
    pub rows: Vec<ImpactRecord>,
}

/// Seeded when `seed` is given, otherwise from OS entropy
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Distinct run ids in order of first appearance
pub fn distinct_run_ids(observations: &[Observation]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for o in observations {
        if seen.insert(o.run_id.as_str()) {
            ids.push(o.run_id.clone());
        }
    }
    ids
}

/// Draw `count` distinct run ids without replacement and keep only their rows
pub fn sample_runs<R: Rng + ?Sized>(
    observations: &[Observation],
    count: usize,
    rng: &mut R,
) -> Result<RunSample> {
    let ids = distinct_run_ids(observations);
    if ids.len() < count {
        return Err(DietVizError::InsufficientRuns {
            requested: count,
            available: ids.len(),
        });
    }

    let run_ids: Vec<String> = ids.choose_multiple(rng, count).cloned().collect();
    let selected: HashSet<&str> = run_ids.iter().map(String::as_str).collect();

    let rows = observations
        .iter()
        .filter(|o| selected.contains(o.run_id.as_str()))
        .map(|o| o.record.clone())
        .collect();

    Ok(RunSample { run_ids, rows })
}
