use serde::Serialize;
use tracing::debug;

use crate::error::{DietVizError, Result};
use crate::model::{ImpactRecord, Metric};

/// Ticks drawn on every axis
pub const TICK_COUNT: usize = 5;

/// One vertical axis of the parallel-coordinates chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisDimension {
    pub metric: Metric,
    pub label: String,
    /// `[min(mean - sd), max(mean + sd)]` over the plotted rows
    pub range: [f64; 2],
    /// Mean value of each plotted row, in row order
    pub values: Vec<f64>,
    pub tick_values: Vec<f64>,
    pub tick_text: Vec<String>,
}

/// `count` evenly spaced values from `start` to `stop`, both included
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut out: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            out[count - 1] = stop;
            out
        }
    }
}

/// Build one axis for a metric
pub fn build_axis(rows: &[ImpactRecord], metric: Metric) -> Result<AxisDimension> {
    if rows.is_empty() {
        return Err(DietVizError::EmptySample);
    }

    let values: Vec<f64> = rows.iter().map(|r| r.metric(metric).mean).collect();
    let min_val = rows
        .iter()
        .map(|r| r.metric(metric).lower())
        .fold(f64::INFINITY, f64::min);
    let max_val = rows
        .iter()
        .map(|r| r.metric(metric).upper())
        .fold(f64::NEG_INFINITY, f64::max);

    debug!(metric = metric.suffix(), min_val, max_val, "axis range");

    let tick_values = linspace(min_val, max_val, TICK_COUNT);
    let tick_text = tick_values.iter().map(|v| format!("{:.1}", v)).collect();

    Ok(AxisDimension {
        metric,
        label: metric.label().to_string(),
        range: [min_val, max_val],
        values,
        tick_values,
        tick_text,
    })
}

/// Build every axis in canonical metric order
pub fn build_axes(rows: &[ImpactRecord]) -> Result<Vec<AxisDimension>> {
    Metric::ALL.iter().map(|&m| build_axis(rows, m)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MetricValue;
    use proptest::prelude::*;

    fn rows_with(metric: Metric, pairs: &[(f64, f64)]) -> Vec<ImpactRecord> {
        pairs
            .iter()
            .map(|&(mean, sd)| {
                let mut metrics = [MetricValue { mean: 0.0, sd: 0.0 }; 9];
                metrics[metric.index()] = MetricValue { mean, sd };
                ImpactRecord {
                    diet_group: "vegan".to_string(),
                    metrics,
                    n_participants: 1.0,
                }
            })
            .collect()
    }

    #[test]
    fn test_land_axis() {
        let rows = rows_with(Metric::Land, &[(10.0, 1.0), (20.0, 2.0), (30.0, 3.0)]);
        let axis = build_axis(&rows, Metric::Land).unwrap();

        assert_eq!(axis.range, [9.0, 33.0]);
        assert_eq!(axis.tick_values, vec![9.0, 15.0, 21.0, 27.0, 33.0]);
        assert_eq!(axis.tick_text, vec!["9.0", "15.0", "21.0", "27.0", "33.0"]);
        assert_eq!(axis.values, vec![10.0, 20.0, 30.0]);
        assert_eq!(axis.label, "Land Use (m²)");
    }

    #[test]
    fn test_range_uses_sd_not_just_means() {
        // the widest spread comes from the middle row
        let rows = rows_with(Metric::Bio, &[(5.0, 0.0), (6.0, 4.0), (7.0, 0.0)]);
        let axis = build_axis(&rows, Metric::Bio).unwrap();
        assert_eq!(axis.range, [2.0, 10.0]);
    }

    #[test]
    fn test_axes_follow_metric_order() {
        let rows = rows_with(Metric::Eut, &[(1.0, 0.5)]);
        let axes = build_axes(&rows).unwrap();
        let metrics: Vec<_> = axes.iter().map(|a| a.metric).collect();
        assert_eq!(metrics, Metric::ALL.to_vec());
    }

    #[test]
    fn test_empty_rows() {
        assert!(matches!(build_axes(&[]), Err(DietVizError::EmptySample)));
    }

    #[test]
    fn test_linspace_degenerate() {
        assert_eq!(linspace(3.0, 3.0, 5), vec![3.0; 5]);
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert!(linspace(1.0, 2.0, 0).is_empty());
    }

    proptest! {
        /// Property: the range bounds every mean +/- sd and touches at least one row on each side
        #[test]
        fn prop_range_is_tight(pairs in prop::collection::vec((-1000.0f64..1000.0, 0.0f64..100.0), 1..50)) {
            let rows = rows_with(Metric::Ghgs, &pairs);
            let axis = build_axis(&rows, Metric::Ghgs).unwrap();
            let [min_val, max_val] = axis.range;

            prop_assert!(pairs.iter().all(|(m, s)| min_val <= m - s && max_val >= m + s));
            prop_assert!(pairs.iter().any(|(m, s)| min_val == m - s));
            prop_assert!(pairs.iter().any(|(m, s)| max_val == m + s));
        }

        /// Property: ticks are five non-decreasing values spanning the range
        #[test]
        fn prop_ticks_span_range(pairs in prop::collection::vec((-1000.0f64..1000.0, 0.0f64..100.0), 1..50)) {
            let rows = rows_with(Metric::Acid, &pairs);
            let axis = build_axis(&rows, Metric::Acid).unwrap();

            prop_assert_eq!(axis.tick_values.len(), TICK_COUNT);
            prop_assert_eq!(axis.tick_text.len(), TICK_COUNT);
            prop_assert!(axis.tick_values.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(axis.tick_values[0], axis.range[0]);
            prop_assert_eq!(axis.tick_values[TICK_COUNT - 1], axis.range[1]);
        }
    }
}
