use super::metric::{Metric, MetricValue};

/// Metric values of one diet group within one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactRecord {
    /// Diet group label as found in the input (may be outside the known set)
    pub diet_group: String,
    /// One entry per metric, in `Metric::ALL` order
    pub metrics: [MetricValue; 9],
    pub n_participants: f64,
}

impl ImpactRecord {
    pub fn metric(&self, metric: Metric) -> MetricValue {
        self.metrics[metric.index()]
    }
}

/// One row of the reshaped summary table
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Monte Carlo run id, kept in its textual form
    pub run_id: String,
    pub record: ImpactRecord,
}
