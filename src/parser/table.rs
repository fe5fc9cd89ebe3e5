use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use memmap2::Mmap;

use crate::error::{DietVizError, Result};
use crate::model::{ImpactRecord, Metric, MetricValue, Observation};

pub const RUN_ID_COLUMN: &str = "mc_run_id";
pub const DIET_GROUP_COLUMN: &str = "diet_group";
pub const PARTICIPANTS_COLUMN: &str = "n_participants";

/// Loaded CSV: header row plus data records, all still as text
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: StringRecord,
    pub records: Vec<StringRecord>,
}

/// Column list of the reshaped table, in order
pub fn canonical_columns() -> Vec<String> {
    let mut columns = vec![RUN_ID_COLUMN.to_string(), DIET_GROUP_COLUMN.to_string()];
    columns.extend(Metric::ALL.iter().map(|m| m.mean_column()));
    columns.extend(Metric::SD_COLUMN_ORDER.iter().map(|m| m.sd_column()));
    columns.push(PARTICIPANTS_COLUMN.to_string());
    columns
}

/// Load a CSV file into memory
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let file = File::open(path.as_ref())?;
    let mmap = unsafe { Mmap::map(&file)? };
    read_table(&mmap[..])
}

/// Read CSV text with a header row
pub fn read_table<R: Read>(reader: R) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = reader.headers()?.clone();
    let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(RawTable { headers, records })
}

/// Header index of every canonical column
struct ColumnMap {
    run_id: usize,
    diet_group: usize,
    means: [usize; 9],
    sds: [usize; 9],
    participants: usize,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| DietVizError::MissingColumn(name.to_string()))
        };

        let run_id = find(RUN_ID_COLUMN)?;
        let diet_group = find(DIET_GROUP_COLUMN)?;

        let mut means = [0usize; 9];
        for metric in Metric::ALL {
            means[metric.index()] = find(&metric.mean_column())?;
        }
        let mut sds = [0usize; 9];
        for metric in Metric::SD_COLUMN_ORDER {
            sds[metric.index()] = find(&metric.sd_column())?;
        }

        let participants = find(PARTICIPANTS_COLUMN)?;

        Ok(Self { run_id, diet_group, means, sds, participants })
    }
}

/// Select the canonical columns and parse every row into an `Observation`.
/// Columns not in the canonical list are ignored.
pub fn reshape(table: &RawTable) -> Result<Vec<Observation>> {
    let columns = ColumnMap::resolve(&table.headers)?;

    table
        .records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let row = i + 1;
            let field = |idx: usize| record.get(idx).unwrap_or("").trim();
            let number = |idx: usize| -> Result<f64> {
                let raw = field(idx);
                raw.parse::<f64>().map_err(|_| DietVizError::InvalidNumber {
                    column: table.headers.get(idx).unwrap_or("").to_string(),
                    row,
                    value: raw.to_string(),
                })
            };

            let mut metrics = [MetricValue { mean: 0.0, sd: 0.0 }; 9];
            for metric in Metric::ALL {
                let slot = metric.index();
                metrics[slot] = MetricValue {
                    mean: number(columns.means[slot])?,
                    sd: number(columns.sds[slot])?,
                };
            }

            Ok(Observation {
                run_id: field(columns.run_id).to_string(),
                record: ImpactRecord {
                    diet_group: field(columns.diet_group).to_string(),
                    metrics,
                    n_participants: number(columns.participants)?,
                },
            })
        })
        .collect()
}

/// Load and reshape in one step
pub fn load_observations<P: AsRef<Path>>(path: P) -> Result<Vec<Observation>> {
    let table = load_table(path)?;
    reshape(&table)
}
