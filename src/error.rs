use thiserror::Error;

#[derive(Error, Debug)]
pub enum DietVizError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing expected column: {0}")]
    MissingColumn(String),

    #[error("Invalid number in column {column} at row {row}: {value:?}")]
    InvalidNumber { column: String, row: usize, value: String },

    #[error("Cannot sample {requested} runs: dataset has only {available} distinct run ids")]
    InsufficientRuns { requested: usize, available: usize },

    #[error("No rows left after sampling")]
    EmptySample,

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DietVizError>;
