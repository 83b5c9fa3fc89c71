use thiserror::Error;

/// Failures while ingesting an event-log source.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("required column not found in header: {name}")]
    MissingColumn { name: String },
    #[error("unparseable timestamp {value:?} in data row {row}")]
    InvalidTimestamp { row: u64, value: String },
    #[error("event log contains no data rows")]
    EmptyLog,
}
