//! Event-log ingestion for Process Lens.
//!
//! Turns a CSV file plus a column-name mapping into the immutable
//! [`plens_model::EventLog`] consumed by the mining engine.

pub mod csv_events;
pub mod error;

pub use csv_events::{ColumnMapping, load_events};
pub use error::IngestError;
