//! CSV event-log reader.
//!
//! The source file is a flat event table: one row per event, with the
//! timestamp, case-id, and activity columns named by the caller. Rows
//! are grouped by case and sorted by parsed timestamp within each case
//! (stable, so ties keep file order); cases are emitted sorted by case
//! id. Two ingests of the same file therefore produce identical logs.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDateTime;

use plens_model::{EventLog, Trace};

use crate::error::IngestError;

/// Names of the three required columns in the source CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub time: String,
    pub case: String,
    pub event: String,
}

impl ColumnMapping {
    pub fn new(
        time: impl Into<String>,
        case: impl Into<String>,
        event: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            case: case.into(),
            event: event.into(),
        }
    }
}

/// Timestamp formats accepted in the time column, tried in order after
/// RFC 3339.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
];

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    for format in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    // Bare date: treat as midnight.
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, IngestError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| IngestError::MissingColumn {
            name: name.to_string(),
        })
}

/// Load an event log from a CSV file.
///
/// Fails with [`IngestError::MissingColumn`] when a mapped column is
/// absent from the header, [`IngestError::InvalidTimestamp`] when a
/// time value cannot be parsed, and [`IngestError::EmptyLog`] when the
/// file holds no data rows.
pub fn load_events(path: &Path, columns: &ColumnMapping) -> Result<EventLog, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let time_idx = column_index(&headers, &columns.time)?;
    let case_idx = column_index(&headers, &columns.case)?;
    let event_idx = column_index(&headers, &columns.event)?;

    // case id -> time-keyed events; BTreeMap keeps case order stable.
    let mut cases: BTreeMap<String, Vec<(NaiveDateTime, String)>> = BTreeMap::new();
    let mut rows: u64 = 0;

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = (idx as u64) + 1;
        rows += 1;

        let raw_time = record.get(time_idx).unwrap_or_default();
        let timestamp =
            parse_timestamp(raw_time).ok_or_else(|| IngestError::InvalidTimestamp {
                row,
                value: raw_time.to_string(),
            })?;
        let case_id = record.get(case_idx).unwrap_or_default().to_string();
        let activity = record.get(event_idx).unwrap_or_default().to_string();

        cases.entry(case_id).or_default().push((timestamp, activity));
    }

    if rows == 0 {
        return Err(IngestError::EmptyLog);
    }

    let traces = cases
        .into_iter()
        .map(|(case_id, mut events)| {
            events.sort_by_key(|(ts, _)| *ts);
            Trace::new(case_id, events.into_iter().map(|(_, a)| a).collect())
        })
        .collect();
    let log = EventLog::new(traces);

    tracing::info!(
        path = %path.display(),
        cases = log.case_count(),
        events = log.event_count(),
        "event log ingested"
    );

    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn mapping() -> ColumnMapping {
        ColumnMapping::new("timestamp", "case", "activity")
    }

    #[test]
    fn groups_by_case_and_sorts_by_time() {
        let file = write_csv(
            "case,activity,timestamp\n\
             c1,review,2024-01-02 09:00:00\n\
             c2,apply,2024-01-01 08:00:00\n\
             c1,apply,2024-01-01 08:00:00\n",
        );
        let log = load_events(file.path(), &mapping()).unwrap();
        assert_eq!(log.case_count(), 2);
        let c1 = &log.traces()[0];
        assert_eq!(c1.case_id, "c1");
        assert_eq!(c1.activities, vec!["apply", "review"]);
    }

    #[test]
    fn stable_sort_keeps_file_order_on_tied_timestamps() {
        let file = write_csv(
            "case,activity,timestamp\n\
             c1,first,2024-01-01 08:00:00\n\
             c1,second,2024-01-01 08:00:00\n",
        );
        let log = load_events(file.path(), &mapping()).unwrap();
        assert_eq!(log.traces()[0].activities, vec!["first", "second"]);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let file = write_csv("case,activity,when\nc1,apply,2024-01-01\n");
        let err = load_events(file.path(), &mapping()).unwrap_err();
        match err {
            IngestError::MissingColumn { name } => assert_eq!(name, "timestamp"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_timestamp_reports_row() {
        let file = write_csv(
            "case,activity,timestamp\n\
             c1,apply,2024-01-01 08:00:00\n\
             c1,review,not-a-time\n",
        );
        let err = load_events(file.path(), &mapping()).unwrap_err();
        match err {
            IngestError::InvalidTimestamp { row, .. } => assert_eq!(row, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = write_csv("case,activity,timestamp\n");
        assert!(matches!(
            load_events(file.path(), &mapping()),
            Err(IngestError::EmptyLog)
        ));
    }

    #[test]
    fn accepts_rfc3339_and_bare_dates() {
        let file = write_csv(
            "case,activity,timestamp\n\
             c1,a,2024-01-02T10:00:00+01:00\n\
             c1,b,2024-01-01\n",
        );
        let log = load_events(file.path(), &mapping()).unwrap();
        assert_eq!(log.traces()[0].activities, vec!["b", "a"]);
    }
}
