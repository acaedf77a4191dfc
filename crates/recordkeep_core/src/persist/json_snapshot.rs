//! Pretty-printed JSON array snapshots.

use crate::persist::{
    read_optional, write_replacing, FormatError, LoadOutcome, PersistError, PersistResult,
};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Serializes `records` as a pretty JSON array and replaces `path` with it.
pub fn save_snapshot<T: Serialize>(records: &[T], path: impl AsRef<Path>) -> PersistResult<()> {
    let path = path.as_ref();
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    write_replacing(path, json.as_bytes())
}

/// Loads a snapshot written by [`save_snapshot`].
///
/// A missing file yields `LoadOutcome::Absent`; content that is not a JSON
/// array of `T` is a `PersistError::Format`.
pub fn load_snapshot<T: DeserializeOwned>(
    path: impl AsRef<Path>,
) -> PersistResult<LoadOutcome<Vec<T>>> {
    let path = path.as_ref();
    let Some(content) = read_optional(path)? else {
        info!(
            "event=snapshot_load module=persist status=absent path={}",
            path.display()
        );
        return Ok(LoadOutcome::Absent);
    };

    let records: Vec<T> = serde_json::from_str(&content).map_err(|err| {
        warn!(
            "event=snapshot_load module=persist status=malformed path={} line={} column={}",
            path.display(),
            err.line(),
            err.column()
        );
        PersistError::format(path, json_format_error(&err))
    })?;

    info!(
        "event=snapshot_load module=persist status=ok path={} records={}",
        path.display(),
        records.len()
    );
    Ok(LoadOutcome::Loaded(records))
}

fn json_format_error(err: &serde_json::Error) -> FormatError {
    FormatError::Json {
        line: err.line(),
        column: err.column(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{load_snapshot, save_snapshot};
    use crate::persist::{FormatError, LoadOutcome};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Entry {
        id: u32,
        label: String,
    }

    #[test]
    fn snapshot_is_pretty_printed_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        save_snapshot(
            &[Entry {
                id: 1,
                label: "a".to_string(),
            }],
            &path,
        )
        .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n"));
        assert!(text.contains("  {"));
    }

    #[test]
    fn empty_snapshot_loads_as_empty_not_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        save_snapshot::<Entry>(&[], &path).unwrap();

        let loaded = load_snapshot::<Entry>(&path).unwrap();
        assert_eq!(loaded, LoadOutcome::Loaded(Vec::new()));
    }

    #[test]
    fn malformed_snapshot_reports_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(&path, "[\n  {\"id\": 1, \"label\": }\n]").unwrap();

        let err = load_snapshot::<Entry>(&path).unwrap_err();
        let format = err.format_error().expect("format error expected");
        assert!(matches!(format, FormatError::Json { line: 2, .. }));
    }
}
