//! File persistence: JSON snapshots and delimited text.
//!
//! # Responsibility
//! - Save collections so callers see either the previous or the new file.
//! - Separate "file absent" (expected) from malformed content and I/O
//!   failures.
//!
//! # Invariants
//! - File handles live for exactly one read or write pass.
//! - Format errors always carry the originating 1-based line number.

use log::{error, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;
use thiserror::Error;

pub mod delimited;
pub mod json_snapshot;

pub type PersistResult<T> = Result<T, PersistError>;

/// Content-level parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MissingFields {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid {field} value `{value}`")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },
}

impl FormatError {
    /// 1-based line where the problem was detected.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingFields { line, .. }
            | Self::InvalidField { line, .. }
            | Self::Json { line, .. } => *line,
        }
    }
}

/// File persistence failure.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Required source file does not exist.
    #[error("file not found: `{}`", .0.display())]
    NotFound(PathBuf),
    /// I/O failure other than a missing source.
    #[error("i/o failure on `{}`: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed content in `{}`: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PersistError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(path: &Path, source: FormatError) -> Self {
        Self::Format {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the format error when this failure is content-related.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::Format { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result of loading an optional file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome<T> {
    /// The file existed and parsed.
    Loaded(T),
    /// The file does not exist; there is no prior state.
    Absent,
}

impl<T: Default> LoadOutcome<T> {
    /// Collapses `Absent` into the empty value.
    pub fn unwrap_or_empty(self) -> T {
        match self {
            Self::Loaded(value) => value,
            Self::Absent => T::default(),
        }
    }
}

impl<T> LoadOutcome<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Reads `path` fully, mapping a missing file to `None`.
pub(crate) fn read_optional(path: &Path) -> PersistResult<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(PersistError::io(path, err)),
    }
}

/// Reads `path` fully; a missing file is `PersistError::NotFound`.
pub(crate) fn read_required(path: &Path) -> PersistResult<String> {
    read_optional(path)?.ok_or_else(|| PersistError::NotFound(path.to_path_buf()))
}

/// Writes `bytes` to a temp file next to `path`, then renames it over `path`.
pub(crate) fn write_replacing(path: &Path, bytes: &[u8]) -> PersistResult<()> {
    let started_at = Instant::now();
    let result = write_via_temp(path, bytes);
    match &result {
        Ok(()) => info!(
            "event=file_save module=persist status=ok path={} bytes={} duration_ms={}",
            path.display(),
            bytes.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=file_save module=persist status=error path={} duration_ms={} error={}",
            path.display(),
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

fn write_via_temp(path: &Path, bytes: &[u8]) -> PersistResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Why: a rename within one directory replaces the target in one step, so a
    // failed write never leaves a half-written snapshot behind.
    let mut temp = NamedTempFile::new_in(dir).map_err(|err| PersistError::io(path, err))?;
    temp.write_all(bytes)
        .and_then(|()| temp.flush())
        .map_err(|err| PersistError::io(path, err))?;
    temp.persist(path)
        .map_err(|err| PersistError::io(path, err.error))?;
    Ok(())
}
