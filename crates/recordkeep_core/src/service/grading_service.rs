//! Student grading file processor.
//!
//! Input lines are `id,name,score`; output lines are
//! `name (ID: id): Score = score, Grade = grade`, one per input record, in
//! input order.

use crate::model::student::{Grade, StudentRecord};
use crate::persist::delimited::{load_delimited, parse_delimited, save_lines, DelimitedLine};
use crate::persist::{FormatError, PersistResult};
use log::info;
use std::path::Path;

/// Minimum number of comma-separated fields per record line.
pub const STUDENT_MIN_FIELDS: usize = 3;

pub fn grade_for(score: i32) -> Grade {
    Grade::for_score(score)
}

/// Parses delimited student records from `text`.
pub fn parse_student_records(text: &str) -> Result<Vec<StudentRecord>, FormatError> {
    parse_delimited(text, STUDENT_MIN_FIELDS, parse_student_line)
}

fn parse_student_line(line: &DelimitedLine<'_>) -> Result<StudentRecord, FormatError> {
    let id = line.parse_field(0, "id")?;
    let score = line.parse_field(2, "score")?;
    Ok(StudentRecord::new(id, line.text(1), score))
}

pub fn summary_line(record: &StudentRecord) -> String {
    format!(
        "{} (ID: {}): Score = {}, Grade = {}",
        record.name,
        record.id,
        record.score,
        record.grade()
    )
}

pub fn summarize(records: &[StudentRecord]) -> Vec<String> {
    records.iter().map(summary_line).collect()
}

/// Mean score, or `None` for an empty class.
pub fn class_average(records: &[StudentRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let total: i64 = records.iter().map(|record| i64::from(record.score)).sum();
    Some(total as f64 / records.len() as f64)
}

/// Reads `input`, writes one summary line per record to `output`.
///
/// A missing `input` is `PersistError::NotFound`; nothing is written when
/// parsing fails.
pub fn process_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> PersistResult<Vec<StudentRecord>> {
    let input = input.as_ref();
    let output = output.as_ref();

    let records = load_delimited(input, STUDENT_MIN_FIELDS, parse_student_line)?;
    save_lines(summarize(&records), output)?;

    info!(
        "event=grades_processed module=grading status=ok input={} output={} records={}",
        input.display(),
        output.display(),
        records.len()
    );
    Ok(records)
}
