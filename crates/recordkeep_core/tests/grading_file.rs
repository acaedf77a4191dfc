use recordkeep_core::service::grading_service::{
    class_average, grade_for, parse_student_records, process_file, summary_line,
};
use recordkeep_core::{FormatError, Grade, PersistError, StudentRecord};

#[test]
fn grade_boundaries() {
    assert_eq!(grade_for(79), Grade::B);
    assert_eq!(grade_for(80), Grade::A);
    assert_eq!(grade_for(59), Grade::D);
    assert_eq!(grade_for(60), Grade::C);
    assert_eq!(grade_for(-5), Grade::F);
}

#[test]
fn parses_trimmed_fields_and_skips_blank_lines() {
    let text = "101, Alice Smith , 85\n\n102,Bob Jones,72\n";
    let records = parse_student_records(text).unwrap();
    assert_eq!(
        records,
        vec![
            StudentRecord::new(101, "Alice Smith", 85),
            StudentRecord::new(102, "Bob Jones", 72),
        ]
    );
}

#[test]
fn non_numeric_third_field_is_invalid_score() {
    let err = parse_student_records("101,Alice Smith,Female").unwrap_err();
    assert_eq!(
        err,
        FormatError::InvalidField {
            line: 1,
            field: "score",
            value: "Female".to_string(),
        }
    );
}

#[test]
fn two_field_line_is_missing_fields_with_line_number() {
    let err = parse_student_records("101,Alice,90\n102,Bob\n").unwrap_err();
    assert_eq!(
        err,
        FormatError::MissingFields {
            line: 2,
            expected: 3,
            found: 2,
        }
    );
}

#[test]
fn bad_score_is_reported_on_score_field() {
    let err = parse_student_records("101,Alice,notanumber").unwrap_err();
    match err {
        FormatError::InvalidField { line, field, value } => {
            assert_eq!(line, 1);
            assert_eq!(field, "score");
            assert_eq!(value, "notanumber");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_id_is_reported_on_id_field() {
    let err = parse_student_records("\nabc,Alice,90").unwrap_err();
    assert!(matches!(
        err,
        FormatError::InvalidField {
            line: 2,
            field: "id",
            ..
        }
    ));
}

#[test]
fn summary_line_format() {
    let line = summary_line(&StudentRecord::new(101, "Alice Smith", 85));
    assert_eq!(line, "Alice Smith (ID: 101): Score = 85, Grade = A");
}

#[test]
fn class_average_of_empty_class_is_none() {
    assert_eq!(class_average(&[]), None);
    let avg = class_average(&[
        StudentRecord::new(1, "a", 80),
        StudentRecord::new(2, "b", 70),
    ])
    .unwrap();
    assert!((avg - 75.0).abs() < f64::EPSILON);
}

#[test]
fn process_file_writes_one_line_per_record_in_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("students.txt");
    let output = dir.path().join("grades.txt");
    std::fs::write(&input, "103,Cara,59\n101,Alice,80\n\n102,Bob,79\n").unwrap();

    let records = process_file(&input, &output).unwrap();
    assert_eq!(records.len(), 3);

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "Cara (ID: 103): Score = 59, Grade = D\n\
         Alice (ID: 101): Score = 80, Grade = A\n\
         Bob (ID: 102): Score = 79, Grade = B\n"
    );
}

#[test]
fn process_file_missing_input_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = process_file(dir.path().join("nope.txt"), dir.path().join("out.txt")).unwrap_err();
    assert!(matches!(err, PersistError::NotFound(_)));
    assert!(!dir.path().join("out.txt").exists());
}

#[test]
fn process_file_malformed_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("students.txt");
    let output = dir.path().join("grades.txt");
    std::fs::write(&input, "101,Alice,80\n102,Bob\n").unwrap();

    let err = process_file(&input, &output).unwrap_err();
    assert_eq!(err.format_error().map(FormatError::line), Some(2));
    assert!(!output.exists());
}
