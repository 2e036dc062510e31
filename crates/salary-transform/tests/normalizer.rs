//! Integration tests for mapping-driven normalization.

use std::io;

use proptest::prelude::*;

use salary_model::{
    FieldMapping, GenderOptions, HireDateOptions, MappingDocument, NameOptions, OutputRecord,
    SalaryOptions, SourceTable, StripOptions,
};
use salary_transform::{
    CanonicalNameNormalizer, NameNormalizer, Normalizer, RecordSink, TransformError,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn table(header: &[&str], rows: &[&[&str]]) -> SourceTable {
    let mut table = SourceTable::new(strings(header));
    for row in rows {
        table.push_values(&strings(row));
    }
    table
}

fn mapping() -> MappingDocument {
    MappingDocument {
        name: FieldMapping::new(strings(&["Last", "First"]), NameOptions::default()),
        gender: FieldMapping::new(
            strings(&["Sex"]),
            GenderOptions {
                male_is: "Male".to_string(),
                female_is: "Female".to_string(),
            },
        ),
        title: FieldMapping::new(strings(&["JobTitle"]), StripOptions::from_counts(3, 0)),
        department: FieldMapping::new(strings(&["Dept"]), StripOptions::default()),
        hire_date: FieldMapping::new(
            strings(&["HireDate"]),
            HireDateOptions {
                date_format: "%m/%d/%Y".to_string(),
            },
        ),
        salary: FieldMapping::new(strings(&["Pay"]), SalaryOptions {}),
        entity_name: "Austin ISD".to_string(),
        entity_type: "School District".to_string(),
        received_date: "7/22/2013".to_string(),
    }
}

const HEADER: [&str; 7] = ["First", "Last", "Sex", "JobTitle", "Dept", "HireDate", "Pay"];

fn two_row_table() -> SourceTable {
    table(
        &HEADER,
        &[
            &["JOHN", "SMITH,", "Male", "01-TEACHER", "Lanier HS", "7/22/2013", "$52,000.00"],
            &["MARY", "JONES,", "Female", "02-PRINCIPAL", "Central Office", "1/5/1999", "N/A"],
        ],
    )
}

/// Echoes the prepared input so tests see exactly what the core produced.
struct EchoNormalizer;

impl NameNormalizer for EchoNormalizer {
    fn normalize_person_name(&self, raw: &str, _no_separator_hint: bool) -> String {
        raw.to_string()
    }
}

#[test]
fn end_to_end_two_rows() {
    let mapping = mapping();
    let names = CanonicalNameNormalizer;
    let (records, report) = Normalizer::new(&mapping, &names)
        .normalize(&two_row_table())
        .expect("normalize");

    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        OutputRecord {
            name: "Smith, John".to_string(),
            gender: "M".to_string(),
            title: "TEACHER".to_string(),
            department: "Lanier HS".to_string(),
            hire_date: "07/22/2013".to_string(),
            salary: "52000.00".to_string(),
            entity: "Austin ISD".to_string(),
            entity_type: "School District".to_string(),
            received_date: "7/22/2013".to_string(),
        }
    );
    assert_eq!(records[1].name, "Jones, Mary");
    assert_eq!(records[1].gender, "F");
    assert_eq!(records[1].title, "PRINCIPAL");
    assert_eq!(records[1].hire_date, "01/05/1999");
    assert_eq!(records[1].salary, "0.00");

    assert_eq!(report.rows_written, 2);
    assert_eq!(report.salary_fallbacks.len(), 1);
    assert_eq!(report.salary_fallbacks[0].row, 2);
    assert_eq!(report.salary_fallbacks[0].raw, "N/A");
    assert!(report.unmapped_genders.is_empty());
}

#[test]
fn no_separator_flag_reaches_name_normalizer() {
    let mut mapping = mapping();
    mapping.name = FieldMapping::new(
        strings(&["Last"]),
        NameOptions {
            last_name_space: true,
        },
    );
    let table = table(
        &HEADER,
        &[&["", "SMITH JOHN", "Male", "TEACHER", "HS", "7/22/2013", "1"]],
    );
    let (records, _) = Normalizer::new(&mapping, &EchoNormalizer)
        .normalize(&table)
        .expect("normalize");
    assert_eq!(records[0].name, "SMITH, JOHN");
}

#[test]
fn unmapped_gender_passes_through_and_is_counted() {
    let mapping = mapping();
    let table = table(
        &HEADER,
        &[
            &["A", "B", "Unknown", "T", "D", "1/1/2000", "1"],
            &["C", "D", " Unknown ", "T", "D", "1/1/2000", "1"],
            &["E", "F", "Male", "T", "D", "1/1/2000", "1"],
        ],
    );
    let (records, report) = Normalizer::new(&mapping, &EchoNormalizer)
        .normalize(&table)
        .expect("normalize");
    assert_eq!(records[0].gender, "Unknown");
    assert_eq!(records[1].gender, "Unknown");
    assert_eq!(records[2].gender, "M");
    assert_eq!(report.unmapped_genders.get("Unknown"), Some(&2));
    assert_eq!(report.unmapped_gender_rows(), 2);
}

#[test]
fn invalid_hire_date_aborts_with_context() {
    let mapping = mapping();
    let table = table(
        &HEADER,
        &[
            &["A", "B", "Male", "T", "D", "1/1/2000", "1"],
            &["C", "D", "Male", "T", "D", "not-a-date", "1"],
            &["E", "F", "Male", "T", "D", "1/1/2000", "1"],
        ],
    );
    let mut written: Vec<OutputRecord> = Vec::new();
    let err = Normalizer::new(&mapping, &EchoNormalizer)
        .run(&table, &mut written)
        .unwrap_err();

    match &err {
        TransformError::HireDate {
            row, value, format, ..
        } => {
            assert_eq!(*row, 2);
            assert_eq!(value, "not-a-date");
            assert_eq!(format, "%m/%d/%Y");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("not-a-date"));
    assert!(err.to_string().contains("%m/%d/%Y"));
    // Rows before the failure were already emitted.
    assert_eq!(written.len(), 1);
}

struct FailingSink;

impl RecordSink for FailingSink {
    fn write_record(&mut self, _record: &OutputRecord) -> io::Result<()> {
        Err(io::Error::other("disk full"))
    }
}

#[test]
fn sink_failure_is_reported_with_row() {
    let mapping = mapping();
    let err = Normalizer::new(&mapping, &EchoNormalizer)
        .run(&two_row_table(), &mut FailingSink)
        .unwrap_err();
    assert!(matches!(err, TransformError::Write { row: 1, .. }));
}

#[test]
fn rerun_is_identical() {
    let mapping = mapping();
    let names = CanonicalNameNormalizer;
    let normalizer = Normalizer::new(&mapping, &names);
    let first = normalizer.normalize(&two_row_table()).expect("first run");
    let second = normalizer.normalize(&two_row_table()).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn empty_table_produces_no_records() {
    let mapping = mapping();
    let (records, report) = Normalizer::new(&mapping, &EchoNormalizer)
        .normalize(&SourceTable::new(strings(&HEADER)))
        .expect("normalize");
    assert!(records.is_empty());
    assert_eq!(report.rows_written, 0);
    assert!(report.is_clean());
}

proptest! {
    #[test]
    fn output_row_count_matches_input(
        rows in prop::collection::vec(
            ("[A-Za-z ,]{0,20}", "[A-Za-z]{0,8}", "[$0-9,.A-Z/]{0,12}"),
            0..40,
        )
    ) {
        let mapping = mapping();
        let mut table = SourceTable::new(strings(&HEADER));
        for (name, gender, pay) in &rows {
            table.push_values(&[
                String::new(),
                name.clone(),
                gender.clone(),
                "TITLE".to_string(),
                "DEPT".to_string(),
                "3/4/2010".to_string(),
                pay.clone(),
            ]);
        }
        let names = CanonicalNameNormalizer;
        let (records, report) = Normalizer::new(&mapping, &names)
            .normalize(&table)
            .expect("normalize");
        prop_assert_eq!(records.len(), rows.len());
        prop_assert_eq!(report.rows_written, rows.len());
        for record in &records {
            prop_assert_eq!(record.hire_date.as_str(), "03/04/2010");
            prop_assert!(record.salary.contains('.'));
        }
    }

    #[test]
    fn strip_never_panics(value in "\\PC{0,24}", before in 0usize..30, after in 0usize..30) {
        let options = StripOptions::from_counts(before, after);
        let stripped = salary_transform::strip_chars(&value, &options);
        prop_assert!(stripped.chars().count() <= value.trim().chars().count());
    }
}
