//! End-to-end tests for a sterilizer run driven by an answers file.

use std::fs;
use std::path::{Path, PathBuf};

use salary_cli::commands::run;
use salary_cli::types::{RunOptions, RunOutcome};

const SOURCE: &str = "\
First,Last,Sex,JobTitle,Dept,HireDate,Pay
JOHN,SMITH,Male,01-TEACHER,Lanier HS,7/22/2013,\"$52,000\"
MARY,JONES,Female,02-PRINCIPAL,Central,1/5/1999,\"$80,000.50\"
";

const ANSWERS: &str = "\
1,0
y
2
Male
Female
3
y
3
0
4
n
5
%m/%d/%Y
6
Austin ISD
School District
7/22/2013
";

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new(source: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pay.csv"), source).unwrap();
        fs::write(dir.path().join("answers.txt"), ANSWERS).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn options(&self) -> RunOptions {
        RunOptions {
            input: self.path("pay.csv"),
            generate_only: false,
            template: None,
            answers: Some(self.path("answers.txt")),
            output_dir: None,
            work_dir: self.dir.path().to_path_buf(),
        }
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn first_run_builds_template_and_writes_output() {
    let fixture = Fixture::new(SOURCE);
    let outcome = run(&fixture.options()).unwrap();

    let result = match outcome {
        RunOutcome::Processed(result) => result,
        other => panic!("expected a processed run, got {other:?}"),
    };
    assert!(result.template_generated);
    assert_eq!(result.template, fixture.path("template.json"));
    assert_eq!(result.output, fixture.path("austin_isd-ready.csv"));
    assert_eq!(result.rows_read, 2);
    assert_eq!(result.report.rows_written, 2);
    assert!(result.report.is_clean());

    insta::assert_snapshot!(read(&result.output), @r#"
    name,gender,title,department,hire_date,salary,entity,type,received_date
    "Smith, John",M,TEACHER,Lanier HS,07/22/2013,52000.00,Austin ISD,School District,7/22/2013
    "Jones, Mary",F,PRINCIPAL,Central,01/05/1999,80000.50,Austin ISD,School District,7/22/2013
    "#);
}

#[test]
fn existing_template_blocks_regeneration() {
    let fixture = Fixture::new(SOURCE);
    fs::write(fixture.path("template.json"), "{}").unwrap();

    let outcome = run(&fixture.options()).unwrap();

    assert!(matches!(
        outcome,
        RunOutcome::TemplateExists { path } if path == fixture.path("template.json")
    ));
    assert_eq!(read(&fixture.path("template.json")), "{}");
    assert!(!fixture.path("austin_isd-ready.csv").exists());
}

#[test]
fn generate_only_stops_before_output() {
    let fixture = Fixture::new(SOURCE);
    let mut options = fixture.options();
    options.generate_only = true;

    let outcome = run(&options).unwrap();

    assert!(matches!(outcome, RunOutcome::TemplateOnly { generated: true, .. }));
    assert!(fixture.path("template.json").is_file());
    assert!(!fixture.path("austin_isd-ready.csv").exists());
}

#[test]
fn explicit_template_is_reused() {
    let fixture = Fixture::new(SOURCE);
    let mut options = fixture.options();
    options.generate_only = true;
    run(&options).unwrap();
    fs::rename(fixture.path("template.json"), fixture.path("austin.json")).unwrap();

    let out_dir = fixture.path("out");
    fs::create_dir(&out_dir).unwrap();
    let options = RunOptions {
        template: Some(fixture.path("austin.json")),
        answers: None,
        output_dir: Some(out_dir.clone()),
        ..fixture.options()
    };
    let RunOutcome::Processed(result) = run(&options).unwrap() else {
        panic!("expected a processed run");
    };

    assert!(!result.template_generated);
    assert_eq!(result.output, out_dir.join("austin_isd-ready.csv"));
    assert!(!fixture.path("template.json").exists());
    assert_eq!(read(&result.output).lines().count(), 3);
}

#[test]
fn template_naming_missing_column_is_rejected() {
    let fixture = Fixture::new(SOURCE);
    let mut options = fixture.options();
    options.generate_only = true;
    run(&options).unwrap();

    fs::write(
        fixture.path("renamed.csv"),
        SOURCE.replacen("Pay", "Salary", 1),
    )
    .unwrap();
    let options = RunOptions {
        input: fixture.path("renamed.csv"),
        template: Some(fixture.path("template.json")),
        ..fixture.options()
    };
    let err = run(&options).unwrap_err();

    assert!(format!("{err:#}").contains("Pay"), "{err:#}");
}

#[test]
fn bad_hire_date_aborts_with_row_context() {
    let fixture = Fixture::new(SOURCE);
    let mut options = fixture.options();
    options.generate_only = true;
    run(&options).unwrap();

    fs::write(
        fixture.path("late.csv"),
        SOURCE.replacen("1/5/1999", "someday", 1),
    )
    .unwrap();
    let options = RunOptions {
        input: fixture.path("late.csv"),
        template: Some(fixture.path("template.json")),
        ..fixture.options()
    };
    let err = run(&options).unwrap_err();
    let message = format!("{err:#}");

    assert!(message.contains("normalize rows"), "{message}");
    assert!(message.contains("row 2"), "{message}");
}

#[test]
fn blank_source_row_reaches_normalizer() {
    let fixture = Fixture::new(SOURCE);
    let mut options = fixture.options();
    options.generate_only = true;
    run(&options).unwrap();

    let gapped = SOURCE.replacen("\nMARY", "\n,,,,,,\nMARY", 1);
    fs::write(fixture.path("gapped.csv"), gapped).unwrap();
    let options = RunOptions {
        input: fixture.path("gapped.csv"),
        template: Some(fixture.path("template.json")),
        ..fixture.options()
    };
    let message = format!("{:#}", run(&options).unwrap_err());

    assert!(message.contains("row 2: hire date ''"), "{message}");
}

#[test]
fn rerun_writes_identical_bytes() {
    let fixture = Fixture::new(SOURCE);
    let mut options = fixture.options();
    options.generate_only = true;
    run(&options).unwrap();

    let mut outputs = Vec::new();
    for dir in ["first", "second"] {
        let out_dir = fixture.path(dir);
        fs::create_dir(&out_dir).unwrap();
        let options = RunOptions {
            template: Some(fixture.path("template.json")),
            output_dir: Some(out_dir),
            ..fixture.options()
        };
        let RunOutcome::Processed(result) = run(&options).unwrap() else {
            panic!("expected a processed run");
        };
        outputs.push(fs::read(&result.output).unwrap());
    }

    assert!(!outputs[0].is_empty());
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn missing_input_reports_path() {
    let fixture = Fixture::new(SOURCE);
    let options = RunOptions {
        input: fixture.path("nope.csv"),
        ..fixture.options()
    };

    let err = run(&options).unwrap_err();

    assert!(format!("{err:#}").contains("nope.csv"));
    assert!(!fixture.path("template.json").exists());
}
