//! Integration tests for the `ReportEngine`.
//!
//! These tests exercise the full E2E flow: CSV input → validation → text report.
use payroll_report::{Error, Report, ReportEngine};
use rust_decimal_macros::dec;
use std::io::{Cursor, Write};

/// Helper to run one or more CSV sources through the engine and render a report
fn render(inputs: &[&str], report: Report) -> String {
    let mut engine = ReportEngine::new();
    for (i, input) in inputs.iter().enumerate() {
        engine
            .load_csv(Cursor::new(*input), &format!("input{i}"))
            .unwrap();
    }

    let mut output = Vec::new();
    engine.write_report(report, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn engine_from(input: &str) -> ReportEngine {
    let mut engine = ReportEngine::new();
    engine.load_csv(Cursor::new(input), "input").unwrap();
    engine
}

#[test]
fn test_negative_hours_row_is_excluded_from_payout() {
    let input = "id,email,name,department,hours_worked,rate
1,ann@x.com,Ann,Eng,10,20
2,bob@x.com,Bob,Eng,-5,15";

    let output = render(&[input], Report::Payout);

    assert!(output.contains("Ann"));
    assert!(output.contains("$200"));
    assert!(!output.contains("Bob"));
}

#[test]
fn test_mean_rate_of_department() {
    let input = "id,email,name,department,hours_worked,rate
1,a@x.com,A,Eng,1,10
2,b@x.com,B,Eng,1,20
3,c@x.com,C,Eng,1,30";

    let engine = engine_from(input);
    let rows = engine.mean_rate_report();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].department, "Eng");
    assert_eq!(rows[0].mean_rate, dec!(20));
    assert!(render(&[input], Report::MeanRateDepartment).contains("Eng       \t20.00"));
}

#[test]
fn test_invalid_rows_never_reach_the_mean() {
    let input = "id,email,name,department,hours_worked,rate
1,a@x.com,A,Eng,1,10
2,b@x.com,B,Eng,1,-100
3,c@x.com,C,Eng,1,
4,d@x.com,D,Eng,abc,1000
5,,E,Eng,1,500
6,f@x.com,F,Eng,1,30";

    let engine = engine_from(input);

    assert_eq!(engine.employee_count(), 2);
    assert_eq!(engine.mean_rate_report()[0].mean_rate, dec!(20));
}

#[test]
fn test_payout_equals_hours_times_rate() {
    let input = "id,email,name,department,hours_worked,rate
1,a@x.com,A,Eng,12.5,40
2,b@x.com,B,Ops,0,99
3,c@x.com,C,Ops,7,0.5";

    let engine = engine_from(input);

    for group in engine.payout_report() {
        for line in group.lines {
            assert_eq!(line.payout, line.hours_worked * line.rate);
            assert!(line.payout >= dec!(0));
        }
    }
}

#[test]
fn test_rate_aliases_across_files() {
    let hourly = "id,email,name,department,hours_worked,hourly_rate
1,a@x.com,Alice,HR,40,50";
    let rate = "department,id,name,email,rate,hours_worked
HR,2,Bob,b@x.com,60,35";
    let salary = "id,email,name,department,hours_worked,salary
3,c@x.com,Carol,Sales,38,70";

    let output = render(&[hourly, rate, salary], Report::Payout);

    assert!(output.contains("$2000"));
    assert!(output.contains("$2100"));
    assert!(output.contains("$2660"));

    let output = render(&[hourly, rate, salary], Report::MeanRateDepartment);
    assert!(output.contains("HR        \t55.00"));
    assert!(output.contains("Sales     \t70.00"));
}

#[test]
fn test_merging_files_equals_concatenation() {
    let first = "id,email,name,department,hours_worked,rate
1,a@x.com,Alice,HR,40,50
2,b@x.com,Bob,Sales,35,-1";
    let second = "id,email,name,department,hours_worked,rate
3,c@x.com,Carol,HR,30,70
4,d@x.com,Dan,Sales,20,40";
    let combined = "id,email,name,department,hours_worked,rate
1,a@x.com,Alice,HR,40,50
2,b@x.com,Bob,Sales,35,-1
3,c@x.com,Carol,HR,30,70
4,d@x.com,Dan,Sales,20,40";

    for report in [Report::Payout, Report::MeanRateDepartment] {
        assert_eq!(
            render(&[first, second], report),
            render(&[combined], report),
            "{report} differs"
        );
    }
}

#[test]
fn test_department_order_does_not_depend_on_file_order() {
    let first = "id,email,name,department,hours_worked,rate
1,a@x.com,Alice,Sales,40,50";
    let second = "id,email,name,department,hours_worked,rate
2,b@x.com,Bob,HR,30,70";

    assert_eq!(
        render(&[first, second], Report::MeanRateDepartment),
        render(&[second, first], Report::MeanRateDepartment)
    );
}

#[test]
fn test_payout_report_full_output() {
    let input = "id,email,name,department,hours_worked,hourly_rate
1,alice@x.com,Alice,Design,150,35
2,bob@x.com,Bob,Marketing,160,40";

    let expected = "\nDesign\n\
                    name \thours\trate\tpayout\n\
                    -----\t-----\t----\t------\n\
                    Alice\t150  \t35  \t$5250 \n\
                    \nMarketing\n\
                    name\thours\trate\tpayout\n\
                    ----\t-----\t----\t------\n\
                    Bob \t160  \t40  \t$6400 \n";

    assert_eq!(render(&[input], Report::Payout), expected);
}

#[test]
fn test_whitespace_handling() {
    let input = "id,  email,  name,  department,  hours_worked,  rate
1,  a@x.com,  Alice ,  HR,  40,  50";

    let engine = engine_from(input);

    assert_eq!(engine.employee_count(), 1);
    assert_eq!(engine.employees()[0].name(), "Alice");
    assert_eq!(engine.employees()[0].payout(), dec!(2000));
}

#[test]
fn test_duplicate_ids_are_kept() {
    let input = "id,email,name,department,hours_worked,rate
1,a@x.com,Alice,HR,1,10
1,a@x.com,Alice,HR,1,30";

    let engine = engine_from(input);

    assert_eq!(engine.employee_count(), 2);
    assert_eq!(engine.mean_rate_report()[0].mean_rate, dec!(20));
}

#[test]
fn test_overflowing_payout_row_is_skipped() {
    let input = "id,email,name,department,hours_worked,rate
1,a@x.com,Huge,Eng,1000000000000000,1000000000000000
2,b@x.com,Ann,Eng,10,20";

    let output = render(&[input], Report::Payout);

    assert!(!output.contains("Huge"));
    assert!(output.contains("$200"));
}

#[test]
fn test_mean_rate_of_huge_rates() {
    let input = "id,email,name,department,hours_worked,rate
1,a@x.com,A,Eng,1,50000000000000000000000000000
2,b@x.com,B,Eng,1,50000000000000000000000000000";

    let engine = engine_from(input);

    assert_eq!(engine.employee_count(), 2);
    assert_eq!(
        engine.mean_rate_report()[0].mean_rate,
        dec!(50000000000000000000000000000)
    );
    assert!(render(&[input], Report::MeanRateDepartment)
        .contains("Eng       \t50000000000000000000000000000.00"));
}

#[test]
fn test_rate_beyond_decimal_range_is_skipped() {
    let input = "id,email,name,department,hours_worked,rate
1,a@x.com,A,Eng,1,1e30
2,b@x.com,B,Eng,1,10";

    let mut engine = ReportEngine::new();
    let summary = engine.load_csv(Cursor::new(input), "input").unwrap();

    assert_eq!(summary.accepted, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(engine.mean_rate_report()[0].mean_rate, dec!(10));
}

#[test]
fn test_duplicate_column_uses_last_value() {
    let input = "id,email,name,department,hours_worked,rate,name
1,a@x.com,First,Eng,10,20,Second";

    let engine = engine_from(input);

    assert_eq!(engine.employee_count(), 1);
    assert_eq!(engine.employees()[0].name(), "Second");
}

#[test]
fn test_no_records_renders_empty_reports() {
    let header = "id,email,name,department,hours_worked,rate\n";

    assert_eq!(render(&[header, ""], Report::Payout), "");
    assert_eq!(
        render(&[header], Report::MeanRateDepartment),
        "\nDepartment\tMean Rate\n----------\t---------\n"
    );
}

// ============================================================================
// File-level errors - These abort loading
// ============================================================================

#[test]
fn test_missing_rate_column_is_an_error() {
    let mut engine = ReportEngine::new();
    let input = "id,email,name,department,hours_worked,wage\n1,a,A,HR,1,1";

    let result = engine.load_csv(Cursor::new(input), "input");

    assert!(matches!(result, Err(Error::MissingRateColumn { .. })));
    assert_eq!(engine.employee_count(), 0);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = ReportEngine::new();

    let result = engine.load_file(dir.path().join("missing.csv"));

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_invalid_utf8_is_an_error() {
    let mut engine = ReportEngine::new();
    let mut input =
        b"id,email,name,department,hours_worked,rate\n1,a@x.com,Ann,HR,1,1\n2,b@x.com,".to_vec();
    input.extend_from_slice(&[0xff, 0xfe]);
    input.extend_from_slice(b",HR,1,1\n");

    let result = engine.load_csv(Cursor::new(input), "input");

    assert!(matches!(result, Err(Error::Csv(_))));
    // Rows read before the failure are not kept
    assert_eq!(engine.employee_count(), 0);
}

#[test]
fn test_load_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "id,email,name,department,hours_worked,salary").unwrap();
    writeln!(file, "1,a@x.com,Alice,HR,40,50").unwrap();
    writeln!(file, "2,b@x.com,Bob,HR,35").unwrap();

    let mut engine = ReportEngine::new();
    let summary = engine.load_file(file.path()).unwrap();

    assert_eq!(summary.accepted, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(engine.employees()[0].rate(), dec!(50));
}
