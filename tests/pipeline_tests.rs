mod common;

use common::{ALICE_CSV, cell, find_row};
use punchcat::core::categorize::MealWindows;
use punchcat::core::logic::PunchCategorizer;
use punchcat::core::parse::ParseMode;
use punchcat::core::pivot::DateOrder;
use punchcat::core::schema::validate_columns;
use punchcat::errors::AppError;
use punchcat::models::category::MealCategory;
use std::collections::HashSet;

fn lenient() -> PunchCategorizer {
    PunchCategorizer::default()
}

fn strict() -> PunchCategorizer {
    PunchCategorizer::default().with_mode(ParseMode::Strict)
}

#[test]
fn test_worked_example_pivot() {
    let outcome = lenient().process(ALICE_CSV.as_bytes()).expect("process");
    let table = &outcome.table;

    assert_eq!(
        table.headers(),
        vec![
            "EmployeeID",
            "FirstName",
            "Department",
            "Category",
            "01-01-2024",
            "02-01-2024"
        ]
    );

    assert_eq!(
        table.to_table(),
        vec![
            vec!["E1", "Alice", "Sales", "Dinner", "19:15:00, 19:45:00", ""],
            vec!["E1", "Alice", "Sales", "Lunch", "", "13:00:00"],
        ]
    );

    assert_eq!(outcome.report.rows_read, 3);
    assert_eq!(outcome.report.categorized, 3);
    assert_eq!(outcome.report.output_rows, 2);
    assert_eq!(outcome.report.date_columns, 2);
}

#[test]
fn test_unclassified_punch_never_reaches_output() {
    let input = format!("{ALICE_CSV}E1,Alice,Sales,03-01-2024,10:00:00\n");
    let outcome = lenient().process(input.as_bytes()).expect("process");

    assert_eq!(outcome.report.unclassified, 1);
    // the date only had an unmatched punch, so it gets no column either
    assert!(!outcome.table.date_labels().contains(&"03-01-2024".to_string()));
    for row in outcome.table.to_table() {
        assert!(row.iter().all(|cell| !cell.contains("10:00:00")));
    }
}

#[test]
fn test_lenient_mode_drops_bad_rows() {
    let input = "\
EmployeeID,FirstName,Department,Date,Time
1,Bob,IT,31-02-2024,08:00:00
1,Bob,IT,01-03-2024,8 o'clock
1,Bob,IT,01-03-2024,08:00:00
";
    let outcome = lenient().process(input.as_bytes()).expect("process");

    assert_eq!(outcome.report.rows_read, 3);
    assert_eq!(outcome.report.skipped.len(), 2);
    assert_eq!(outcome.report.skipped[0].line, 2);
    assert_eq!(outcome.report.skipped[1].line, 3);
    assert!(outcome.report.skipped[0].reason.contains("31-02-2024"));

    assert_eq!(outcome.table.len(), 1);
    assert_eq!(outcome.table.date_labels(), vec!["01-03-2024"]);
    assert!(outcome.table.len() <= outcome.report.rows_read);
}

#[test]
fn test_strict_mode_fails_on_first_bad_row() {
    let input = "\
EmployeeID,FirstName,Department,Date,Time
1,Bob,IT,01-03-2024,08:00:00
1,Bob,IT,01-03-2024,25:00:00
";
    match strict().process(input.as_bytes()) {
        Err(AppError::InvalidTime { line, value }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "25:00:00");
        }
        other => panic!("expected InvalidTime, got {other:?}"),
    }

    let bad_date = "EmployeeID,FirstName,Department,Date,Time\n1,Bob,IT,tomorrow,08:00:00\n";
    assert!(matches!(
        strict().process(bad_date.as_bytes()),
        Err(AppError::InvalidDate { line: 2, .. })
    ));
}

#[test]
fn test_missing_columns_short_circuit_before_parsing() {
    // rows are garbage too: the schema error must win even in strict mode
    let input = "EmployeeID,Name,Department,Date,Time\n1,Bob,IT,xx,yy\n";

    match strict().process(input.as_bytes()) {
        Err(AppError::MissingColumns { missing, .. }) => assert_eq!(missing, "FirstName"),
        other => panic!("expected MissingColumns, got {other:?}"),
    }

    let err = validate_columns(["EmployeeID", "FirstName"], "FirstName").unwrap_err();
    assert!(err.to_string().contains("Department, Date, Time"));
}

#[test]
fn test_extra_columns_and_any_order_are_accepted() {
    let input = "\
Time,Badge,Date,Department,FirstName,EmployeeID
07:00:00,X9,01-01-2024,Ops,Carla,7
";
    let outcome = lenient().process(input.as_bytes()).expect("process");
    assert_eq!(
        outcome.table.to_table(),
        vec![vec!["7", "Carla", "Ops", "Breakfast", "07:00:00"]]
    );
}

#[test]
fn test_custom_name_column() {
    let input = "EmployeeID,Name,Department,Date,Time\n1,Bob,IT,01-03-2024,13:00:00\n";
    let outcome = PunchCategorizer::new(MealWindows::default(), "Name")
        .process(input.as_bytes())
        .expect("process");

    assert_eq!(outcome.table.headers()[1], "Name");
    assert_eq!(outcome.table.to_table()[0][1], "Bob");
}

#[test]
fn test_date_columns_chronological_vs_legacy() {
    let input = "\
EmployeeID,FirstName,Department,Date,Time
1,Bob,IT,01-02-2024,13:00:00
1,Bob,IT,02-01-2024,13:00:00
1,Bob,IT,15-01-2024,13:00:00
";
    let chrono_table = lenient().process(input.as_bytes()).unwrap().table;
    assert_eq!(
        chrono_table.date_labels(),
        vec!["02-01-2024", "15-01-2024", "01-02-2024"]
    );

    let legacy_table = lenient()
        .with_date_order(DateOrder::Legacy)
        .process(input.as_bytes())
        .unwrap()
        .table;
    assert_eq!(
        legacy_table.date_labels(),
        vec!["01-02-2024", "02-01-2024", "15-01-2024"]
    );
}

#[test]
fn test_dates_in_different_layouts_share_a_column() {
    let input = "\
EmployeeID,FirstName,Department,Date,Time
1,Bob,IT,05/01/2024,13:00:00
1,Bob,IT,2024-01-05,14:00:00
";
    let table = lenient().process(input.as_bytes()).unwrap().table;
    assert_eq!(table.date_labels(), vec!["05-01-2024"]);
    assert_eq!(table.to_table()[0][4], "13:00:00, 14:00:00");
}

#[test]
fn test_rows_sorted_by_numeric_id_then_category() {
    let input = "\
EmployeeID,FirstName,Department,Date,Time
10,Zed,IT,01-01-2024,13:00:00
9,Amy,HR,01-01-2024,20:00:00
9,Amy,HR,01-01-2024,08:00:00
";
    let table = lenient().process(input.as_bytes()).unwrap().table;
    let keys: Vec<(String, String)> = table
        .to_table()
        .into_iter()
        .map(|r| (r[0].clone(), r[3].clone()))
        .collect();

    assert_eq!(
        keys,
        vec![
            ("9".to_string(), "Breakfast".to_string()),
            ("9".to_string(), "Dinner".to_string()),
            ("10".to_string(), "Lunch".to_string()),
        ]
    );
}

#[test]
fn test_every_combination_lands_in_exactly_one_cell() {
    let input = "\
EmployeeID,FirstName,Department,Date,Time
1,Bob,IT,01-01-2024,08:00:00
1,Bob,IT,01-01-2024,08:30:00
1,Bob,IT,02-01-2024,13:00:00
2,Eve,HR,01-01-2024,13:10:00
2,Eve,HR,01-01-2024,20:00:00
2,Eve,HR,03-01-2024,20:00:00
1,Bob,IT,01-01-2024,13:00:00
";
    let table = lenient().process(input.as_bytes()).unwrap().table;

    let mut seen_keys = HashSet::new();
    for row in &table.rows {
        assert!(seen_keys.insert(row.key.clone()), "duplicated key row");
    }

    let expected = [
        ("1", MealCategory::Breakfast, "01-01-2024", "08:00:00, 08:30:00"),
        ("1", MealCategory::Lunch, "01-01-2024", "13:00:00"),
        ("1", MealCategory::Lunch, "02-01-2024", "13:00:00"),
        ("2", MealCategory::Lunch, "01-01-2024", "13:10:00"),
        ("2", MealCategory::Dinner, "01-01-2024", "20:00:00"),
        ("2", MealCategory::Dinner, "03-01-2024", "20:00:00"),
    ];
    for (id, cat, date, text) in expected {
        let row = find_row(&table, id, cat).expect("row present");
        assert_eq!(cell(&table, row, date).as_deref(), Some(text));
    }

    let non_empty: usize = table
        .rows
        .iter()
        .map(|r| r.cells.iter().filter(|c| !c.is_empty()).count())
        .sum();
    assert_eq!(non_empty, expected.len());
}

#[test]
fn test_duplicate_punches_are_kept() {
    let input = "\
EmployeeID,FirstName,Department,Date,Time
1,Bob,IT,01-01-2024,13:00:00
1,Bob,IT,01-01-2024,13:00:00
";
    let table = lenient().process(input.as_bytes()).unwrap().table;
    assert_eq!(table.to_table()[0][4], "13:00:00, 13:00:00");
}

#[test]
fn test_header_only_input_gives_empty_table() {
    let input = "EmployeeID,FirstName,Department,Date,Time\n";
    let outcome = strict().process(input.as_bytes()).unwrap();
    assert!(outcome.table.is_empty());
    assert!(outcome.table.dates.is_empty());
    assert_eq!(outcome.report.rows_read, 0);
}

#[test]
fn test_rows_with_blank_key_fields_are_dropped() {
    let input = "\
EmployeeID,FirstName,Department,Date,Time
,A,S,01-01-2024,19:00:00
2,,S,01-01-2024,19:00:00
3,C,,01-01-2024,19:00:00
4,D,S,01-01-2024,19:00:00
";
    let outcome = lenient().process(input.as_bytes()).expect("process");

    assert_eq!(outcome.report.rows_read, 4);
    let lines: Vec<u64> = outcome.report.skipped.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![2, 3, 4]);
    assert!(outcome.report.skipped[0].reason.contains("Empty EmployeeID"));
    assert!(outcome.report.skipped[1].reason.contains("Empty FirstName"));
    assert!(outcome.report.skipped[2].reason.contains("Empty Department"));

    assert_eq!(
        outcome.table.to_table(),
        vec![vec!["4", "D", "S", "Dinner", "19:00:00"]]
    );

    match strict().process(input.as_bytes()) {
        Err(AppError::EmptyField { line, column }) => {
            assert_eq!(line, 2);
            assert_eq!(column, "EmployeeID");
        }
        other => panic!("expected EmptyField, got {other:?}"),
    }
}
