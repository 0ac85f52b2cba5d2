#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use punchcat::models::category::MealCategory;
use punchcat::models::pivot::{PivotRow, PivotTable};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pc() -> Command {
    cargo_bin_cmd!("punchcat")
}

/// Punches from the worked example: two dinners on the 1st, a lunch on the 2nd.
pub const ALICE_CSV: &str = "\
EmployeeID,FirstName,Department,Date,Time
E1,Alice,Sales,01-01-2024,19:15:00
E1,Alice,Sales,01-01-2024,19:45:00
E1,Alice,Sales,02-01-2024,13:00:00
";

/// Unique path inside the system temp dir, removed if it already exists
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchcat.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path for a test; the file does not exist, so defaults apply
pub fn setup_config(name: &str) -> String {
    temp_path(&format!("{name}_conf"), "conf")
}

/// Write `content` to a fresh temp CSV and return its path
pub fn write_input(name: &str, content: &str) -> String {
    let p = temp_path(&format!("{name}_in"), "csv");
    fs::write(&p, content).expect("write input csv");
    p
}

/// Empty temp directory for a test
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchcat_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Output row of `employee_id` for `category`
pub fn find_row<'a>(
    table: &'a PivotTable,
    employee_id: &str,
    category: MealCategory,
) -> Option<&'a PivotRow> {
    table
        .rows
        .iter()
        .find(|r| r.key.employee_id == employee_id && r.key.category == category)
}

/// Cell text of `row` under the DD-MM-YYYY `date_label` column
pub fn cell(table: &PivotTable, row: &PivotRow, date_label: &str) -> Option<String> {
    let col = table.date_labels().iter().position(|d| d == date_label)?;
    Some(row.cell_text(col))
}
