//! Header validation for punch files.

use crate::errors::{AppError, AppResult};

pub const EMPLOYEE_ID: &str = "EmployeeID";
pub const DEPARTMENT: &str = "Department";
pub const DATE: &str = "Date";
pub const TIME: &str = "Time";

/// Position of every required column in the input header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub employee_id: usize,
    pub name: usize,
    pub department: usize,
    pub date: usize,
    pub time: usize,
}

/// Required column names, in the documented order.
pub fn required_columns(name_column: &str) -> [&str; 5] {
    [EMPLOYEE_ID, name_column, DEPARTMENT, DATE, TIME]
}

/// Locate the required columns in `headers`. Extra columns are ignored;
/// any missing column fails the whole input.
pub fn validate_columns<'a, I>(headers: I, name_column: &str) -> AppResult<ColumnMap>
where
    I: IntoIterator<Item = &'a str>,
{
    let headers: Vec<&str> = headers.into_iter().map(str::trim).collect();
    let required = required_columns(name_column);

    let mut positions = [0usize; 5];
    let mut missing: Vec<&str> = Vec::new();

    for (slot, name) in required.iter().enumerate() {
        match headers.iter().position(|h| h == name) {
            Some(i) => positions[slot] = i,
            None => missing.push(*name),
        }
    }

    if !missing.is_empty() {
        return Err(AppError::MissingColumns {
            expected: required.join(", "),
            missing: missing.join(", "),
        });
    }

    let [employee_id, name, department, date, time] = positions;
    Ok(ColumnMap {
        employee_id,
        name,
        department,
        date,
        time,
    })
}
