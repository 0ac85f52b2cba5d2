// src/export/model.rs

use crate::models::pivot::PivotTable;
use serde::Serialize;

/// Punch times of one day.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DayPunches {
    pub date: String,
    pub times: Vec<String>,
}

/// JSON shape of a pivot row; empty days are left out.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PivotExport {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub category: String,
    pub punches: Vec<DayPunches>,
}

pub(crate) fn table_to_export(table: &PivotTable) -> Vec<PivotExport> {
    let labels = table.date_labels();

    table
        .rows
        .iter()
        .map(|row| PivotExport {
            employee_id: row.key.employee_id.clone(),
            name: row.key.display_name.clone(),
            department: row.key.department.clone(),
            category: row.key.category.label().to_string(),
            punches: labels
                .iter()
                .zip(&row.cells)
                .filter(|(_, times)| !times.is_empty())
                .map(|(date, times)| DayPunches {
                    date: date.clone(),
                    times: times.clone(),
                })
                .collect(),
        })
        .collect()
}
