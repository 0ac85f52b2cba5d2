//! Reshape categorized punches into the wide per-date table.

use crate::models::pivot::{PivotKey, PivotRow, PivotTable};
use crate::models::punch::CategorizedRecord;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Order of the date columns in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DateOrder {
    /// Calendar order.
    #[default]
    Chronological,
    /// Text order of the DD-MM-YYYY labels (01-02-2024 before 02-01-2024).
    Legacy,
}

impl DateOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateOrder::Chronological => "chronological",
            DateOrder::Legacy => "legacy",
        }
    }
}

/// Group by (employee, name, department, category) and spread the punch
/// times over one column per distinct date.
///
/// Times keep the order of `records`; duplicates are kept.
pub fn pivot(records: &[CategorizedRecord], name_column: &str, order: DateOrder) -> PivotTable {
    let dates = date_columns(records, order);
    let col_of: HashMap<NaiveDate, usize> =
        dates.iter().enumerate().map(|(i, d)| (*d, i)).collect();

    let mut rows: Vec<PivotRow> = Vec::new();
    let mut row_of: HashMap<PivotKey, usize> = HashMap::new();

    for rec in records {
        let key = PivotKey {
            employee_id: rec.punch.employee_id.clone(),
            display_name: rec.punch.display_name.clone(),
            department: rec.punch.department.clone(),
            category: rec.category,
        };

        let idx = *row_of.entry(key.clone()).or_insert_with(|| {
            rows.push(PivotRow {
                key,
                cells: vec![Vec::new(); dates.len()],
            });
            rows.len() - 1
        });

        if let Some(&col) = col_of.get(&rec.punch.date) {
            rows[idx].cells[col].push(rec.punch.time_str());
        }
    }

    rows.sort_by(|a, b| compare_keys(&a.key, &b.key));

    PivotTable {
        name_column: name_column.to_string(),
        dates,
        rows,
    }
}

fn date_columns(records: &[CategorizedRecord], order: DateOrder) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = records.iter().map(|r| r.punch.date).collect();
    dates.sort();
    dates.dedup();

    if order == DateOrder::Legacy {
        dates.sort_by_cached_key(|d| d.format("%d-%m-%Y").to_string());
    }

    dates
}

fn compare_keys(a: &PivotKey, b: &PivotKey) -> Ordering {
    compare_ids(&a.employee_id, &b.employee_id)
        .then_with(|| a.display_name.cmp(&b.display_name))
        .then_with(|| a.department.cmp(&b.department))
        .then_with(|| a.category.cmp(&b.category))
}

/// Numeric ids compare as numbers, anything else as text.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}
