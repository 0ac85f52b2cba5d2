use super::category::MealCategory;
use chrono::NaiveDate;

/// Fixed leading columns of the pivoted output (the name column header is
/// taken from configuration).
pub const KEY_COLUMNS: usize = 4;

/// Grouping key of an output row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PivotKey {
    pub employee_id: String,
    pub display_name: String,
    pub department: String,
    pub category: MealCategory,
}

/// One output row: a key plus, for each date column, the punch times
/// recorded that day in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotRow {
    pub key: PivotKey,
    pub cells: Vec<Vec<String>>,
}

impl PivotRow {
    /// Text of the cell at `col` (comma-space joined, empty when no punches).
    pub fn cell_text(&self, col: usize) -> String {
        self.cells.get(col).map(|c| c.join(", ")).unwrap_or_default()
    }

    /// Flat record in output column order.
    pub fn to_record(&self) -> Vec<String> {
        let mut out = vec![
            self.key.employee_id.clone(),
            self.key.display_name.clone(),
            self.key.department.clone(),
            self.key.category.label().to_string(),
        ];
        out.extend((0..self.cells.len()).map(|i| self.cell_text(i)));
        out
    }
}

/// Wide table keyed by employee and meal, one column per date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotTable {
    pub name_column: String,
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<PivotRow>,
}

impl PivotTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Date column labels in DD-MM-YYYY form.
    pub fn date_labels(&self) -> Vec<String> {
        self.dates
            .iter()
            .map(|d| d.format("%d-%m-%Y").to_string())
            .collect()
    }

    /// Header row: `EmployeeID, <name column>, Department, Category, <dates...>`.
    pub fn headers(&self) -> Vec<String> {
        let mut out = vec![
            "EmployeeID".to_string(),
            self.name_column.clone(),
            "Department".to_string(),
            "Category".to_string(),
        ];
        out.extend(self.date_labels());
        out
    }

    /// All rows as strings, header excluded.
    pub fn to_table(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(PivotRow::to_record).collect()
    }
}
