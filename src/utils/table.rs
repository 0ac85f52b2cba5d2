//! Plain-text table rendering for the on-screen preview.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table whose column widths fit both headers and cells.
    pub fn from_rows(headers: &[String], rows: Vec<Vec<String>>) -> Self {
        let mut columns: Vec<Column> = headers
            .iter()
            .map(|h| Column {
                header: h.clone(),
                width: UnicodeWidthStr::width(h.as_str()),
            })
            .collect();

        for row in &rows {
            for (col, cell) in columns.iter_mut().zip(row) {
                col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        let mut table = Self::new(columns);
        for row in rows {
            table.add_row(row);
        }
        table
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            push_padded(&mut out, &col.header, col.width);
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                push_padded(&mut out, cell, col.width);
            }
            out.push('\n');
        }

        out
    }
}

fn push_padded(out: &mut String, s: &str, width: usize) {
    out.push_str(s);
    let used = UnicodeWidthStr::width(s);
    out.push_str(&" ".repeat(width.saturating_sub(used) + 1));
}
