// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::table_to_export;
use crate::models::pivot::PivotTable;
use std::io::Write;

/// Write the pivot as CSV: header row, then one record per pivot row.
pub fn write_csv<W: Write>(table: &PivotTable, out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(table.headers())?;
    for record in table.to_table() {
        wtr.write_record(&record)?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    Ok(())
}

/// Write the pivot as pretty-printed JSON.
pub fn write_json<W: Write>(table: &PivotTable, mut out: W) -> AppResult<()> {
    let rows = table_to_export(table);

    serde_json::to_writer_pretty(&mut out, &rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    out.write_all(b"\n")?;
    Ok(())
}
