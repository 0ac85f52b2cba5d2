// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::pivot::PivotTable;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF usando PdfManager e la tabella generata.
pub(crate) fn export_pdf(table: &PivotTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = table.headers();
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    let rows = table.to_table();

    // wide tables get a landscape page
    let mut pdf = if headers.len() > 6 {
        PdfManager::landscape()
    } else {
        PdfManager::new()
    };
    pdf.write_table(&build_pdf_title(table), &header_refs, &rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

/// Title with the covered date span.
fn build_pdf_title(table: &PivotTable) -> String {
    let first = table.dates.iter().min();
    let last = table.dates.iter().max();

    match (first, last) {
        (Some(a), Some(b)) if a == b => format!("Meal punches for {}", a.format("%d-%m-%Y")),
        (Some(a), Some(b)) => format!(
            "Meal punches from {} to {}",
            a.format("%d-%m-%Y"),
            b.format("%d-%m-%Y")
        ),
        _ => "Meal punches".to_string(),
    }
}
