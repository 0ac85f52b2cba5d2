// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json_csv::{write_csv, write_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::pivot::PivotTable;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where the pivoted table goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` means stdout, anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(crate::utils::path::expand_tilde(arg))
        }
    }
}

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `table` in `format` to `target`.
    ///
    /// An existing file is only replaced after confirmation or with `force`.
    /// Binary formats (xlsx, pdf) cannot go to stdout.
    pub fn export(
        table: &PivotTable,
        format: ExportFormat,
        target: &OutputTarget,
        force: bool,
    ) -> AppResult<()> {
        match target {
            OutputTarget::Stdout => {
                if !format.is_text() {
                    return Err(AppError::Export(format!(
                        "{} output cannot be written to stdout, use --output FILE",
                        format.as_str()
                    )));
                }
                let stdout = io::stdout();
                let lock = stdout.lock();
                write_text(table, format, lock)
            }
            OutputTarget::File(path) => {
                ensure_parent_dir(path)?;
                ensure_writable(path, force)?;
                export_file(table, format, path)
            }
        }
    }
}

fn write_text<W: Write>(table: &PivotTable, format: ExportFormat, out: W) -> AppResult<()> {
    match format {
        ExportFormat::Csv => write_csv(table, out),
        ExportFormat::Json => write_json(table, out),
        other => Err(AppError::InvalidExportFormat(other.as_str().to_string())),
    }
}

fn export_file(table: &PivotTable, format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv | ExportFormat::Json => {
            let label = format.as_str().to_uppercase();
            info(format!("Exporting to {label}: {}", path.display()));

            let mut out = BufWriter::new(File::create(path)?);
            write_text(table, format, &mut out)?;
            out.flush()?;

            notify_export_success(&label, path);
            Ok(())
        }
        ExportFormat::Xlsx => export_xlsx(table, path),
        ExportFormat::Pdf => export_pdf(table, path),
    }
}
