use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{ProcessOutcome, ProcessReport, PunchCategorizer};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic, OutputTarget};
use crate::models::pivot::PivotTable;
use crate::ui::messages::{detail, detail_err, header, info, success, warning, warning_err};
use crate::utils::path::{expand_tilde, unique_output_path};
use crate::utils::table::Table;
use std::io;

/// How many dropped rows are listed one by one before summarizing.
const MAX_SKIPPED_SHOWN: usize = 10;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        input,
        output,
        format,
        strict,
        lenient,
        date_order,
        no_preview,
        force,
    } = cmd
    {
        let mut categorizer = PunchCategorizer::from_config(cfg)?;
        if let Some(mode) = Commands::parse_mode_override(*strict, *lenient) {
            categorizer = categorizer.with_mode(mode);
        }
        if let Some(order) = date_order {
            categorizer = categorizer.with_date_order(*order);
        }

        let format = match format {
            Some(f) => *f,
            None => ExportFormat::from_config_str(&cfg.default_format)?,
        };

        let target = match output {
            Some(o) => OutputTarget::from_arg(o),
            None => OutputTarget::File(unique_output_path(
                &cfg.output_dir(),
                &cfg.output_prefix,
                format.as_str(),
            )),
        };

        // with stdout as output only the data goes to stdout
        let to_stdout = target == OutputTarget::Stdout;

        let outcome = read_input(&categorizer, input)?;

        print_skipped(&outcome.report, to_stdout);

        if to_stdout {
            return ExportLogic::export(&outcome.table, format, &target, *force);
        }

        if outcome.table.is_empty() {
            warning("No punches fall inside the meal windows. Nothing to export.");
            print_summary(&categorizer, &outcome.report);
            return Ok(());
        }

        if !*no_preview {
            print_preview(&outcome.table);
        }

        ExportLogic::export(&outcome.table, format, &target, *force)?;
        print_summary(&categorizer, &outcome.report);
    }
    Ok(())
}

fn read_input(categorizer: &PunchCategorizer, input: &str) -> AppResult<ProcessOutcome> {
    if input == "-" {
        return categorizer.process(io::stdin().lock());
    }

    let path = expand_tilde(input);
    if !path.is_file() {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("input file not found: {}", path.display()),
        )));
    }

    categorizer.process_file(&path)
}

/// List dropped rows; on stderr when stdout carries the exported data.
fn print_skipped(report: &ProcessReport, to_stderr: bool) {
    if report.skipped.is_empty() {
        return;
    }

    let warn = |msg: String| {
        if to_stderr {
            warning_err(msg)
        } else {
            warning(msg)
        }
    };
    let item = |msg: String| {
        if to_stderr {
            detail_err(msg)
        } else {
            detail(msg)
        }
    };

    warn(format!(
        "{} row(s) dropped because of an invalid date, time or blank field:",
        report.skipped.len()
    ));
    for row in report.skipped.iter().take(MAX_SKIPPED_SHOWN) {
        item(row.reason.clone());
    }
    if report.skipped.len() > MAX_SKIPPED_SHOWN {
        item(format!(
            "… and {} more",
            report.skipped.len() - MAX_SKIPPED_SHOWN
        ));
    }
}

fn print_preview(table: &PivotTable) {
    header("Processed Data");
    let rendered = Table::from_rows(&table.headers(), table.to_table()).render();
    println!("{rendered}");
}

fn print_summary(categorizer: &PunchCategorizer, report: &ProcessReport) {
    info(format!(
        "Mode: {} | date columns: {}",
        categorizer.mode.as_str(),
        categorizer.date_order.as_str()
    ));
    info(format!(
        "Rows read: {} | invalid: {} | outside meal windows: {} | categorized: {}",
        report.rows_read,
        report.skipped.len(),
        report.unclassified,
        report.categorized
    ));
    success(format!(
        "{} output row(s) across {} date column(s)",
        report.output_rows, report.date_columns
    ));
}
