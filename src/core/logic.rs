use crate::config::Config;
use crate::core::categorize::MealWindows;
use crate::core::parse::{ParseMode, parse_date, parse_time};
use crate::core::pivot::{DateOrder, pivot};
use crate::core::schema::{DEPARTMENT, EMPLOYEE_ID, validate_columns};
use crate::errors::{AppError, AppResult};
use crate::models::pivot::PivotTable;
use crate::models::punch::{CategorizedRecord, PunchRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A row dropped in lenient mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

/// Counters collected while processing one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    pub rows_read: usize,
    pub skipped: Vec<SkippedRow>,
    pub unclassified: usize,
    pub categorized: usize,
    pub output_rows: usize,
    pub date_columns: usize,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub table: PivotTable,
    pub report: ProcessReport,
}

/// Validate → parse → categorize → filter → pivot.
#[derive(Debug, Clone)]
pub struct PunchCategorizer {
    pub windows: MealWindows,
    pub name_column: String,
    pub mode: ParseMode,
    pub date_order: DateOrder,
}

impl Default for PunchCategorizer {
    fn default() -> Self {
        Self::new(MealWindows::default(), "FirstName")
    }
}

impl PunchCategorizer {
    pub fn new(windows: MealWindows, name_column: &str) -> Self {
        Self {
            windows,
            name_column: name_column.to_string(),
            mode: ParseMode::default(),
            date_order: DateOrder::default(),
        }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        cfg.windows.validate()?;
        Ok(Self {
            windows: cfg.windows,
            name_column: cfg.name_column.clone(),
            mode: cfg.parse_mode,
            date_order: cfg.date_order,
        })
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    pub fn process_file(&self, path: &Path) -> AppResult<ProcessOutcome> {
        let file = File::open(path)?;
        self.process(file)
    }

    pub fn process<R: Read>(&self, input: R) -> AppResult<ProcessOutcome> {
        let mut report = ProcessReport::default();

        let punches = self.read_punches(input, &mut report)?;
        let categorized = self.categorize(punches, &mut report);
        let table = pivot(&categorized, &self.name_column, self.date_order);

        report.output_rows = table.len();
        report.date_columns = table.dates.len();

        Ok(ProcessOutcome { table, report })
    }

    /// Read and parse all rows. The header is checked before any row is
    /// touched; in strict mode the first bad row aborts the read.
    ///
    /// A row is bad when its date or time does not parse or when the
    /// employee id, name or department is blank.
    pub fn read_punches<R: Read>(
        &self,
        input: R,
        report: &mut ProcessReport,
    ) -> AppResult<Vec<PunchRecord>> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input);

        let cols = validate_columns(rdr.headers()?.iter(), &self.name_column)?;

        let mut punches = Vec::new();

        for result in rdr.records() {
            let rec = result?;
            report.rows_read += 1;

            let line = rec.position().map(|p| p.line()).unwrap_or_default();
            let field = |i: usize| rec.get(i).unwrap_or("").to_string();

            let key = [
                (EMPLOYEE_ID, field(cols.employee_id)),
                (self.name_column.as_str(), field(cols.name)),
                (DEPARTMENT, field(cols.department)),
            ];
            if let Some((column, _)) = key.iter().find(|(_, v)| v.is_empty()) {
                self.reject(
                    report,
                    AppError::EmptyField {
                        line,
                        column: column.to_string(),
                    },
                )?;
                continue;
            }
            let [(_, employee_id), (_, display_name), (_, department)] = key;

            let raw_date = field(cols.date);
            let raw_time = field(cols.time);

            let date = match parse_date(&raw_date) {
                Some(d) => d,
                None => {
                    self.reject(
                        report,
                        AppError::InvalidDate {
                            line,
                            value: raw_date,
                        },
                    )?;
                    continue;
                }
            };

            let time = match parse_time(&raw_time) {
                Some(t) => t,
                None => {
                    self.reject(
                        report,
                        AppError::InvalidTime {
                            line,
                            value: raw_time,
                        },
                    )?;
                    continue;
                }
            };

            punches.push(PunchRecord {
                employee_id,
                display_name,
                department,
                date,
                time,
                line,
            });
        }

        Ok(punches)
    }

    fn reject(&self, report: &mut ProcessReport, err: AppError) -> AppResult<()> {
        match self.mode {
            ParseMode::Strict => Err(err),
            ParseMode::Lenient => {
                let line = match &err {
                    AppError::InvalidDate { line, .. }
                    | AppError::InvalidTime { line, .. }
                    | AppError::EmptyField { line, .. } => *line,
                    _ => 0,
                };
                report.skipped.push(SkippedRow {
                    line,
                    reason: err.to_string(),
                });
                Ok(())
            }
        }
    }

    /// Attach a category to every punch; punches outside all windows are
    /// dropped and counted.
    pub fn categorize(
        &self,
        punches: Vec<PunchRecord>,
        report: &mut ProcessReport,
    ) -> Vec<CategorizedRecord> {
        let mut out = Vec::with_capacity(punches.len());

        for punch in punches {
            match self.windows.categorize(punch.time) {
                Some(category) => out.push(CategorizedRecord { punch, category }),
                None => report.unclassified += 1,
            }
        }

        report.categorized = out.len();
        out
    }
}
