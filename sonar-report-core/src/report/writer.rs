use crate::config::constants::sheet;
use crate::report::{CellValue, FIRST_DATA_ROW, Report, header_cells};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Destination for finished reports
pub trait ReportSink {
    /// Remove previous output. Called once per run, before any report.
    fn clear(&self) -> Result<usize>;

    /// Persist one report and return where it went
    fn write(&self, report: &Report, date: NaiveDate) -> Result<PathBuf>;
}

/// `sonarqube_reporte-<label>_<YYYY-MM-DD>.xlsx`
pub fn report_file_name(label: &str, date: NaiveDate) -> String {
    format!(
        "{}-{}_{}.{}",
        sheet::FILE_PREFIX,
        label,
        date.format("%Y-%m-%d"),
        sheet::FILE_EXTENSION
    )
}

/// Delete the regular files directly inside `folder`. Subdirectories and the
/// folder itself are left alone; a missing folder is not an error.
pub fn clear_output_folder(folder: &Path) -> Result<usize> {
    if !folder.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    let entries = fs::read_dir(folder)
        .with_context(|| format!("Failed to read output folder: {}", folder.display()))?;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read output folder: {}", folder.display()))?;
        let path = entry.path();
        if !entry.file_type()?.is_file() {
            continue;
        }
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
        removed += 1;
    }

    info!(folder = %folder.display(), removed, "Output folder cleared");
    Ok(removed)
}

struct SheetFormats {
    data: Format,
}

impl SheetFormats {
    fn new() -> Self {
        Self {
            data: Format::new()
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin),
        }
    }

    fn header(fill: u32) -> Format {
        Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin)
            .set_background_color(fill)
    }

    fn name(&self, fill: u32) -> Format {
        self.data.clone().set_background_color(fill)
    }
}

/// Writes reports as styled `.xlsx` workbooks into one folder
#[derive(Debug, Clone)]
pub struct XlsxReportWriter {
    output_dir: PathBuf,
}

impl XlsxReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Lay out the header band and data rows into a new workbook
    pub fn render(&self, report: &Report) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let formats = SheetFormats::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(sheet::WORKSHEET_NAME)
            .context("Failed to name worksheet")?;

        for cell in header_cells() {
            let format = SheetFormats::header(cell.fill);
            if cell.is_merged() {
                worksheet
                    .merge_range(
                        cell.first_row,
                        cell.first_col,
                        cell.last_row,
                        cell.last_col,
                        cell.text,
                        &format,
                    )
                    .with_context(|| format!("Failed to write header '{}'", cell.text))?;
            } else {
                worksheet
                    .write_string_with_format(cell.first_row, cell.first_col, cell.text, &format)
                    .with_context(|| format!("Failed to write header '{}'", cell.text))?;
            }
        }

        for (offset, row) in report.rows().iter().enumerate() {
            let row_index = FIRST_DATA_ROW + offset as u32;
            let name_format = formats.name(row.health.fill_color());

            for (col, cell) in row.cells().into_iter().enumerate() {
                let col = col as u16;
                let format = if col == 0 { &name_format } else { &formats.data };
                let written = match cell {
                    CellValue::Text(text) => {
                        worksheet.write_string_with_format(row_index, col, text, format)
                    }
                    CellValue::Count(count) => {
                        worksheet.write_number_with_format(row_index, col, count as f64, format)
                    }
                };
                written.with_context(|| {
                    format!("Failed to write row for project {}", row.project_key)
                })?;
            }
        }

        for (col, width) in sheet::COLUMN_WIDTHS.iter().enumerate() {
            worksheet
                .set_column_width(col as u16, *width)
                .context("Failed to set column width")?;
        }

        Ok(workbook)
    }
}

impl ReportSink for XlsxReportWriter {
    fn clear(&self) -> Result<usize> {
        clear_output_folder(&self.output_dir)
    }

    fn write(&self, report: &Report, date: NaiveDate) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output folder: {}",
                self.output_dir.display()
            )
        })?;

        let path = self
            .output_dir
            .join(report_file_name(report.label(), date));
        let mut workbook = self.render(report)?;
        workbook
            .save(&path)
            .with_context(|| format!("Failed to write spreadsheet: {}", path.display()))?;

        info!(path = %path.display(), rows = report.rows().len(), "Spreadsheet written");
        Ok(path)
    }
}
