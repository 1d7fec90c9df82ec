//! In-memory report for one project category
//!
//! A [`Report`] is a fixed two-row header followed by one [`ReportRow`] per
//! project that could be fetched, in input order. It is assembled by
//! [`ReportBuilder`] and flushed once through a [`ReportSink`].

pub mod builder;
pub mod format;
pub mod writer;

pub use builder::ReportBuilder;
pub use format::{format_percent, percent_cell};
pub use writer::{ReportSink, XlsxReportWriter, clear_output_folder, report_file_name};

use crate::config::constants::sheet;
use crate::health::HealthTier;

/// Number of data columns: name plus four per scope
pub const COLUMN_COUNT: u16 = 9;

/// First spreadsheet row (zero-based) below the header
pub const FIRST_DATA_ROW: u32 = 2;

/// Values shown under one of the "New Code" / "Overall Code" groups
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeColumns {
    pub coverage: String,
    pub issues: u64,
    pub duplication: String,
    pub hotspots: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Count(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub project_key: String,
    pub name: String,
    pub health: HealthTier,
    pub new_code: ScopeColumns,
    pub overall: ScopeColumns,
}

impl ReportRow {
    /// Cells in column order: name, then coverage/issues/duplication/hotspots
    /// for new code, then the same four for overall code
    pub fn cells(&self) -> Vec<CellValue> {
        let mut cells = Vec::with_capacity(COLUMN_COUNT as usize);
        cells.push(CellValue::Text(self.name.clone()));
        for scope in [&self.new_code, &self.overall] {
            cells.push(CellValue::Text(scope.coverage.clone()));
            cells.push(CellValue::Count(scope.issues));
            cells.push(CellValue::Text(scope.duplication.clone()));
            cells.push(CellValue::Count(scope.hotspots));
        }
        cells
    }
}

/// A project that produced no row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedProject {
    pub project_key: String,
    pub reason: String,
}

/// A styled, possibly merged, header cell. Coordinates are zero-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCell {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
    pub text: &'static str,
    pub fill: u32,
}

impl HeaderCell {
    pub fn is_merged(&self) -> bool {
        self.first_row != self.last_row || self.first_col != self.last_col
    }
}

/// The fixed two-row header band
pub fn header_cells() -> Vec<HeaderCell> {
    let mut cells = vec![
        HeaderCell {
            first_row: 0,
            first_col: 0,
            last_row: 1,
            last_col: 0,
            text: sheet::REPOSITORY_HEADER,
            fill: sheet::REPOSITORY_FILL,
        },
        HeaderCell {
            first_row: 0,
            first_col: 1,
            last_row: 0,
            last_col: 4,
            text: sheet::NEW_CODE_HEADER,
            fill: sheet::NEW_CODE_FILL,
        },
        HeaderCell {
            first_row: 0,
            first_col: 5,
            last_row: 0,
            last_col: 8,
            text: sheet::OVERALL_CODE_HEADER,
            fill: sheet::OVERALL_CODE_FILL,
        },
    ];

    for group_start in [1u16, 5] {
        for (offset, label) in sheet::SUB_HEADERS.into_iter().enumerate() {
            let col = group_start + offset as u16;
            cells.push(HeaderCell {
                first_row: 1,
                first_col: col,
                last_row: 1,
                last_col: col,
                text: label,
                fill: sheet::SUB_HEADER_FILL,
            });
        }
    }
    cells
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    label: String,
    rows: Vec<ReportRow>,
    skipped: Vec<SkippedProject>,
}

impl Report {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rows: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn skipped(&self) -> &[SkippedProject] {
        &self.skipped
    }

    pub fn push_row(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    pub fn push_skipped(&mut self, project_key: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedProject {
            project_key: project_key.into(),
            reason: reason.into(),
        });
    }

    /// Zero-based spreadsheet row of the next appended project
    pub fn next_row_index(&self) -> u32 {
        FIRST_DATA_ROW + self.rows.len() as u32
    }
}
