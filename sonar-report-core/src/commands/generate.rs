//! Generate command - one spreadsheet per requested project category

use crate::config::ReportConfig;
use crate::report::{ReportBuilder, ReportSink};
use crate::sonar::MetricsSource;
use anyhow::Result;
use chrono::NaiveDate;
use console::style;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("at least one project category is required: {known}")]
    NoCategories { known: String },
}

/// What happened to one recognized category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOutcome {
    pub category: String,
    /// `None` when the spreadsheet could not be written
    pub path: Option<PathBuf>,
    pub rows: usize,
    pub skipped_projects: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub categories: Vec<CategoryOutcome>,
    pub unknown_categories: Vec<String>,
}

impl RunSummary {
    pub fn rows_written(&self) -> usize {
        self.categories
            .iter()
            .filter(|outcome| outcome.path.is_some())
            .map(|outcome| outcome.rows)
            .sum()
    }

    pub fn projects_skipped(&self) -> usize {
        self.categories
            .iter()
            .map(|outcome| outcome.skipped_projects.len())
            .sum()
    }

    pub fn files_written(&self) -> usize {
        self.categories
            .iter()
            .filter(|outcome| outcome.path.is_some())
            .count()
    }
}

/// Handle the generate command.
///
/// Clears the output folder once, then builds and writes a report for every
/// recognized category token in argument order. Only an empty token list is
/// an error; everything else is logged and skipped.
pub async fn handle_generate_command<S, K>(
    config: &ReportConfig,
    tokens: &[String],
    source: &S,
    sink: &K,
    date: NaiveDate,
) -> Result<RunSummary>
where
    S: MetricsSource + ?Sized,
    K: ReportSink + ?Sized,
{
    if tokens.is_empty() {
        let known = config.categories.names().collect::<Vec<_>>().join(" | ");
        return Err(RunError::NoCategories { known }.into());
    }

    if let Err(err) = sink.clear() {
        let message = format!("{err:#}");
        warn!(error = %message, "Failed to clear output folder");
    }

    let builder = ReportBuilder::new(source, &config.health);
    let mut summary = RunSummary::default();

    for token in tokens {
        let Some(category) = config.categories.lookup(token) else {
            error!(category = %token, "Category not found in configuration");
            summary.unknown_categories.push(token.clone());
            continue;
        };

        info!(
            category = %token,
            projects = category.projects.len(),
            "Generating report"
        );
        let report = builder.build(token, &category.projects).await;

        let path = match sink.write(&report, date) {
            Ok(path) => {
                println!(
                    "{} {} ({} rows, {} skipped)",
                    style("[REPORT]").green().bold(),
                    style(path.display()).cyan(),
                    report.rows().len(),
                    report.skipped().len()
                );
                Some(path)
            }
            Err(err) => {
                let message = format!("{err:#}");
                error!(category = %token, error = %message, "Failed to write report");
                None
            }
        };

        summary.categories.push(CategoryOutcome {
            category: category.name.clone(),
            path,
            rows: report.rows().len(),
            skipped_projects: report
                .skipped()
                .iter()
                .map(|skipped| skipped.project_key.clone())
                .collect(),
        });
    }

    info!(
        files = summary.files_written(),
        rows = summary.rows_written(),
        skipped = summary.projects_skipped(),
        unknown = summary.unknown_categories.len(),
        "Run finished"
    );
    Ok(summary)
}
