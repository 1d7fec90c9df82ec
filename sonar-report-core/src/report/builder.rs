use crate::config::HealthThresholds;
use crate::config::constants::metrics;
use crate::health::{MetricSnapshot, classify};
use crate::report::format::percent_cell;
use crate::report::{Report, ReportRow, ScopeColumns};
use crate::sonar::errors::SonarError;
use crate::sonar::models::AnalysisScope;
use crate::sonar::source::MetricsSource;
use tracing::{debug, error};

/// Fetches, classifies and assembles rows for one category.
///
/// Projects are processed one at a time in input order; only the four calls
/// for a single project run concurrently.
pub struct ReportBuilder<'a, S: MetricsSource + ?Sized> {
    source: &'a S,
    thresholds: &'a HealthThresholds,
}

impl<'a, S: MetricsSource + ?Sized> ReportBuilder<'a, S> {
    pub fn new(source: &'a S, thresholds: &'a HealthThresholds) -> Self {
        Self { source, thresholds }
    }

    pub async fn build(&self, label: &str, projects: &[String]) -> Report {
        let mut report = Report::new(label);

        for project_key in projects {
            match self.collect_row(project_key).await {
                Ok(row) => {
                    debug!(
                        project = %project_key,
                        row = report.next_row_index(),
                        health = ?row.health,
                        "row assembled"
                    );
                    report.push_row(row);
                }
                Err(err) => {
                    error!(project = %project_key, error = %err, "Failed to collect project metrics");
                    report.push_skipped(project_key.as_str(), err.to_string());
                }
            }
        }

        report
    }

    async fn collect_row(&self, project_key: &str) -> Result<ReportRow, SonarError> {
        let (overall, new_code, issues, hotspots) = tokio::try_join!(
            self.source.measures(project_key, AnalysisScope::Overall),
            self.source.measures(project_key, AnalysisScope::NewCode),
            self.source.open_issue_count(project_key),
            self.source.open_hotspot_count(project_key),
        )?;

        let snapshot = MetricSnapshot::from_scopes(&[&new_code, &overall]);
        let health = classify(&snapshot, issues, hotspots, self.thresholds);

        let name = overall
            .display_name()
            .unwrap_or(project_key)
            .to_string();

        // No separate new-code query exists for issues and hotspots, so both
        // groups show the same counts.
        Ok(ReportRow {
            project_key: project_key.to_string(),
            name,
            health,
            new_code: ScopeColumns {
                coverage: percent_cell(&new_code, metrics::COVERAGE),
                issues,
                duplication: percent_cell(&new_code, metrics::DUPLICATED_LINES_DENSITY),
                hotspots,
            },
            overall: ScopeColumns {
                coverage: percent_cell(&overall, metrics::COVERAGE),
                issues,
                duplication: percent_cell(&overall, metrics::DUPLICATED_LINES_DENSITY),
                hotspots,
            },
        })
    }
}
