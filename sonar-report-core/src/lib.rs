//! sonar-report Core Library
//!
//! Reads coverage, duplication, rating, issue and hotspot data for configured
//! SonarQube projects, classifies each project as critical, warning or good,
//! and writes one styled spreadsheet per project category.
//!
//! ```rust,ignore
//! use sonar_report_core::{ConfigManager, SonarClient, XlsxReportWriter, handle_generate_command};
//!
//! let config = ConfigManager::load()?.into_config();
//! let client = SonarClient::new(&config.server)?;
//! let writer = XlsxReportWriter::new(&config.output.folder);
//! let today = chrono::Utc::now().date_naive();
//! handle_generate_command(&config, &["frontend".into()], &client, &writer, today).await?;
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod health;
pub mod report;
pub mod sonar;

// Re-exports for convenience
pub use cli::args::Cli;
pub use commands::{CategoryOutcome, RunError, RunSummary, handle_generate_command};
pub use config::{ConfigManager, HealthThresholds, ProjectCatalog, ProjectCategory, ReportConfig};
pub use health::{HealthTier, MetricSnapshot, classify};
pub use report::{Report, ReportBuilder, ReportRow, ReportSink, XlsxReportWriter};
pub use sonar::{AnalysisScope, MetricsSource, SonarClient, SonarError};
