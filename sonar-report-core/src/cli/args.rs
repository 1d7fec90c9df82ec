//! CLI argument parsing

use clap::{ColorChoice, Parser, ValueHint};
use std::path::PathBuf;

/// Writes one SonarQube health spreadsheet per project category
#[derive(Parser, Debug)]
#[command(
    name = "sonar-report",
    version,
    about = "Polls SonarQube for each project in the requested categories and writes a colour-coded spreadsheet per category\n\nExample:\n  sonar-report frontend backend",
    color = ColorChoice::Auto
)]
pub struct Cli {
    /// Project categories to report on (matched case-insensitively), e.g. frontend backend app
    #[arg(value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Configuration file; defaults to ./sonar-report.toml, then ~/.sonar-report/sonar-report.toml
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}
