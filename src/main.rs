use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use sonar_report_core::{
    Cli, ConfigManager, SonarClient, XlsxReportWriter, handle_generate_command,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = Cli::parse();
    if args.categories.is_empty() {
        eprintln!(
            "{} Pass at least one project category, e.g. frontend | backend | app",
            style("error:").red().bold()
        );
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Cli) -> Result<()> {
    let manager = ConfigManager::load_with_override(args.config.as_deref())?;
    if let Some(path) = manager.config_path() {
        tracing::info!(config = %path.display(), "Using configuration file");
    }
    let config = manager.into_config();

    let client = SonarClient::new(&config.server).context("Failed to initialize SonarQube client")?;
    let writer = XlsxReportWriter::new(&config.output.folder);
    let today = chrono::Utc::now().date_naive();

    let summary = handle_generate_command(&config, &args.categories, &client, &writer, today).await?;

    if !summary.unknown_categories.is_empty() {
        let known = config.categories.names().collect::<Vec<_>>().join(", ");
        eprintln!(
            "{} unknown categories: {} (configured: {known})",
            style("warning:").yellow().bold(),
            summary.unknown_categories.join(", ")
        );
    }

    Ok(())
}
