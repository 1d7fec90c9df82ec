use crate::config::constants::{env, files};
use crate::config::{HealthThresholds, OutputConfig, ProjectCatalog, ServerConfig};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for sonar-report
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportConfig {
    /// SonarQube connection
    #[serde(default)]
    pub server: ServerConfig,

    /// Spreadsheet destination
    #[serde(default)]
    pub output: OutputConfig,

    /// Traffic-light cutoffs
    #[serde(default)]
    pub health: HealthThresholds,

    /// Category name → ordered project keys
    #[serde(default)]
    pub categories: ProjectCatalog,
}

impl ReportConfig {
    /// Apply `SONAR_*` overrides using the supplied variable lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env::BASE_URL) {
            self.server.base_url = value;
        }
        if let Some(value) = lookup(env::USERNAME) {
            self.server.username = value;
        }
        if let Some(value) = lookup(env::PASSWORD) {
            self.server.password = value;
        }
        if let Some(value) = lookup(env::BRANCH) {
            self.server.branch = value;
        }
        if let Some(value) = lookup(env::OUTPUT_FOLDER) {
            self.output.folder = PathBuf::from(value);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.api_root().trim().is_empty() {
            bail!("server.base_url must not be empty");
        }
        if self.server.branch.trim().is_empty() {
            bail!("server.branch must not be empty");
        }
        self.health.validate()?;
        self.categories.validate()?;
        Ok(())
    }

    /// Write a fully populated configuration file
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> Result<()> {
        let output = output.as_ref();
        let content = toml::to_string_pretty(&ReportConfig::default())
            .context("Failed to serialize default configuration")?;

        fs::write(output, content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }
}

/// Configuration manager for loading and validating configurations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: ReportConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Load from an explicit path when given, otherwise search the default locations
    pub fn load_with_override(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    /// Load configuration from a specific workspace
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        let config_path = workspace.join(files::CONFIG_FILE_NAME);
        if config_path.exists() {
            return Self::load_from_file(&config_path);
        }

        let fallback_path = workspace
            .join(files::CONFIG_DIR_NAME)
            .join(files::CONFIG_FILE_NAME);
        if fallback_path.exists() {
            return Self::load_from_file(&fallback_path);
        }

        if let Some(home_dir) = dirs::home_dir() {
            let home_config_path = home_dir
                .join(files::CONFIG_DIR_NAME)
                .join(files::CONFIG_FILE_NAME);
            if home_config_path.exists() {
                return Self::load_from_file(&home_config_path);
            }
        }

        Self::finish(ReportConfig::default(), None)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ReportConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Self::finish(config, Some(path.to_path_buf()))
    }

    fn finish(mut config: ReportConfig, config_path: Option<PathBuf>) -> Result<Self> {
        config.apply_env_overrides(|key| std::env::var(key).ok());

        let origin = config_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "built-in defaults".to_string());
        config
            .validate()
            .with_context(|| format!("Invalid configuration ({origin})"))?;

        tracing::debug!(config = %origin, "configuration loaded");
        Ok(Self {
            config,
            config_path,
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Consume the manager, keeping only the configuration
    pub fn into_config(self) -> ReportConfig {
        self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: ReportConfig = toml::from_str(
            r#"
            [server]
            base_url = "https://sonar.internal"
            username = "reporter"

            [health.coverage]
            yellow = 40.0
            green = 70.0
            "#,
        )
        .expect("partial config parses");

        assert_eq!(config.server.base_url, "https://sonar.internal");
        assert_eq!(config.server.branch, "develop");
        assert_eq!(config.output.folder, PathBuf::from("reportes"));
        assert_eq!(config.health.coverage.yellow, 40.0);
        assert_eq!(config.health.issues.yellow, 20);
        assert_eq!(config.health.rating.yellow, 2);
        assert!(config.categories.lookup("backend").is_some());
    }

    #[test]
    fn categories_replace_the_defaults() {
        let config: ReportConfig = toml::from_str(
            r#"
            [[categories]]
            name = "Data"
            projects = ["etl-jobs", "warehouse"]
            "#,
        )
        .expect("categories parse");

        let data = config.categories.lookup("data").expect("data category");
        assert_eq!(data.projects, vec!["etl-jobs", "warehouse"]);
        assert!(config.categories.lookup("frontend").is_none());
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SONAR_USERNAME", "ci-bot"),
            ("SONAR_PASSWORD", "s3cret"),
            ("SONAR_OUTPUT_FOLDER", "/tmp/out"),
        ]);
        let mut config = ReportConfig::default();
        config.apply_env_overrides(|key| vars.get(key).map(|value| value.to_string()));

        assert_eq!(config.server.username, "ci-bot");
        assert_eq!(config.server.password, "s3cret");
        assert_eq!(config.output.folder, PathBuf::from("/tmp/out"));
        assert_eq!(config.server.branch, "develop");
    }

    #[test]
    fn load_from_file_reports_parse_errors_with_path() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("sonar-report.toml");
        fs::write(&path, "[server\nbase_url = ").expect("write config");

        let err = ConfigManager::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn workspace_config_is_discovered() {
        let temp_dir = TempDir::new().expect("temp dir");
        fs::write(
            temp_dir.path().join("sonar-report.toml"),
            "[output]\nfolder = \"custom-out\"\n",
        )
        .expect("write config");

        let manager = ConfigManager::load_from_workspace(temp_dir.path()).expect("load");
        assert_eq!(
            manager.config_path(),
            Some(temp_dir.path().join("sonar-report.toml").as_path())
        );
    }

    #[test]
    fn invalid_thresholds_fail_the_load() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("sonar-report.toml");
        fs::write(&path, "[health.issues]\nyellow = 5\ngreen = 20\n").expect("write config");

        let err = ConfigManager::load_from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("health.issues.green"));
    }

    #[test]
    fn sample_config_round_trips() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("sample.toml");
        ReportConfig::create_sample_config(&path).expect("write sample");

        let content = fs::read_to_string(&path).expect("read sample");
        let parsed: ReportConfig = toml::from_str(&content).expect("sample parses");
        assert_eq!(parsed.health, HealthThresholds::default());
        assert_eq!(parsed.categories, ProjectCatalog::default());
    }
}
