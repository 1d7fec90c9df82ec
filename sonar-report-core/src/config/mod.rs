//! Report Configuration Module
//!
//! Loads the server connection, output folder, health thresholds and the
//! category → project registry from `sonar-report.toml`. The resulting
//! [`ReportConfig`] is built once at startup and handed by reference to every
//! component that needs it.

pub mod catalog;
pub mod constants;
pub mod loader;
pub mod thresholds;

pub use catalog::{ProjectCatalog, ProjectCategory};
pub use loader::{ConfigManager, ReportConfig};
pub use thresholds::{HealthThresholds, RatingThreshold, TierThreshold};

use crate::config::constants::defaults;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// SonarQube server connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Base URL of the SonarQube instance, without a trailing `/api`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Basic-auth user name (or a user token with an empty password)
    #[serde(default)]
    pub username: String,

    /// Basic-auth password
    #[serde(default)]
    pub password: String,

    /// Branch queried for every project
    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            username: String::new(),
            password: String::new(),
            branch: default_branch(),
        }
    }
}

impl ServerConfig {
    /// Base URL with any trailing slashes removed
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Where the spreadsheets are written
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_folder")]
    pub folder: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            folder: default_output_folder(),
        }
    }
}

fn default_base_url() -> String {
    defaults::DEFAULT_BASE_URL.to_string()
}

fn default_branch() -> String {
    defaults::DEFAULT_BRANCH.to_string()
}

fn default_output_folder() -> PathBuf {
    PathBuf::from(defaults::DEFAULT_OUTPUT_FOLDER)
}
