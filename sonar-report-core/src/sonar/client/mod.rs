pub mod config;

pub use config::ClientConfig;

use crate::config::ServerConfig;
use crate::config::constants::{api, metrics};
use crate::sonar::errors::SonarError;
use crate::sonar::models::{
    AnalysisScope, ComponentMeasures, HotspotsResponse, IssuesResponse, MeasuresResponse,
};
use crate::sonar::source::MetricsSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Basic-auth client for a single SonarQube server and branch
#[derive(Clone)]
pub struct SonarClient {
    http: ReqwestClient,
    server: ServerConfig,
}

impl SonarClient {
    pub fn new(server: &ServerConfig) -> Result<Self> {
        Self::with_config(server, ClientConfig::default())
    }

    /// Create a client with custom transport configuration
    pub fn with_config(server: &ServerConfig, config: ClientConfig) -> Result<Self> {
        let http = ReqwestClient::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            server: server.clone(),
        })
    }

    pub fn measures_url(&self, project_key: &str, scope: AnalysisScope) -> String {
        format!(
            "{}{}?component={}&metricKeys={}&branch={}&strategy={}",
            self.server.api_root(),
            api::MEASURES_COMPONENT,
            project_key,
            metrics::REQUESTED.join(","),
            self.server.branch,
            scope.strategy()
        )
    }

    pub fn issues_url(&self, project_key: &str) -> String {
        format!(
            "{}{}?componentKeys={}&resolved=false&branch={}",
            self.server.api_root(),
            api::ISSUES_SEARCH,
            project_key,
            self.server.branch
        )
    }

    pub fn hotspots_url(&self, project_key: &str) -> String {
        format!(
            "{}{}?projectKey={}&branch={}",
            self.server.api_root(),
            api::HOTSPOTS_SEARCH,
            project_key,
            self.server.branch
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, SonarError> {
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.server.username, Some(&self.server.password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SonarError::Status { status, url });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| SonarError::Decode { url, source })
    }
}

#[async_trait]
impl MetricsSource for SonarClient {
    async fn measures(
        &self,
        project_key: &str,
        scope: AnalysisScope,
    ) -> Result<ComponentMeasures, SonarError> {
        let response: MeasuresResponse = self
            .get_json(self.measures_url(project_key, scope))
            .await?;
        Ok(response.component.unwrap_or_default())
    }

    async fn open_issue_count(&self, project_key: &str) -> Result<u64, SonarError> {
        let response: IssuesResponse = self.get_json(self.issues_url(project_key)).await?;
        Ok(response.count())
    }

    async fn open_hotspot_count(&self, project_key: &str) -> Result<u64, SonarError> {
        let response: HotspotsResponse = self.get_json(self.hotspots_url(project_key)).await?;
        Ok(response.count())
    }
}
