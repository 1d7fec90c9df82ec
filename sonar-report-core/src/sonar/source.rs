use crate::sonar::errors::SonarError;
use crate::sonar::models::{AnalysisScope, ComponentMeasures};
use async_trait::async_trait;

/// Read-only access to the per-project data a report row needs
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Configured metric samples for one project and analysis scope
    async fn measures(
        &self,
        project_key: &str,
        scope: AnalysisScope,
    ) -> Result<ComponentMeasures, SonarError>;

    /// Unresolved issues on the configured branch
    async fn open_issue_count(&self, project_key: &str) -> Result<u64, SonarError>;

    /// Security hotspots on the configured branch
    async fn open_hotspot_count(&self, project_key: &str) -> Result<u64, SonarError>;
}
