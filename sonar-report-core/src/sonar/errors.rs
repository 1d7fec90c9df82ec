use reqwest::StatusCode;

/// Failure of a single SonarQube Web API call
#[derive(Debug, thiserror::Error)]
pub enum SonarError {
    #[error("HTTP {status}")]
    Status { status: StatusCode, url: String },
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SonarError {
    /// HTTP status for `Status` failures
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SonarError::Status { status, .. } => Some(*status),
            SonarError::Transport(err) => err.status(),
            SonarError::Decode { .. } => None,
        }
    }
}
