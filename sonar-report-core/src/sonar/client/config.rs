use crate::config::constants::defaults;

/// HTTP transport settings. Timeouts are left at the reqwest defaults.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub user_agent: String,
    pub pool_max_idle_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::DEFAULT_USER_AGENT.to_string(),
            // one project in flight at a time: four concurrent requests at most
            pool_max_idle_per_host: 4,
        }
    }
}
