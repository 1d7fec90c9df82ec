use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named, ordered group of SonarQube project keys
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectCategory {
    pub name: String,
    #[serde(default)]
    pub projects: Vec<String>,
}

impl ProjectCategory {
    pub fn new(name: impl Into<String>, projects: &[&str]) -> Self {
        Self {
            name: name.into(),
            projects: projects.iter().map(|key| key.to_string()).collect(),
        }
    }
}

/// Ordered category registry. Lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    categories: Vec<ProjectCategory>,
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::new(vec![
            ProjectCategory::new(
                "frontend",
                &[
                    "frontend-web-app",
                    "frontend-admin-dashboard",
                    "landing-page",
                ],
            ),
            ProjectCategory::new(
                "backend",
                &[
                    "api-user-service",
                    "api-billing-service",
                    "api-notification",
                ],
            ),
            ProjectCategory::new("app", &["mobile-app-android", "mobile-app-ios"]),
        ])
    }
}

impl ProjectCatalog {
    pub fn new(categories: Vec<ProjectCategory>) -> Self {
        Self { categories }
    }

    /// Resolve a category token, ignoring case
    pub fn lookup(&self, token: &str) -> Option<&ProjectCategory> {
        self.categories
            .iter()
            .find(|category| category.name.eq_ignore_ascii_case(token))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            let name = category.name.trim();
            if name.is_empty() {
                bail!("category names must not be empty");
            }
            if !seen.insert(name.to_ascii_lowercase()) {
                bail!("category '{name}' is defined more than once");
            }
            if category.projects.iter().any(|key| key.trim().is_empty()) {
                bail!("category '{name}' contains an empty project key");
            }
        }
        Ok(())
    }
}
