//! Traffic-light classification of a project's quality snapshot
//!
//! Checks run in a fixed order and the first tier that matches wins:
//! any single red signal makes the project [`HealthTier::Critical`], then any
//! amber signal makes it [`HealthTier::Warning`], otherwise it is
//! [`HealthTier::Good`].
//!
//! Missing or unparseable values only count against the project for
//! coverage. A missing duplication density or rating is never compared.

use crate::config::HealthThresholds;
use crate::config::constants::{metrics, sheet};
use crate::sonar::models::ComponentMeasures;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthTier {
    Critical,
    Warning,
    Good,
}

impl HealthTier {
    /// Background colour of the project name cell
    pub fn fill_color(self) -> u32 {
        match self {
            HealthTier::Critical => sheet::CRITICAL_FILL,
            HealthTier::Warning => sheet::WARNING_FILL,
            HealthTier::Good => sheet::GOOD_FILL,
        }
    }
}

/// Numeric inputs of the classifier
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricSnapshot {
    pub coverage: Option<f64>,
    pub duplication: Option<f64>,
    pub reliability_rating: Option<f64>,
    pub security_rating: Option<f64>,
    pub maintainability_rating: Option<f64>,
}

impl MetricSnapshot {
    /// Merge scopes in priority order. For each metric the first scope that
    /// carries a sample supplies the value, even when it does not parse.
    pub fn from_scopes(scopes: &[&ComponentMeasures]) -> Self {
        let value = |metric: &str| {
            scopes
                .iter()
                .find_map(|scope| scope.measure(metric))
                .and_then(|measure| measure.numeric())
        };

        Self {
            coverage: value(metrics::COVERAGE),
            duplication: value(metrics::DUPLICATED_LINES_DENSITY),
            reliability_rating: value(metrics::RELIABILITY_RATING),
            security_rating: value(metrics::SECURITY_RATING),
            maintainability_rating: value(metrics::MAINTAINABILITY_RATING),
        }
    }

    fn ratings(&self) -> impl Iterator<Item = f64> {
        [
            self.reliability_rating,
            self.security_rating,
            self.maintainability_rating,
        ]
        .into_iter()
        .flatten()
    }
}

pub fn classify(
    snapshot: &MetricSnapshot,
    issues: u64,
    hotspots: u64,
    thresholds: &HealthThresholds,
) -> HealthTier {
    if is_critical(snapshot, issues, hotspots, thresholds) {
        HealthTier::Critical
    } else if is_warning(snapshot, issues, hotspots, thresholds) {
        HealthTier::Warning
    } else {
        HealthTier::Good
    }
}

fn is_critical(
    snapshot: &MetricSnapshot,
    issues: u64,
    hotspots: u64,
    thresholds: &HealthThresholds,
) -> bool {
    let Some(coverage) = snapshot.coverage else {
        return true;
    };
    let rating_cutoff = f64::from(thresholds.rating.yellow) + 1.0;

    coverage < thresholds.coverage.yellow
        || snapshot
            .duplication
            .is_some_and(|duplication| duplication > thresholds.duplications.yellow)
        || issues > thresholds.issues.yellow
        || hotspots > thresholds.hotspots.yellow
        || snapshot.ratings().any(|rating| rating >= rating_cutoff)
}

fn is_warning(
    snapshot: &MetricSnapshot,
    issues: u64,
    hotspots: u64,
    thresholds: &HealthThresholds,
) -> bool {
    let rating_cutoff = f64::from(thresholds.rating.yellow);

    snapshot
        .coverage
        .is_some_and(|coverage| coverage < thresholds.coverage.green)
        || snapshot
            .duplication
            .is_some_and(|duplication| duplication > thresholds.duplications.green)
        || issues > thresholds.issues.green
        || hotspots > thresholds.hotspots.green
        || snapshot.ratings().any(|rating| rating == rating_cutoff)
}
