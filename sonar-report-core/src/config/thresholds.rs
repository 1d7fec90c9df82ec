use crate::config::constants::defaults;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// A two-tier cutoff. `yellow` is the looser tier; `green` the stricter one.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct TierThreshold<T> {
    pub yellow: T,
    pub green: T,
}

/// Single cutoff shared by the reliability, security and maintainability ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RatingThreshold {
    /// 1=A, 2=B, 3=C...
    pub yellow: u8,
}

/// Cutoffs used by [`crate::health::classify`]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HealthThresholds {
    /// Minimum coverage percentage
    #[serde(default = "default_coverage")]
    pub coverage: TierThreshold<f64>,

    /// Maximum duplicated lines density percentage
    #[serde(default = "default_duplications")]
    pub duplications: TierThreshold<f64>,

    /// Maximum unresolved issue count
    #[serde(default = "default_issues")]
    pub issues: TierThreshold<u64>,

    /// Maximum open security hotspot count
    #[serde(default = "default_hotspots")]
    pub hotspots: TierThreshold<u64>,

    #[serde(default = "default_rating")]
    pub rating: RatingThreshold,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            coverage: default_coverage(),
            duplications: default_duplications(),
            issues: default_issues(),
            hotspots: default_hotspots(),
            rating: default_rating(),
        }
    }
}

impl HealthThresholds {
    /// Reject tiers where `green` is looser than `yellow`
    pub fn validate(&self) -> Result<()> {
        if self.coverage.green < self.coverage.yellow {
            bail!(
                "health.coverage.green ({}) must be >= health.coverage.yellow ({})",
                self.coverage.green,
                self.coverage.yellow
            );
        }
        if self.duplications.green > self.duplications.yellow {
            bail!(
                "health.duplications.green ({}) must be <= health.duplications.yellow ({})",
                self.duplications.green,
                self.duplications.yellow
            );
        }
        if self.issues.green > self.issues.yellow {
            bail!(
                "health.issues.green ({}) must be <= health.issues.yellow ({})",
                self.issues.green,
                self.issues.yellow
            );
        }
        if self.hotspots.green > self.hotspots.yellow {
            bail!(
                "health.hotspots.green ({}) must be <= health.hotspots.yellow ({})",
                self.hotspots.green,
                self.hotspots.yellow
            );
        }
        if !(1..=5).contains(&self.rating.yellow) {
            bail!(
                "health.rating.yellow ({}) must be between 1 (A) and 5 (E)",
                self.rating.yellow
            );
        }
        Ok(())
    }
}

fn default_coverage() -> TierThreshold<f64> {
    TierThreshold {
        yellow: defaults::COVERAGE_YELLOW,
        green: defaults::COVERAGE_GREEN,
    }
}

fn default_duplications() -> TierThreshold<f64> {
    TierThreshold {
        yellow: defaults::DUPLICATIONS_YELLOW,
        green: defaults::DUPLICATIONS_GREEN,
    }
}

fn default_issues() -> TierThreshold<u64> {
    TierThreshold {
        yellow: defaults::ISSUES_YELLOW,
        green: defaults::ISSUES_GREEN,
    }
}

fn default_hotspots() -> TierThreshold<u64> {
    TierThreshold {
        yellow: defaults::HOTSPOTS_YELLOW,
        green: defaults::HOTSPOTS_GREEN,
    }
}

fn default_rating() -> RatingThreshold {
    RatingThreshold {
        yellow: defaults::RATING_YELLOW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        HealthThresholds::default()
            .validate()
            .expect("default thresholds should validate");
    }

    #[test]
    fn inverted_coverage_tier_is_rejected() {
        let mut thresholds = HealthThresholds::default();
        thresholds.coverage = TierThreshold {
            yellow: 80.0,
            green: 50.0,
        };
        let err = thresholds.validate().unwrap_err();
        assert!(err.to_string().contains("health.coverage.green"));
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let mut thresholds = HealthThresholds::default();
        thresholds.rating.yellow = 0;
        assert!(thresholds.validate().is_err());
    }
}
