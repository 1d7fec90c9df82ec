//! Response shapes for the SonarQube Web API endpoints we read

use serde::{Deserialize, Serialize};
use std::fmt;

/// Analysis window for the measures endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisScope {
    /// Entire codebase (`strategy=all`)
    Overall,
    /// Changes since the new-code baseline (`strategy=leak`)
    NewCode,
}

impl AnalysisScope {
    pub fn strategy(self) -> &'static str {
        match self {
            AnalysisScope::Overall => "all",
            AnalysisScope::NewCode => "leak",
        }
    }
}

impl fmt::Display for AnalysisScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strategy())
    }
}

/// `GET /api/measures/component`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MeasuresResponse {
    #[serde(default)]
    pub component: Option<ComponentMeasures>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ComponentMeasures {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub measures: Vec<Measure>,
}

impl ComponentMeasures {
    pub fn measure(&self, metric: &str) -> Option<&Measure> {
        self.measures.iter().find(|measure| measure.metric == metric)
    }

    /// Display name, if the server sent a non-empty one
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// A single metric sample. New-code values may arrive under `period`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Measure {
    pub metric: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub period: Option<PeriodValue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PeriodValue {
    #[serde(default)]
    pub value: Option<String>,
}

impl Measure {
    pub fn new(metric: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            value: Some(value.into()),
            period: None,
        }
    }

    pub fn raw_value(&self) -> Option<&str> {
        self.value
            .as_deref()
            .or_else(|| self.period.as_ref().and_then(|period| period.value.as_deref()))
    }

    /// Finite numeric value; `None` when missing or unparseable
    pub fn numeric(&self) -> Option<f64> {
        self.raw_value()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite())
    }
}

/// `GET /api/issues/search`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IssuesResponse {
    #[serde(default)]
    pub total: Option<u64>,
}

impl IssuesResponse {
    pub fn count(&self) -> u64 {
        self.total.unwrap_or(0)
    }
}

/// `GET /api/hotspots/search`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HotspotsResponse {
    #[serde(default)]
    pub paging: Option<Paging>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Paging {
    #[serde(default)]
    pub total: Option<u64>,
}

impl HotspotsResponse {
    pub fn count(&self) -> u64 {
        self.paging
            .as_ref()
            .and_then(|paging| paging.total)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_measures_payload() {
        let payload = json!({
            "component": {
                "key": "api-user-service",
                "name": "API User Service",
                "qualifier": "TRK",
                "measures": [
                    { "metric": "coverage", "value": "84.5", "bestValue": false },
                    { "metric": "duplicated_lines_density", "value": "3.1" },
                    { "metric": "sqale_rating", "value": "1.0", "bestValue": true }
                ]
            }
        });
        let response: MeasuresResponse = serde_json::from_value(payload).expect("decode");
        let component = response.component.expect("component");

        assert_eq!(component.display_name(), Some("API User Service"));
        assert_eq!(component.measure("coverage").and_then(Measure::numeric), Some(84.5));
        assert_eq!(component.measure("sqale_rating").and_then(Measure::numeric), Some(1.0));
        assert!(component.measure("security_rating").is_none());
    }

    #[test]
    fn period_value_backs_a_missing_top_level_value() {
        let measure: Measure = serde_json::from_value(json!({
            "metric": "new_coverage",
            "period": { "index": 1, "value": "71.25" }
        }))
        .expect("decode");
        assert_eq!(measure.numeric(), Some(71.25));
    }

    #[test]
    fn unparseable_values_are_not_numeric() {
        assert_eq!(Measure::new("coverage", "n/a").numeric(), None);
        assert_eq!(Measure::new("coverage", "NaN").numeric(), None);
    }

    #[test]
    fn issue_and_hotspot_totals_default_to_zero() {
        let issues: IssuesResponse = serde_json::from_value(json!({ "issues": [] })).expect("decode");
        assert_eq!(issues.count(), 0);

        let issues: IssuesResponse =
            serde_json::from_value(json!({ "total": 17, "p": 1, "ps": 100 })).expect("decode");
        assert_eq!(issues.count(), 17);

        let hotspots: HotspotsResponse =
            serde_json::from_value(json!({ "paging": { "pageIndex": 1, "total": 4 } }))
                .expect("decode");
        assert_eq!(hotspots.count(), 4);

        let hotspots: HotspotsResponse = serde_json::from_value(json!({})).expect("decode");
        assert_eq!(hotspots.count(), 0);
    }

    #[test]
    fn scope_maps_to_strategy() {
        assert_eq!(AnalysisScope::Overall.strategy(), "all");
        assert_eq!(AnalysisScope::NewCode.to_string(), "leak");
    }
}
