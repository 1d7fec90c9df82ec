//! Shared fixtures for the integration tests

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use sonar_report_core::report::{Report, ReportSink};
use sonar_report_core::sonar::models::Measure;
use sonar_report_core::{AnalysisScope, MetricsSource, SonarError};
use sonar_report_core::sonar::ComponentMeasures;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Default)]
pub struct ProjectFixture {
    pub overall: ComponentMeasures,
    pub new_code: ComponentMeasures,
    pub issues: u64,
    pub hotspots: u64,
}

pub fn measures(name: Option<&str>, values: &[(&str, &str)]) -> ComponentMeasures {
    ComponentMeasures {
        key: None,
        name: name.map(str::to_string),
        measures: values
            .iter()
            .map(|(metric, value)| Measure::new(*metric, *value))
            .collect(),
    }
}

/// Answers from fixtures; unknown projects fail every call with HTTP 404
#[derive(Default)]
pub struct ScriptedSource {
    projects: HashMap<String, ProjectFixture>,
    failing_scope: HashMap<String, AnalysisScope>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, key: &str, fixture: ProjectFixture) -> Self {
        self.projects.insert(key.to_string(), fixture);
        self
    }

    /// Only the measures call for `scope` fails; the other three succeed
    pub fn failing_scope(mut self, key: &str, scope: AnalysisScope) -> Self {
        self.failing_scope.insert(key.to_string(), scope);
        self
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    async fn enter(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    fn fixture(&self, key: &str) -> Result<&ProjectFixture, SonarError> {
        self.projects.get(key).ok_or_else(|| SonarError::Status {
            status: StatusCode::NOT_FOUND,
            url: format!("https://sonar.test/{key}"),
        })
    }
}

#[async_trait]
impl MetricsSource for ScriptedSource {
    async fn measures(
        &self,
        project_key: &str,
        scope: AnalysisScope,
    ) -> Result<ComponentMeasures, SonarError> {
        self.enter(format!("measures:{project_key}:{scope}")).await;
        if self.failing_scope.get(project_key) == Some(&scope) {
            return Err(SonarError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                url: format!("https://sonar.test/{project_key}/{scope}"),
            });
        }
        let fixture = self.fixture(project_key)?;
        Ok(match scope {
            AnalysisScope::Overall => fixture.overall.clone(),
            AnalysisScope::NewCode => fixture.new_code.clone(),
        })
    }

    async fn open_issue_count(&self, project_key: &str) -> Result<u64, SonarError> {
        self.enter(format!("issues:{project_key}")).await;
        Ok(self.fixture(project_key)?.issues)
    }

    async fn open_hotspot_count(&self, project_key: &str) -> Result<u64, SonarError> {
        self.enter(format!("hotspots:{project_key}")).await;
        Ok(self.fixture(project_key)?.hotspots)
    }
}

/// Records sink calls instead of touching the filesystem
#[derive(Default)]
pub struct RecordingSink {
    clears: AtomicUsize,
    written: Mutex<Vec<Report>>,
    fail_writes: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }

    pub fn written(&self) -> Vec<Report> {
        self.written.lock().expect("written lock").clone()
    }
}

impl ReportSink for RecordingSink {
    fn clear(&self) -> Result<usize> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        Ok(0)
    }

    fn write(&self, report: &Report, date: NaiveDate) -> Result<PathBuf> {
        if self.fail_writes {
            anyhow::bail!("disk full");
        }
        self.written.lock().expect("written lock").push(report.clone());
        Ok(PathBuf::from(sonar_report_core::report::report_file_name(
            report.label(),
            date,
        )))
    }
}
