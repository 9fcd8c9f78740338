//! In-memory reporting API for development and testing

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use super::seed;
use crate::config::ApiConfig;
use crate::domain::{Assessment, DomainError, DomainResult, Report, ReportingApi};

/// In-memory stand-in for the backend, seeded with demo records
pub struct MockReportingApi {
    reports: DashMap<String, Report>,
    assessments: DashMap<String, Assessment>,
    latency: Duration,
    calls: AtomicUsize,
}

impl MockReportingApi {
    pub fn new() -> Self {
        let api = Self::empty();
        for report in seed::reports() {
            api.insert_report(report);
        }
        for assessment in seed::assessments() {
            api.insert_assessment(assessment);
        }
        api
    }

    /// No records at all
    pub fn empty() -> Self {
        Self {
            reports: DashMap::new(),
            assessments: DashMap::new(),
            latency: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new().with_latency(Duration::from_millis(config.simulated_latency_ms))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn insert_report(&self, report: Report) {
        self.reports.insert(report.id.clone(), report);
    }

    pub fn insert_assessment(&self, assessment: Assessment) {
        self.assessments.insert(assessment.id.clone(), assessment);
    }

    /// Number of API operations served so far
    pub fn upstream_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn begin_call(&self, operation: &'static str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!(operation, "mock api call");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MockReportingApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportingApi for MockReportingApi {
    type Report = Report;
    type Assessment = Assessment;

    async fn get_report_by_id(&self, id: &str) -> DomainResult<Report> {
        self.begin_call("reports.get_by_id").await;
        self.reports
            .get(id)
            .map(|r| r.value().clone())
            .ok_or_else(|| DomainError::not_found("Report", id))
    }

    async fn get_assessment_by_id(&self, id: &str) -> DomainResult<Assessment> {
        self.begin_call("assessments.get_by_id").await;
        self.assessments
            .get(id)
            .map(|a| a.value().clone())
            .ok_or_else(|| DomainError::not_found("Assessment", id))
    }

    async fn list_reports(&self) -> DomainResult<Vec<Report>> {
        self.begin_call("reports.list").await;
        let mut reports: Vec<Report> = self.reports.iter().map(|e| e.value().clone()).collect();
        reports.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(reports)
    }

    async fn list_assessments(&self) -> DomainResult<Vec<Assessment>> {
        self.begin_call("assessments.list").await;
        let mut assessments: Vec<Assessment> =
            self.assessments.iter().map(|e| e.value().clone()).collect();
        assessments.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(assessments)
    }

    async fn list_assessments_for_report(&self, report_id: &str) -> DomainResult<Vec<Assessment>> {
        self.begin_call("assessments.list_for_report").await;
        if !self.reports.contains_key(report_id) {
            return Err(DomainError::not_found("Report", report_id));
        }
        let mut assessments: Vec<Assessment> = self
            .assessments
            .iter()
            .filter(|e| e.value().report_id == report_id)
            .map(|e| e.value().clone())
            .collect();
        assessments.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(assessments)
    }
}
