//! Detailed record service
//!
//! Wraps the base data-access contract and serves the two by-id lookups
//! as detailed records. Everything else is forwarded untouched.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::enrichment::{detailed_assessment, detailed_report};
use crate::domain::{
    Assessment, BaseApi, DetailedAssessment, DetailedReport, DomainResult, Report, ReportingApi,
};

/// Decorator over [`BaseApi`] that enriches reports and assessments.
///
/// Holds no state besides the wrapped API: every call goes upstream exactly
/// once and derives fresh fields from the result.
#[derive(Clone)]
pub struct DetailedApi {
    base: Arc<BaseApi>,
}

impl DetailedApi {
    pub fn new(base: Arc<BaseApi>) -> Self {
        Self { base }
    }
}

#[async_trait]
impl ReportingApi for DetailedApi {
    type Report = DetailedReport;
    type Assessment = DetailedAssessment;

    async fn get_report_by_id(&self, id: &str) -> DomainResult<DetailedReport> {
        let report = self.base.get_report_by_id(id).await?;
        debug!(report_id = id, cultivar = %report.cultivar, "enriching report");
        Ok(detailed_report(report))
    }

    async fn get_assessment_by_id(&self, id: &str) -> DomainResult<DetailedAssessment> {
        let assessment = self.base.get_assessment_by_id(id).await?;
        debug!(
            assessment_id = id,
            estimated_yield = %assessment.estimated_yield,
            "enriching assessment"
        );
        Ok(detailed_assessment(assessment))
    }

    async fn list_reports(&self) -> DomainResult<Vec<Report>> {
        self.base.list_reports().await
    }

    async fn list_assessments(&self) -> DomainResult<Vec<Assessment>> {
        self.base.list_assessments().await
    }

    async fn list_assessments_for_report(&self, report_id: &str) -> DomainResult<Vec<Assessment>> {
        self.base.list_assessments_for_report(report_id).await
    }
}
