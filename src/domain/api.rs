//! Data-access contract consumed by the screens

use async_trait::async_trait;

use super::{Assessment, Report};
use crate::support::DomainResult;

/// Fetch-by-id and listing operations for reports and assessments.
///
/// The record types returned by the two by-id lookups are associated so a
/// wrapper can serve richer records through the same operation set.
#[async_trait]
pub trait ReportingApi: Send + Sync {
    type Report: Send;
    type Assessment: Send;

    async fn get_report_by_id(&self, id: &str) -> DomainResult<Self::Report>;
    async fn get_assessment_by_id(&self, id: &str) -> DomainResult<Self::Assessment>;

    async fn list_reports(&self) -> DomainResult<Vec<Report>>;
    async fn list_assessments(&self) -> DomainResult<Vec<Assessment>>;
    async fn list_assessments_for_report(&self, report_id: &str) -> DomainResult<Vec<Assessment>>;
}

/// The plain, non-enriched contract
pub type BaseApi = dyn ReportingApi<Report = Report, Assessment = Assessment>;
