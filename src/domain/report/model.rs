//! Report domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Still collecting field data
    Draft,
    /// Sent to the grower
    Submitted,
    /// Reviewed by an agronomist
    Reviewed,
}

/// Report as returned by the data-access layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    pub farm_name: String,
    /// Crop variety the report covers; drives all derived report text
    pub cultivar: String,
    pub location: String,
    pub date: NaiveDate,
    pub status: ReportStatus,
    pub summary: String,
}

/// Report with the narrative sections the detail screen renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedReport {
    #[serde(flatten)]
    pub report: Report,
    pub detailed: bool,
    pub executive_summary: String,
    pub recommendations: Vec<String>,
    pub notes: String,
}
