//! Assessment domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One field visit as returned by the data-access layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub report_id: String,
    pub field_name: String,
    pub cultivar: String,
    /// Display string such as `"22.4 t/ha"`
    pub estimated_yield: String,
    pub health: String,
    pub date: NaiveDate,
}

/// Estimated yield split into harvestable parts, each formatted as `"<value> t/ha"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldBreakdown {
    pub leaf_yield: String,
    pub bulb_yield: String,
    /// The original `estimated_yield` string, untouched
    pub total_yield: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAssessment {
    #[serde(flatten)]
    pub assessment: Assessment,
    pub detailed: bool,
    pub yield_breakdown: YieldBreakdown,
}
