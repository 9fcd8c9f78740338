//! Derived fields for the detail screens.
//!
//! Everything here is a pure function of the base record: the report text
//! depends only on the cultivar, the yield breakdown only on the
//! estimated yield string.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::domain::{Assessment, DetailedAssessment, DetailedReport, Report, YieldBreakdown};

/// Share of the total yield attributed to leaves
pub const LEAF_YIELD_SHARE: f64 = 0.3;
/// Share of the total yield attributed to bulbs
pub const BULB_YIELD_SHARE: f64 = 0.7;

const YIELD_UNIT: &str = "t/ha";

const RECOMMENDATIONS: [&str; 6] = [
    "Maintain irrigation at 25-30 mm per week through bulb development",
    "Apply a potassium-rich top dressing at the start of bulbing",
    "Scout weekly for thrips and treat once the action threshold is reached",
    "Rotate out of alliums for at least three seasons on this block",
    "Stop irrigating two weeks before the planned lift to improve skin set",
    "Cure harvested bulbs for 10-14 days in a ventilated, shaded store",
];

pub fn executive_summary(cultivar: &str) -> String {
    format!(
        "This assessment covers the {cultivar} crop across all inspected fields. \
         Plant vigour and stand establishment are in line with expectations for {cultivar} \
         at this stage of the season, with no limiting disease or pest pressure recorded. \
         Yield potential remains on track provided irrigation and nutrition follow the \
         recommendations below."
    )
}

pub fn recommendations() -> Vec<String> {
    RECOMMENDATIONS.iter().map(|r| r.to_string()).collect()
}

pub fn notes(cultivar: &str) -> String {
    format!(
        "Field observations were recorded for {cultivar}. Re-assess {cultivar} plots \
         after the next irrigation cycle to confirm bulb sizing."
    )
}

pub fn detailed_report(report: Report) -> DetailedReport {
    let executive_summary = executive_summary(&report.cultivar);
    let notes = notes(&report.cultivar);
    DetailedReport {
        report,
        detailed: true,
        executive_summary,
        recommendations: recommendations(),
        notes,
    }
}

fn number_pattern() -> &'static Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER.get_or_init(|| Regex::new(r"\d*\.?\d+").expect("static pattern"))
}

/// First decimal number in `text`, or `None` when there is none.
pub fn leading_number(text: &str) -> Option<f64> {
    number_pattern()
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Round to one decimal place, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn format_yield(value: f64) -> String {
    format!("{} {}", value, YIELD_UNIT)
}

/// Split an estimated yield display string such as `"22.4 t/ha"`.
///
/// A string without any number is treated as a yield of 0.
pub fn yield_breakdown(estimated_yield: &str) -> YieldBreakdown {
    let total = leading_number(estimated_yield).unwrap_or_else(|| {
        warn!(estimated_yield, "no number in estimated yield, using 0");
        0.0
    });

    YieldBreakdown {
        leaf_yield: format_yield(round1(total * LEAF_YIELD_SHARE)),
        bulb_yield: format_yield(round1(total * BULB_YIELD_SHARE)),
        total_yield: estimated_yield.to_string(),
    }
}

pub fn detailed_assessment(assessment: Assessment) -> DetailedAssessment {
    let yield_breakdown = yield_breakdown(&assessment.estimated_yield);
    DetailedAssessment {
        assessment,
        detailed: true,
        yield_breakdown,
    }
}
