//! Demo records loaded into the mock API

use chrono::NaiveDate;

use crate::domain::{Assessment, Report, ReportStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub(super) fn reports() -> Vec<Report> {
    vec![
        Report {
            id: "r-001".into(),
            title: "Spring bulb development".into(),
            farm_name: "Greenfield Farm".into(),
            cultivar: "Allium Gold".into(),
            location: "Canterbury".into(),
            date: date(2024, 10, 14),
            status: ReportStatus::Reviewed,
            summary: "Even stand, early bulbing on the northern blocks.".into(),
        },
        Report {
            id: "r-002".into(),
            title: "Mid-season check".into(),
            farm_name: "Riverbend Growers".into(),
            cultivar: "Red Baron".into(),
            location: "Hawke's Bay".into(),
            date: date(2024, 11, 2),
            status: ReportStatus::Submitted,
            summary: "Minor thrips pressure along the shelter belt.".into(),
        },
        Report {
            id: "r-003".into(),
            title: "Pre-harvest estimate".into(),
            farm_name: "Hillside Organics".into(),
            cultivar: "Pukekohe Longkeeper".into(),
            location: "Waikato".into(),
            date: date(2024, 12, 20),
            status: ReportStatus::Draft,
            summary: "Tops beginning to fall over; lift planned in three weeks.".into(),
        },
    ]
}

pub(super) fn assessments() -> Vec<Assessment> {
    vec![
        Assessment {
            id: "a-001".into(),
            report_id: "r-001".into(),
            field_name: "North Block".into(),
            cultivar: "Allium Gold".into(),
            estimated_yield: "22.4 t/ha".into(),
            health: "Good".into(),
            date: date(2024, 10, 12),
        },
        Assessment {
            id: "a-002".into(),
            report_id: "r-001".into(),
            field_name: "River Flat".into(),
            cultivar: "Allium Gold".into(),
            estimated_yield: "19.8 t/ha".into(),
            health: "Fair".into(),
            date: date(2024, 10, 13),
        },
        Assessment {
            id: "a-003".into(),
            report_id: "r-002".into(),
            field_name: "Shelter Belt".into(),
            cultivar: "Red Baron".into(),
            estimated_yield: "17.5 t/ha".into(),
            health: "Fair".into(),
            date: date(2024, 11, 1),
        },
        Assessment {
            id: "a-004".into(),
            report_id: "r-003".into(),
            field_name: "Top Paddock".into(),
            cultivar: "Pukekohe Longkeeper".into(),
            estimated_yield: "pending".into(),
            health: "Good".into(),
            date: date(2024, 12, 18),
        },
    ]
}
