//! Farm assessment report
//!
//! Base record as served by the data-access layer, plus its detailed
//! (enriched) form shown on the report screen.

pub mod model;

pub use model::{DetailedReport, Report, ReportStatus};
