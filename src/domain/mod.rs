pub mod api;
pub mod assessment;
pub mod crop_entry;
pub mod report;

// Re-export commonly used types
pub use api::{BaseApi, ReportingApi};
pub use assessment::{Assessment, DetailedAssessment, YieldBreakdown};
pub use crop_entry::CropEntryForm;
pub use report::{DetailedReport, Report, ReportStatus};

pub use crate::support::errors::{DomainError, DomainResult};
