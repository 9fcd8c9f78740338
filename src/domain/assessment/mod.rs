//! Field assessment

pub mod model;

pub use model::{Assessment, DetailedAssessment, YieldBreakdown};
