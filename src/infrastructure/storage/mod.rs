//! Mock data-access layer backing the screens during development

mod memory;
mod seed;

pub use memory::MockReportingApi;
