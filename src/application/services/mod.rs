//! Application services

mod detailed_api;
pub mod enrichment;

pub use detailed_api::DetailedApi;
