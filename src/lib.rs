//! # Agro Report client core
//!
//! Reusable client-side pieces of the farm assessment reporting app.
//!
//! ## Architecture
//!
//! - **domain**: Records, the data-access contract and the crop entry form
//! - **shared**: Pagination and form validation state used by list and form screens
//! - **application**: Detailed record service wrapping the data-access contract
//! - **infrastructure**: Mock data-access layer
//! - **config** / **logging**: TOML configuration and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod shared;
pub mod support;

pub use config::{default_config_path, AppConfig};
pub use logging::init_tracing;

pub use application::DetailedApi;
pub use infrastructure::MockReportingApi;
pub use shared::{Paginator, ValidationEngine};
