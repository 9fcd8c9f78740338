pub mod services;

pub use services::DetailedApi;
