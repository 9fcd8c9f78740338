pub mod pagination;
pub mod validations;

pub use pagination::{PageView, Paginator};
pub use validations::{FieldErrors, FieldKey, FormValues, ValidationEngine, ValidationRule};
