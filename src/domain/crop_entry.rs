//! Crop data entry form

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::validations::{ValidationEngine, ValidatorRule};

/// Fields of the crop data entry screen. Empty numeric inputs arrive as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CropEntryForm {
    #[validate(length(min = 1, message = "Farm name is required"))]
    pub farm_name: String,

    #[validate(length(min = 1, message = "Field name is required"))]
    pub field_name: String,

    #[validate(length(min = 1, message = "Cultivar is required"))]
    pub cultivar: String,

    #[validate(
        required(message = "Area is required"),
        range(min = 0.01, max = 10000.0, message = "Area must be between 0.01 and 10000 ha")
    )]
    pub area_hectares: Option<f64>,

    #[validate(range(min = 0.0, message = "Estimated yield cannot be negative"))]
    pub estimated_yield: Option<f64>,
}

pub type CropEntryRule = ValidatorRule<CropEntryForm>;

impl CropEntryForm {
    /// Validation engine wired to this form's rules
    pub fn validation_engine() -> ValidationEngine<CropEntryRule> {
        ValidationEngine::new(CropEntryRule::new())
    }
}
