//! Per-form validation state.
//!
//! [`ValidationEngine`] remembers which fields the user has left at least
//! once and keeps the error map produced by the most recent run of the
//! form's [`ValidationRule`]. Every run replaces the whole map; whether a
//! given error is shown is up to the form, usually via
//! [`ValidationEngine::visible_error`].

pub mod rules;

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

pub use rules::{FnRule, InfallibleRule, ValidationRule, ValidatorRule};

/// Identifies one form field
pub type FieldKey = String;

/// Current field values of a form
pub type FormValues = BTreeMap<FieldKey, Value>;

/// Error message per field
pub type FieldErrors = BTreeMap<FieldKey, String>;

#[derive(Debug, Clone)]
pub struct ValidationEngine<R> {
    rule: R,
    touched: BTreeMap<FieldKey, bool>,
    errors: FieldErrors,
}

impl<R: ValidationRule> ValidationEngine<R> {
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            touched: BTreeMap::new(),
            errors: FieldErrors::new(),
        }
    }

    /// Mark `field` touched and re-validate the whole form.
    ///
    /// The field stays touched even if the rule fails.
    pub fn handle_blur(
        &mut self,
        field: &str,
        values: &FormValues,
    ) -> Result<&FieldErrors, R::Error> {
        self.touched.insert(field.to_string(), true);
        self.run(values)
    }

    /// Re-validate with `value` substituted for `field`.
    ///
    /// Returns `Ok(None)` without running the rule while `field` is untouched.
    pub fn validate_field(
        &mut self,
        field: &str,
        value: Value,
        values: &FormValues,
    ) -> Result<Option<&FieldErrors>, R::Error> {
        if !self.is_touched(field) {
            return Ok(None);
        }
        let mut next = values.clone();
        next.insert(field.to_string(), value);
        self.run(&next).map(Some)
    }

    /// Mark every field present in `values` touched, as on a submit attempt.
    pub fn touch_all(&mut self, values: &FormValues) -> Result<&FieldErrors, R::Error> {
        for key in values.keys() {
            self.touched.insert(key.clone(), true);
        }
        self.run(values)
    }

    /// Re-validate without changing touched state.
    pub fn validate_values(&mut self, values: &FormValues) -> Result<&FieldErrors, R::Error> {
        self.run(values)
    }

    pub fn reset(&mut self) {
        self.touched.clear();
        self.errors.clear();
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn touched(&self) -> &BTreeMap<FieldKey, bool> {
        &self.touched
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.get(field).copied().unwrap_or(false)
    }

    /// The error for `field`, but only once the field has been touched.
    pub fn visible_error(&self, field: &str) -> Option<&str> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn run(&mut self, values: &FormValues) -> Result<&FieldErrors, R::Error> {
        let errors = self.rule.validate(values)?;
        debug!(fields = values.len(), errors = errors.len(), "form validated");
        self.errors = errors;
        Ok(&self.errors)
    }
}

impl<F> ValidationEngine<InfallibleRule<F>>
where
    F: Fn(&FormValues) -> FieldErrors,
{
    /// Engine over a rule that cannot fail.
    pub fn from_fn(rule: F) -> Self {
        Self::new(InfallibleRule(rule))
    }
}

impl<F, E> ValidationEngine<FnRule<F>>
where
    F: Fn(&FormValues) -> Result<FieldErrors, E>,
{
    pub fn try_from_fn(rule: F) -> Self {
        Self::new(FnRule(rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(pairs: &[(&str, Value)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn required_fields(values: &FormValues) -> FieldErrors {
        values
            .iter()
            .filter(|(_, v)| v.as_str().map(str::is_empty).unwrap_or(v.is_null()))
            .map(|(k, _)| (k.clone(), format!("{k} is required")))
            .collect()
    }

    #[test]
    fn blur_touches_field_and_replaces_errors() {
        let mut engine = ValidationEngine::from_fn(required_fields);
        let form = values(&[("farm_name", json!("")), ("cultivar", json!(""))]);

        let errors = engine.handle_blur("farm_name", &form).unwrap().clone();
        assert_eq!(errors.len(), 2);
        assert!(engine.is_touched("farm_name"));
        assert!(!engine.is_touched("cultivar"));

        // Errors are computed for every field, but only touched ones are visible.
        assert_eq!(engine.visible_error("farm_name"), Some("farm_name is required"));
        assert_eq!(engine.visible_error("cultivar"), None);
        assert!(engine.errors().contains_key("cultivar"));
    }

    #[test]
    fn errors_are_replaced_not_merged() {
        let mut engine = ValidationEngine::from_fn(required_fields);
        engine
            .handle_blur("farm_name", &values(&[("farm_name", json!(""))]))
            .unwrap();
        assert!(!engine.is_valid());

        engine
            .handle_blur("cultivar", &values(&[("cultivar", json!(""))]))
            .unwrap();
        assert_eq!(engine.errors().keys().collect::<Vec<_>>(), vec!["cultivar"]);
    }

    #[test]
    fn validate_field_is_ignored_until_touched() {
        let mut engine = ValidationEngine::from_fn(required_fields);
        let form = values(&[("farm_name", json!("North"))]);

        assert!(engine
            .validate_field("farm_name", json!(""), &form)
            .unwrap()
            .is_none());
        assert!(engine.errors().is_empty());

        engine.handle_blur("farm_name", &form).unwrap();
        let errors = engine
            .validate_field("farm_name", json!(""), &form)
            .unwrap()
            .unwrap();
        assert_eq!(errors.get("farm_name").unwrap(), "farm_name is required");
    }

    #[test]
    fn untouched_validate_field_keeps_existing_errors_and_skips_rule() {
        let runs = std::cell::Cell::new(0);
        let mut engine = ValidationEngine::from_fn(|values: &FormValues| {
            runs.set(runs.get() + 1);
            required_fields(values)
        });
        let form = values(&[("farm_name", json!("")), ("cultivar", json!(""))]);

        engine.validate_values(&form).unwrap();
        let before = engine.errors().clone();
        assert_eq!(before.len(), 2);
        assert_eq!(runs.get(), 1);

        assert!(engine
            .validate_field("cultivar", json!("Red Baron"), &form)
            .unwrap()
            .is_none());
        assert_eq!(engine.errors(), &before);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn validate_field_substitutes_value_without_mutating_input() {
        let mut engine = ValidationEngine::from_fn(required_fields);
        let form = values(&[("farm_name", json!(""))]);
        engine.handle_blur("farm_name", &form).unwrap();

        engine
            .validate_field("farm_name", json!("South"), &form)
            .unwrap();
        assert!(engine.is_valid());
        assert_eq!(form["farm_name"], json!(""));
    }

    #[test]
    fn touch_all_marks_every_present_key() {
        let mut engine = ValidationEngine::from_fn(required_fields);
        let form = values(&[
            ("farm_name", json!("North")),
            ("field_name", json!("")),
            ("cultivar", Value::Null),
        ]);

        let errors = engine.touch_all(&form).unwrap();
        assert_eq!(errors.len(), 2);
        assert!(["farm_name", "field_name", "cultivar"]
            .iter()
            .all(|k| engine.is_touched(k)));
        assert_eq!(engine.visible_error("cultivar"), Some("cultivar is required"));
    }

    #[test]
    fn validate_values_leaves_touched_alone() {
        let mut engine = ValidationEngine::from_fn(required_fields);
        engine
            .validate_values(&values(&[("farm_name", json!(""))]))
            .unwrap();
        assert!(engine.touched().is_empty());
        assert_eq!(engine.errors().len(), 1);
        assert_eq!(engine.visible_error("farm_name"), None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut engine = ValidationEngine::from_fn(required_fields);
        engine
            .touch_all(&values(&[("farm_name", json!(""))]))
            .unwrap();
        engine.reset();
        assert!(engine.touched().is_empty());
        assert!(engine.errors().is_empty());
    }

    #[test]
    fn rule_failure_propagates_unchanged() {
        #[derive(Debug, PartialEq)]
        struct RuleBroke(&'static str);

        let mut engine = ValidationEngine::try_from_fn(|values: &FormValues| {
            if values.contains_key("boom") {
                Err(RuleBroke("boom"))
            } else {
                Ok(FieldErrors::from([("x".to_string(), "bad".to_string())]))
            }
        });
        engine.validate_values(&values(&[("x", json!(1))])).unwrap();

        let err = engine
            .handle_blur("boom", &values(&[("boom", json!(1))]))
            .unwrap_err();
        assert_eq!(err, RuleBroke("boom"));
        // previous result is kept, the blur still counts
        assert_eq!(engine.errors().get("x").unwrap(), "bad");
        assert!(engine.is_touched("boom"));
    }
}
