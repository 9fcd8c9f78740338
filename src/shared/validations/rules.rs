//! Validation rules accepted by [`super::ValidationEngine`]

use std::convert::Infallible;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use super::{FieldErrors, FormValues};
use crate::support::DomainError;

/// Turns the current form values into a field → message map.
///
/// Implementations should be pure: the engine may call them on every blur.
pub trait ValidationRule {
    type Error;

    fn validate(&self, values: &FormValues) -> Result<FieldErrors, Self::Error>;
}

/// Wraps a closure that always produces an error map
#[derive(Debug, Clone)]
pub struct InfallibleRule<F>(pub F);

impl<F> ValidationRule for InfallibleRule<F>
where
    F: Fn(&FormValues) -> FieldErrors,
{
    type Error = Infallible;

    fn validate(&self, values: &FormValues) -> Result<FieldErrors, Infallible> {
        Ok((self.0)(values))
    }
}

/// Wraps a closure that may fail
#[derive(Debug, Clone)]
pub struct FnRule<F>(pub F);

impl<F, E> ValidationRule for FnRule<F>
where
    F: Fn(&FormValues) -> Result<FieldErrors, E>,
{
    type Error = E;

    fn validate(&self, values: &FormValues) -> Result<FieldErrors, E> {
        (self.0)(values)
    }
}

/// Reads the form values into `T` and runs its `validator` rules.
///
/// Values that cannot be read into `T` at all (wrong JSON type for a
/// field) fail with [`DomainError::Validation`].
pub struct ValidatorRule<T> {
    _form: PhantomData<fn() -> T>,
}

impl<T> ValidatorRule<T> {
    pub fn new() -> Self {
        Self { _form: PhantomData }
    }
}

impl<T> Default for ValidatorRule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ValidationRule for ValidatorRule<T>
where
    T: DeserializeOwned + Validate,
{
    type Error = DomainError;

    fn validate(&self, values: &FormValues) -> Result<FieldErrors, DomainError> {
        let object: Map<String, Value> = values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let form: T = serde_json::from_value(Value::Object(object))
            .map_err(|e| DomainError::Validation(format!("unreadable form values: {}", e)))?;

        Ok(match form.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => field_errors(&errors),
        })
    }
}

/// First message per field, falling back to the validator code.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (field.to_string(), msg)
            })
        })
        .collect()
}
