//! Controller and field binding options

use super::errors::ErrorMap;
use crate::config::FormConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Whole-form validator: recomputes every error from the full record
pub type ValidationFn<R> = Box<dyn Fn(&R) -> ErrorMap>;

/// Converts an untyped handler input into the field's JSON value
pub type JsonMap = Box<dyn Fn(Value) -> Value>;

/// Options accepted when creating a controller
pub struct FormOptions<R> {
    pub(crate) validate: Option<ValidationFn<R>>,
    pub(crate) config: FormConfig,
}

impl<R> FormOptions<R> {
    pub fn new() -> Self {
        Self {
            validate: None,
            config: FormConfig::default(),
        }
    }

    /// Run `validate` on the initial record and after every change
    pub fn validate(mut self, validate: impl Fn(&R) -> ErrorMap + 'static) -> Self {
        self.validate = Some(Box::new(validate));
        self
    }

    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }
}

impl<R> Default for FormOptions<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for FormOptions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormOptions")
            .field("validate", &self.validate.is_some())
            .field("config", &self.config)
            .finish()
    }
}

/// Extra binding properties shaped for components that take `error`/`helperText`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MuiHelper {
    Error,
    HelperText,
}

impl MuiHelper {
    pub const ALL: [MuiHelper; 2] = [MuiHelper::Error, MuiHelper::HelperText];
}

/// Per-field check run on the candidate value of every change
pub struct FieldValidation<V> {
    validator: Box<dyn Fn(&V) -> bool>,
    message: Option<String>,
}

impl<V> FieldValidation<V> {
    /// `validator` returns `false` when the value is invalid
    pub fn new(validator: impl Fn(&V) -> bool + 'static) -> Self {
        Self {
            validator: Box::new(validator),
            message: None,
        }
    }

    /// Message stored when the validator fails
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub(crate) fn check(&self, value: &V) -> bool {
        (self.validator)(value)
    }

    pub(crate) fn failure_message(&self, field: &str, config: &FormConfig) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| config.invalid_message(field))
    }
}

impl<V> fmt::Debug for FieldValidation<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidation")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Options for a single field binding
pub struct FieldOptions<V> {
    pub(crate) validate: Option<FieldValidation<V>>,
    pub(crate) mui_helpers: Vec<MuiHelper>,
}

impl<V> FieldOptions<V> {
    pub fn new() -> Self {
        Self {
            validate: None,
            mui_helpers: Vec::new(),
        }
    }

    pub fn validate(mut self, validation: FieldValidation<V>) -> Self {
        self.validate = Some(validation);
        self
    }

    /// Include the requested helper properties in the binding
    pub fn mui_helpers(mut self, helpers: impl IntoIterator<Item = MuiHelper>) -> Self {
        self.mui_helpers = helpers.into_iter().collect();
        self
    }

    pub(crate) fn wants(&self, helper: MuiHelper) -> bool {
        self.mui_helpers.contains(&helper)
    }
}

impl<V> Default for FieldOptions<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for FieldOptions<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldOptions")
            .field("validate", &self.validate)
            .field("mui_helpers", &self.mui_helpers)
            .finish()
    }
}
