//! Form controller: single owner of a form's values and errors

use super::binding::{FieldBinding, OnChange};
use super::errors::ErrorMap;
use super::event::ChangeEvent;
use super::observer::{FormChange, FormObserver, SubscriptionId};
use super::options::{FieldOptions, FormOptions, JsonMap, MuiHelper, ValidationFn};
use super::record::{FieldKey, FormRecord};
use crate::config::FormConfig;
use crate::error::FormError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

const NON_EVENT_INPUT: &str =
    "non-event field handlers require a mapping from onChange value to form value";

/// Current record and errors, always replaced together
struct FormState<R> {
    data: Rc<R>,
    errors: ErrorMap,
}

struct Inner<R> {
    state: RefCell<FormState<R>>,
    validate: Option<ValidationFn<R>>,
    config: FormConfig,
    observers: RefCell<Vec<(SubscriptionId, Rc<dyn FormObserver>)>>,
    next_subscription: Cell<u64>,
}

/// Owns a form's field values and validation errors
///
/// Clones are handles onto the same form. Every value change goes through one
/// path: the record is replaced by an updated copy, the whole-form validator
/// (if any) recomputes the error map, and observers are notified once.
pub struct FormController<R: FormRecord> {
    inner: Rc<Inner<R>>,
}

impl<R: FormRecord> Clone for FormController<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: FormRecord + fmt::Debug> fmt::Debug for FormController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("FormController")
            .field("data", &state.data)
            .field("errors", &state.errors)
            .finish_non_exhaustive()
    }
}

fn run_validation<R: FormRecord>(validate: &ValidationFn<R>, record: &R) -> ErrorMap {
    let mut errors = validate(record);
    for field in errors.retain_fields(R::FIELDS) {
        tracing::warn!(field, "validator reported an error for an unknown field, dropping it");
    }
    errors
}

impl<R: FormRecord> FormController<R> {
    /// Create a controller without a whole-form validator
    pub fn new(initial: R) -> Self {
        Self::with_options(initial, FormOptions::new())
    }

    /// Create a controller, running the validator (if any) on `initial`
    pub fn with_options(initial: R, options: FormOptions<R>) -> Self {
        let FormOptions { validate, config } = options;
        let errors = validate
            .as_ref()
            .map(|validate| run_validation(validate, &initial))
            .unwrap_or_default();

        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(FormState {
                    data: Rc::new(initial),
                    errors,
                }),
                validate,
                config,
                observers: RefCell::new(Vec::new()),
                next_subscription: Cell::new(0),
            }),
        }
    }

    /// Current record
    pub fn form_data(&self) -> Rc<R> {
        Rc::clone(&self.inner.state.borrow().data)
    }

    /// Current value of one field
    pub fn value<V: Clone>(&self, key: FieldKey<R, V>) -> V {
        key.get(&self.inner.state.borrow().data).clone()
    }

    /// Current error map
    pub fn errors(&self) -> ErrorMap {
        self.inner.state.borrow().errors.clone()
    }

    /// Current message for one field
    pub fn error(&self, field: &str) -> Option<String> {
        self.inner
            .state
            .borrow()
            .errors
            .message(field)
            .map(str::to_string)
    }

    /// True iff no field carries an error message
    pub fn is_valid(&self) -> bool {
        self.inner.state.borrow().errors.is_valid()
    }

    /// Settings this controller was created with
    pub fn config(&self) -> &FormConfig {
        &self.inner.config
    }

    /// Replace one field's value and re-run whole-form validation
    pub fn set_value<V>(&self, key: FieldKey<R, V>, value: V) {
        self.replace(key.name(), |record| *key.get_mut(record) = value);
        self.notify(key.name());
    }

    /// Bind a text field: `on_change` takes the event's text as the new value
    pub fn field<V>(&self, key: FieldKey<R, V>, opts: FieldOptions<V>) -> FieldBinding<V, ChangeEvent>
    where
        V: From<String> + Clone + 'static,
    {
        self.field_mapped(key, |event: ChangeEvent| V::from(event.into_value()), opts)
    }

    /// Bind a field whose widget reports changes as `I`, converted by `map`
    pub fn field_mapped<V, I>(
        &self,
        key: FieldKey<R, V>,
        map: impl Fn(I) -> V + 'static,
        opts: FieldOptions<V>,
    ) -> FieldBinding<V, I>
    where
        V: Clone + 'static,
        I: 'static,
    {
        let name = key.name();
        let value = self.value(key);
        let (error, helper_text) = self.helpers(name, &opts);
        tracing::trace!(field = name, "binding field");

        let form = self.clone();
        let validation = opts.validate;
        let on_change = OnChange::new(move |input: I| {
            let value = map(input);
            let failure = validation
                .as_ref()
                .filter(|validation| !validation.check(&value))
                .map(|validation| validation.failure_message(name, &form.inner.config));
            form.replace(name, |record| *key.get_mut(record) = value);
            form.patch_error(name, failure);
            form.notify(name);
        });

        FieldBinding {
            name,
            value,
            on_change,
            error,
            helper_text,
        }
    }

    /// Register an observer for change notifications
    pub fn subscribe(&self, observer: impl FormObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.get());
        self.inner.next_subscription.set(id.0 + 1);
        let observer: Rc<dyn FormObserver> = Rc::new(observer);
        self.inner.observers.borrow_mut().push((id, observer));
        id
    }

    /// Remove an observer, returning whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.inner.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    fn helpers<V>(&self, field: &str, opts: &FieldOptions<V>) -> (Option<bool>, Option<String>) {
        let state = self.inner.state.borrow();
        let error = opts
            .wants(MuiHelper::Error)
            .then(|| state.errors.has_error(field));
        let helper_text = opts
            .wants(MuiHelper::HelperText)
            .then(|| state.errors.message(field).map(str::to_string))
            .flatten();
        (error, helper_text)
    }

    /// The single mutation path: copy, update, validate, swap
    ///
    /// No borrow is held while `update` or the validator runs.
    fn replace(&self, field: &'static str, update: impl FnOnce(&mut R)) {
        let mut next = R::clone(&self.inner.state.borrow().data);
        update(&mut next);
        let errors = self
            .inner
            .validate
            .as_ref()
            .map(|validate| run_validation(validate, &next));

        let mut state = self.inner.state.borrow_mut();
        state.data = Rc::new(next);
        if let Some(errors) = errors {
            state.errors = errors;
        }
        tracing::debug!(field, valid = state.errors.is_valid(), "form value replaced");
    }

    /// Overwrite one field's error entry after the whole-form validation
    fn patch_error(&self, field: &'static str, message: Option<String>) {
        self.inner
            .state
            .borrow_mut()
            .errors
            .insert(field, message);
    }

    fn notify(&self, field: &'static str) {
        if !self.inner.config.notify_observers {
            return;
        }
        let change = FormChange {
            field,
            is_valid: self.is_valid(),
        };
        let observers: Vec<Rc<dyn FormObserver>> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        tracing::trace!(field, observers = observers.len(), "notifying observers");
        for observer in observers {
            observer.form_changed(&change);
        }
    }
}

/// Untyped access for hosts that exchange form values as JSON
impl<R> FormController<R>
where
    R: FormRecord + Serialize + DeserializeOwned,
{
    /// Current record as a JSON object
    pub fn form_data_json(&self) -> Result<Value, FormError> {
        Ok(serde_json::to_value(&*self.form_data())?)
    }

    /// Replace a field by name; the record is unchanged on error
    pub fn set_json(&self, name: &str, value: Value) -> Result<(), FormError> {
        let field = R::field_name(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.replace_json(field, value)?;
        self.notify(field);
        Ok(())
    }

    /// Bind a field by name for widgets that report untyped input
    ///
    /// Without `map`, `on_change` accepts only `{"currentTarget": {"value": <string>}}`.
    ///
    /// # Panics
    ///
    /// The unmapped `on_change` panics on any other input, before touching the
    /// record: such a binding is misconfigured, not fed bad data.
    pub fn field_json(
        &self,
        name: &str,
        map: Option<JsonMap>,
        opts: FieldOptions<Value>,
    ) -> Result<FieldBinding<Value, Value, Result<(), FormError>>, FormError> {
        let field = R::field_name(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        let value = self
            .form_data_json()?
            .get(field)
            .cloned()
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        let (error, helper_text) = self.helpers(field, &opts);
        tracing::trace!(field, mapped = map.is_some(), "binding json field");

        let form = self.clone();
        let validation = opts.validate;
        let on_change = OnChange::new(move |input: Value| -> Result<(), FormError> {
            let value = match &map {
                Some(map) => map(input),
                None => match ChangeEvent::from_json(&input) {
                    Some(event) => Value::String(event.into_value()),
                    None => panic!("{NON_EVENT_INPUT}"),
                },
            };
            let failure = validation
                .as_ref()
                .filter(|validation| !validation.check(&value))
                .map(|validation| validation.failure_message(field, &form.inner.config));
            form.replace_json(field, value)?;
            form.patch_error(field, failure);
            form.notify(field);
            Ok(())
        });

        Ok(FieldBinding {
            name: field,
            value,
            on_change,
            error,
            helper_text,
        })
    }

    fn replace_json(&self, field: &'static str, value: Value) -> Result<(), FormError> {
        let mut json = self.form_data_json()?;
        let object = json.as_object_mut().ok_or(FormError::NotAnObject)?;
        match object.get_mut(field) {
            Some(slot) => *slot = value,
            None => return Err(FormError::UnknownField(field.to_string())),
        }
        let next: R =
            serde_json::from_value(json).map_err(|source| FormError::InvalidValue { field, source })?;
        self.replace(field, |record| *record = next);
        Ok(())
    }
}
