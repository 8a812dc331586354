//! Form domain layer
//!
//! A [`FormController`] owns one record of named fields plus the error map
//! derived from it, and hands out [`FieldBinding`]s that input widgets call
//! back into.

mod binding;
mod controller;
mod errors;
mod event;
mod observer;
mod options;
mod record;

pub use binding::{FieldBinding, OnChange};
pub use controller::FormController;
pub use errors::ErrorMap;
pub use event::{ChangeEvent, EventTarget};
pub use observer::{FormChange, FormObserver, SubscriptionId};
pub use options::{FieldOptions, FieldValidation, FormOptions, JsonMap, MuiHelper, ValidationFn};
pub use record::{FieldKey, FormRecord};
