//! Field bindings handed to input widgets

use std::fmt;
use std::rc::Rc;

/// Change handler for one bound field
///
/// Cloning shares the handler; every clone writes to the same form.
pub struct OnChange<I, O = ()> {
    handler: Rc<dyn Fn(I) -> O>,
}

impl<I, O> OnChange<I, O> {
    pub(crate) fn new(handler: impl Fn(I) -> O + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
        }
    }

    pub fn call(&self, input: I) -> O {
        (self.handler)(input)
    }
}

impl<I, O> Clone for OnChange<I, O> {
    fn clone(&self) -> Self {
        Self {
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<I, O> fmt::Debug for OnChange<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnChange(..)")
    }
}

/// Snapshot of one field plus the handler that updates it
///
/// Built fresh by each `field*` call; `value`, `error` and `helper_text` do
/// not follow later changes.
#[derive(Debug, Clone)]
pub struct FieldBinding<V, I, O = ()> {
    pub name: &'static str,
    pub value: V,
    pub on_change: OnChange<I, O>,
    /// Whether the field has an error, when requested through `MuiHelper::Error`
    pub error: Option<bool>,
    /// Current error message, when requested through `MuiHelper::HelperText`
    pub helper_text: Option<String>,
}

impl<V, I, O> FieldBinding<V, I, O> {
    /// Forward an input to the bound handler
    pub fn change(&self, input: I) -> O {
        self.on_change.call(input)
    }
}
