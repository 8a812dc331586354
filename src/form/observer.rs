//! Change subscriptions

/// Delivered to observers once per completed mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormChange {
    /// Field whose value was replaced
    pub field: &'static str,
    /// Validity after the change
    pub is_valid: bool,
}

/// Receives a notification after every value change
#[cfg_attr(test, mockall::automock)]
pub trait FormObserver {
    fn form_changed(&self, change: &FormChange);
}

impl<F> FormObserver for F
where
    F: Fn(&FormChange),
{
    fn form_changed(&self, change: &FormChange) {
        self(change)
    }
}

/// Handle returned by `FormController::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
