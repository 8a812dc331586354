//! Form records and typed field keys

use std::fmt;

/// A flat record of named fields that a [`FormController`](super::FormController) can own.
///
/// Usually implemented through [`form_fields!`](crate::form_fields) rather than by hand.
pub trait FormRecord: Clone + 'static {
    /// Names of every field, in declaration order
    const FIELDS: &'static [&'static str];

    /// Resolve a runtime field name to its static name
    fn field_name(name: &str) -> Option<&'static str> {
        Self::FIELDS.iter().copied().find(|field| *field == name)
    }
}

/// Typed handle on one field of a record
///
/// Holding a `FieldKey<R, V>` proves at compile time that `R` has a field of
/// type `V` under that name.
pub struct FieldKey<R, V> {
    name: &'static str,
    get: fn(&R) -> &V,
    get_mut: fn(&mut R) -> &mut V,
}

impl<R, V> FieldKey<R, V> {
    pub const fn new(
        name: &'static str,
        get: fn(&R) -> &V,
        get_mut: fn(&mut R) -> &mut V,
    ) -> Self {
        Self { name, get, get_mut }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get<'a>(&self, record: &'a R) -> &'a V {
        (self.get)(record)
    }

    pub fn get_mut<'a>(&self, record: &'a mut R) -> &'a mut V {
        (self.get_mut)(record)
    }
}

impl<R, V> Clone for FieldKey<R, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, V> Copy for FieldKey<R, V> {}

impl<R, V> fmt::Debug for FieldKey<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldKey").field(&self.name).finish()
    }
}

/// Declare the [`FormRecord`] impl and one [`FieldKey`] constant per field
///
/// ```
/// use formbind::{form_fields, FormRecord};
///
/// #[derive(Debug, Clone)]
/// struct Login {
///     user: String,
///     remember: bool,
/// }
///
/// form_fields! {
///     Login {
///         USER: user => String,
///         REMEMBER: remember => bool,
///     }
/// }
///
/// assert_eq!(Login::FIELDS, &["user", "remember"]);
/// assert_eq!(Login::USER.name(), "user");
/// ```
#[macro_export]
macro_rules! form_fields {
    ($record:ty { $($key:ident : $field:ident => $value:ty),+ $(,)? }) => {
        impl $crate::FormRecord for $record {
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),+];
        }

        #[allow(dead_code)]
        impl $record {
            $(
                pub const $key: $crate::FieldKey<$record, $value> = $crate::FieldKey::new(
                    stringify!($field),
                    |record: &$record| &record.$field,
                    |record: &mut $record| &mut record.$field,
                );
            )+
        }
    };
}
