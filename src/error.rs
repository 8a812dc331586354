//! Errors raised at the untyped (JSON) boundary of a form

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    /// The name is not one of the record's fields
    #[error("unknown form field `{0}`")]
    UnknownField(String),

    /// The value does not fit the field's type
    #[error("invalid value for field `{field}`: {source}")]
    InvalidValue {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The record did not serialize to a JSON object
    #[error("form record does not serialize to a JSON object")]
    NotAnObject,

    #[error("failed to serialize form record: {0}")]
    Serialization(#[from] serde_json::Error),
}
