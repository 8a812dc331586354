//! formbind - typed form state for interactive clients
//!
//! Tracks a form's current field values, synthesizes per-field change
//! handlers, runs validation and aggregates error state. Rendering,
//! persistence and submission are left to the host.
//!
//! ```
//! use formbind::{form_fields, ChangeEvent, ErrorMap, FieldOptions, FormController, FormOptions};
//!
//! #[derive(Debug, Clone)]
//! struct Signup {
//!     email: String,
//! }
//!
//! form_fields! {
//!     Signup {
//!         EMAIL: email => String,
//!     }
//! }
//!
//! let form = FormController::with_options(
//!     Signup { email: String::new() },
//!     FormOptions::new().validate(|s: &Signup| {
//!         let mut errors = ErrorMap::new();
//!         if !s.email.contains('@') {
//!             errors.set("email", "enter an email address");
//!         }
//!         errors
//!     }),
//! );
//! assert!(!form.is_valid());
//!
//! form.set_value(Signup::EMAIL, "ada@example.com".to_string());
//! assert!(form.is_valid());
//!
//! let email = form.field(Signup::EMAIL, FieldOptions::new());
//! email.change(ChangeEvent::new("grace@example.com"));
//! assert_eq!(form.form_data().email, "grace@example.com");
//! ```

pub mod config;
pub mod error;
pub mod form;

pub use config::FormConfig;
pub use error::FormError;
pub use form::*;
