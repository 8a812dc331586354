//! Demo application state: a sign-up form driven by a FormController

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use formbind::{
    form_fields, ChangeEvent, ErrorMap, FieldBinding, FieldOptions, FieldValidation, FormChange,
    FormConfig, FormController, FormOptions, MuiHelper,
};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

const MIN_AGE: u32 = 13;

/// Record edited by the demo form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
}

form_fields! {
    Signup {
        NAME: name => String,
        EMAIL: email => String,
        AGE: age => Option<u32>,
    }
}

fn age_message() -> String {
    format!("Enter an age of {MIN_AGE} or more")
}

/// Whole-form rules, re-run after every change
///
/// Each binding repeats its own rule as a per-field check, because a change
/// handler overwrites its field's entry after this runs.
fn validate_signup(signup: &Signup) -> ErrorMap {
    let mut errors = ErrorMap::new();
    if signup.name.trim().is_empty() {
        errors.set("name", "Name is required");
    }
    if !signup.email.is_empty() && !signup.email.contains('@') {
        errors.set("email", "Email must contain '@'");
    }
    if !signup.age.is_some_and(|age| age >= MIN_AGE) {
        errors.set("age", age_message());
    }
    errors
}

/// Inputs in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Name,
    Email,
    Age,
}

impl SignupField {
    pub const ALL: [SignupField; 3] = [SignupField::Name, SignupField::Email, SignupField::Age];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Age => "Age",
        }
    }
}

/// What the renderer needs for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub text: String,
    pub error: bool,
    pub helper_text: Option<String>,
}

fn view<V, I>(label: &'static str, text: &str, binding: &FieldBinding<V, I>) -> FieldView {
    FieldView {
        label,
        text: text.to_string(),
        error: binding.error.unwrap_or(false),
        helper_text: binding.helper_text.clone(),
    }
}

/// Main application state
pub struct App {
    pub form: FormController<Signup>,
    /// Raw text typed into each input, in `SignupField::ALL` order
    pub inputs: [String; 3],
    pub active_field_index: usize,
    pub status_message: Option<String>,
    /// Notifications received from the form
    pub change_count: Rc<Cell<usize>>,
    should_quit: bool,
}

impl App {
    pub fn new(config: FormConfig) -> Self {
        let form = FormController::with_options(
            Signup::default(),
            FormOptions::new().validate(validate_signup).config(config),
        );

        let change_count = Rc::new(Cell::new(0));
        {
            let change_count = Rc::clone(&change_count);
            form.subscribe(move |change: &FormChange| {
                change_count.set(change_count.get() + 1);
                tracing::debug!(field = change.field, valid = change.is_valid, "form changed");
            });
        }

        Self {
            form,
            inputs: Default::default(),
            active_field_index: 0,
            status_message: None,
            change_count,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn active_field(&self) -> SignupField {
        SignupField::ALL[self.active_field_index]
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % SignupField::ALL.len();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = SignupField::ALL.len() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    fn name_binding(&self) -> FieldBinding<String, ChangeEvent> {
        self.form.field(
            Signup::NAME,
            FieldOptions::new()
                .validate(
                    FieldValidation::new(|name: &String| !name.trim().is_empty())
                        .message("Name is required"),
                )
                .mui_helpers(MuiHelper::ALL),
        )
    }

    fn email_binding(&self) -> FieldBinding<String, ChangeEvent> {
        self.form.field(
            Signup::EMAIL,
            FieldOptions::new()
                .validate(
                    FieldValidation::new(|email: &String| email.is_empty() || email.contains('@'))
                        .message("Email must contain '@'"),
                )
                .mui_helpers(MuiHelper::ALL),
        )
    }

    fn age_binding(&self) -> FieldBinding<Option<u32>, ChangeEvent> {
        self.form.field_mapped(
            Signup::AGE,
            |event: ChangeEvent| event.value().trim().parse::<u32>().ok(),
            FieldOptions::new()
                .validate(
                    FieldValidation::new(|age: &Option<u32>| age.is_some_and(|age| age >= MIN_AGE))
                        .message(age_message()),
                )
                .mui_helpers(MuiHelper::ALL),
        )
    }

    /// Feed an input's text through its binding
    fn emit_change(&self, index: usize) {
        let event = ChangeEvent::new(self.inputs[index].clone());
        match SignupField::ALL[index] {
            SignupField::Name => self.name_binding().change(event),
            SignupField::Email => self.email_binding().change(event),
            SignupField::Age => self.age_binding().change(event),
        }
    }

    /// Renderable state of every input
    pub fn field_views(&self) -> Vec<FieldView> {
        vec![
            view(SignupField::Name.label(), &self.inputs[0], &self.name_binding()),
            view(SignupField::Email.label(), &self.inputs[1], &self.email_binding()),
            view(SignupField::Age.label(), &self.inputs[2], &self.age_binding()),
        ]
    }

    pub fn push_char(&mut self, c: char) {
        self.inputs[self.active_field_index].push(c);
        self.emit_change(self.active_field_index);
    }

    pub fn pop_char(&mut self) {
        self.inputs[self.active_field_index].pop();
        self.emit_change(self.active_field_index);
    }

    /// Report whether the form could be submitted
    pub fn submit(&mut self) {
        let errors = self.form.errors();
        self.status_message = if errors.is_valid() {
            match self.form.form_data_json() {
                Ok(json) => Some(format!("Ready to submit: {json}")),
                Err(err) => Some(format!("Error: {err}")),
            }
        } else {
            let count = errors.invalid_fields().count();
            Some(format!("Fix {count} field(s) before submitting"))
        };
        tracing::info!(valid = errors.is_valid(), "submit requested");
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Char(c) => self.push_char(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(FormConfig::default())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_initial_name_error() {
        let app = app();
        assert!(!app.form.is_valid());
        let views = app.field_views();
        assert!(views[0].error);
        assert_eq!(views[0].helper_text.as_deref(), Some("Name is required"));
        assert!(!views[1].error);
    }

    #[test]
    fn test_typing_updates_form() {
        let mut app = app();
        type_text(&mut app, "Ada");
        assert_eq!(app.form.form_data().name, "Ada");
        assert_eq!(app.inputs[0], "Ada");
        assert_eq!(app.change_count.get(), 3);
    }

    #[test]
    fn test_backspace_updates_form() {
        let mut app = app();
        type_text(&mut app, "Ada");
        app.handle_key(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(app.form.form_data().name, "Ad");
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut app = app();
        app.handle_key(KeyEvent::from(KeyCode::BackTab));
        assert_eq!(app.active_field(), SignupField::Age);
        app.handle_key(KeyEvent::from(KeyCode::Tab));
        assert_eq!(app.active_field(), SignupField::Name);
    }

    #[test]
    fn test_age_is_mapped_and_validated() {
        let mut app = app();
        app.active_field_index = 2;
        type_text(&mut app, "9");
        assert_eq!(app.form.form_data().age, Some(9));
        assert_eq!(
            app.field_views()[2].helper_text.as_deref(),
            Some("Enter an age of 13 or more")
        );

        type_text(&mut app, "9");
        assert_eq!(app.form.form_data().age, Some(99));
        assert!(!app.field_views()[2].error);
    }

    #[test]
    fn test_unparseable_age_is_none() {
        let mut app = app();
        app.active_field_index = 2;
        type_text(&mut app, "x");
        assert_eq!(app.form.form_data().age, None);
        assert!(app.field_views()[2].error);
    }

    #[test]
    fn test_submit_reports_invalid_fields() {
        let mut app = app();
        app.submit();
        assert_eq!(
            app.status_message.as_deref(),
            Some("Fix 2 field(s) before submitting")
        );
    }

    #[test]
    fn test_age_error_survives_edits_to_other_fields() {
        let mut app = app();
        app.active_field_index = 2;
        type_text(&mut app, "9");
        app.active_field_index = 0;
        type_text(&mut app, "Ada");

        assert_eq!(app.form.form_data().age, Some(9));
        assert!(app.field_views()[2].error);
        assert!(!app.form.is_valid());

        app.submit();
        assert_eq!(
            app.status_message.as_deref(),
            Some("Fix 1 field(s) before submitting")
        );
    }

    #[test]
    fn test_empty_age_blocks_submit() {
        let mut app = app();
        type_text(&mut app, "Ada");
        app.submit();
        assert_eq!(app.form.error("age").as_deref(), Some("Enter an age of 13 or more"));
        assert_eq!(
            app.status_message.as_deref(),
            Some("Fix 1 field(s) before submitting")
        );
    }

    #[test]
    fn test_submit_when_valid() {
        let mut app = app();
        type_text(&mut app, "Ada");
        app.active_field_index = 2;
        type_text(&mut app, "36");
        app.handle_key(KeyEvent::from(KeyCode::Enter));
        let status = app.status_message.clone().unwrap_or_default();
        assert!(status.starts_with("Ready to submit"));
        assert!(status.contains("\"age\":36"));
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(app.should_quit());
    }
}
