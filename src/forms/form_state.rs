use std::collections::BTreeMap;
use std::rc::Rc;

use log::warn;
use serde::Serialize;
use thiserror::Error;
use yew::prelude::*;

use crate::forms::submit::SubmitSink;

/// Which fields a form has. Every field is required.
#[derive(Debug, PartialEq, Eq)]
pub struct FormSpec {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

pub const CONTACT_FORM: FormSpec = FormSpec {
    name: "contact",
    fields: &["name", "email", "service", "message"],
};

pub const NEWSLETTER_FORM: FormSpec = FormSpec {
    name: "newsletter",
    fields: &["email"],
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

/// A completed field set, as handed to the submit collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub form: &'static str,
    pub fields: BTreeMap<&'static str, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    spec: &'static FormSpec,
    values: BTreeMap<&'static str, String>,
}

pub enum FormAction {
    Input { field: &'static str, value: String },
    Reset,
}

impl FormState {
    pub fn new(spec: &'static FormSpec) -> Self {
        Self {
            spec,
            values: spec.fields.iter().map(|f| (*f, String::new())).collect(),
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, field: &str, value: String) -> Result<(), FormError> {
        match self.values.get_mut(field) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(FormError::UnknownField(field.to_string())),
        }
    }

    pub fn reset(&mut self) {
        self.values.values_mut().for_each(String::clear);
    }

    /// The field set, provided no required field is blank. Reports fields in declaration order.
    pub fn submission(&self) -> Result<Submission, FormError> {
        if let Some(missing) = self
            .spec
            .fields
            .iter()
            .find(|f| self.value(f).trim().is_empty())
        {
            return Err(FormError::MissingField(*missing));
        }
        Ok(Submission {
            form: self.spec.name,
            fields: self.values.clone(),
        })
    }

    /// Hands the field set to `sink` once. Does not clear anything.
    pub fn submit<S: SubmitSink + ?Sized>(&self, sink: &S) -> Result<Submission, FormError> {
        let submission = self.submission()?;
        sink.submit(&submission);
        Ok(submission)
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Input { field, value } => {
                if let Err(e) = next.set(field, value) {
                    warn!("{} form: {}", self.spec.name, e);
                    return self;
                }
            }
            FormAction::Reset => next.reset(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink(RefCell<Vec<Submission>>);

    impl SubmitSink for RecordingSink {
        fn submit(&self, submission: &Submission) {
            self.0.borrow_mut().push(submission.clone());
        }
    }

    fn filled_contact() -> FormState {
        let mut form = FormState::new(&CONTACT_FORM);
        form.set("name", "Ada Lovelace".into()).unwrap();
        form.set("email", "ada@example.com".into()).unwrap();
        form.set("service", "ai-agents".into()).unwrap();
        form.set("message", "We need a chatbot.".into()).unwrap();
        form
    }

    #[test]
    fn test_new_form_is_blank() {
        let form = FormState::new(&CONTACT_FORM);
        for field in CONTACT_FORM.fields {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn test_complete_contact_submits_once_with_all_values() {
        let sink = RecordingSink::default();
        let form = filled_contact();

        let submission = form.submit(&sink).unwrap();

        let sent = sink.0.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], submission);
        assert_eq!(sent[0].form, "contact");
        assert_eq!(sent[0].fields.len(), 4);
        assert_eq!(sent[0].fields["name"], "Ada Lovelace");
        assert_eq!(sent[0].fields["email"], "ada@example.com");
        assert_eq!(sent[0].fields["service"], "ai-agents");
        assert_eq!(sent[0].fields["message"], "We need a chatbot.");
        // submitting leaves the fields alone
        assert_eq!(form.value("name"), "Ada Lovelace");
    }

    #[test]
    fn test_blank_required_field_never_reaches_sink() {
        let sink = RecordingSink::default();
        let mut form = filled_contact();
        form.set("service", "   ".into()).unwrap();

        assert_eq!(form.submit(&sink), Err(FormError::MissingField("service")));
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn test_missing_field_reported_in_declaration_order() {
        let mut form = FormState::new(&CONTACT_FORM);
        form.set("message", "hi".into()).unwrap();
        assert_eq!(form.submission(), Err(FormError::MissingField("name")));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut form = FormState::new(&NEWSLETTER_FORM);
        assert_eq!(
            form.set("phone", "123".into()),
            Err(FormError::UnknownField("phone".into()))
        );
    }

    #[test]
    fn test_reset_clears_values() {
        let form = Rc::new(filled_contact());
        let reset = form.reduce(FormAction::Reset);
        assert_eq!(*reset, FormState::new(&CONTACT_FORM));
    }

    #[test]
    fn test_reduce_input_and_unknown_field() {
        let form = Rc::new(FormState::new(&NEWSLETTER_FORM));
        let typed = form.clone().reduce(FormAction::Input {
            field: "email",
            value: "news@example.com".into(),
        });
        assert_eq!(typed.value("email"), "news@example.com");

        let unchanged = typed.clone().reduce(FormAction::Input {
            field: "name",
            value: "x".into(),
        });
        assert!(Rc::ptr_eq(&typed, &unchanged));
    }

    #[test]
    fn test_submission_serializes_fields() {
        let mut form = FormState::new(&NEWSLETTER_FORM);
        form.set("email", "news@example.com".into()).unwrap();
        let json = serde_json::to_string(&form.submission().unwrap()).unwrap();
        assert_eq!(json, r#"{"form":"newsletter","fields":{"email":"news@example.com"}}"#);
    }
}
