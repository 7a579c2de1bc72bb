use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::forms::form_state::{FormAction, FormError, FormSpec, FormState};
use crate::forms::submit::{ConsoleSink, SubmitSink};

#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Editing,
    /// Acknowledged; the fields have been reset.
    Sent,
    Rejected(FormError),
}

#[derive(Clone, PartialEq)]
pub struct UseFormHandle {
    pub state: UseReducerHandle<FormState>,
    pub status: UseStateHandle<FormStatus>,
}

fn field_value<E: TargetCast>(e: &E) -> Option<String> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
        return Some(select.value());
    }
    e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value())
}

impl UseFormHandle {
    pub fn value(&self, field: &str) -> String {
        self.state.value(field).to_string()
    }

    pub fn on_input(&self, field: &'static str) -> Callback<InputEvent> {
        let state = self.state.dispatcher();
        let status = self.status.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = field_value(&e) {
                state.dispatch(FormAction::Input { field, value });
            }
            if *status != FormStatus::Editing {
                status.set(FormStatus::Editing);
            }
        })
    }

    pub fn on_submit(&self) -> Callback<SubmitEvent> {
        self.on_submit_with(ConsoleSink)
    }

    pub fn on_submit_with<S: SubmitSink + 'static>(&self, sink: S) -> Callback<SubmitEvent> {
        let state = self.state.clone();
        let status = self.status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match state.submit(&sink) {
                Ok(_) => {
                    status.set(FormStatus::Sent);
                    state.dispatch(FormAction::Reset);
                }
                Err(err) => status.set(FormStatus::Rejected(err)),
            }
        })
    }
}

#[hook]
pub fn use_form(spec: &'static FormSpec) -> UseFormHandle {
    let state = use_reducer(move || FormState::new(spec));
    let status = use_state(|| FormStatus::Editing);
    UseFormHandle { state, status }
}
