use log::{error, info};

use crate::forms::form_state::Submission;

/// Receives completed forms. Nothing in this site leaves the browser.
pub trait SubmitSink {
    fn submit(&self, submission: &Submission);
}

/// Writes the submission to the browser console.
pub struct ConsoleSink;

impl SubmitSink for ConsoleSink {
    fn submit(&self, submission: &Submission) {
        match serde_json::to_string(&submission.fields) {
            Ok(payload) => {
                gloo_console::log!("Form submitted:", submission.form, payload);
            }
            Err(e) => {
                error!("Failed to serialize {} submission: {}", submission.form, e);
            }
        }
        info!("{} form submitted ({} fields)", submission.form, submission.fields.len());
    }
}
