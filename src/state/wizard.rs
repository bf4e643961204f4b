//! The form wizard: answers, page cursor, and the advance/submit guards.
//!
//! `FormSession` is pure state. It never performs I/O; a submit that passes
//! validation hands back a [`FormSubmission`] for the caller to post.

use chrono::{DateTime, Utc};

use crate::error::ValidationFailure;
use crate::models::{
    AnswerState, AnswerValue, ClosedReason, Field, FormDefinition, FormSubmission, Section,
};

/// Banner shown when the backend rejects a submission. Server detail is
/// never surfaced.
pub const SUBMIT_REJECTED_MESSAGE: &str = "Transmission REJECTED. Security protocol interference.";

/// Which of the mutually exclusive views applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Active,
    Submitted,
    Closed(ClosedReason),
}

/// Outcome of a submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitIntent {
    /// Not on the last page: treated as an advance, which succeeded.
    Advanced,
    /// A required field is unmet; nothing is sent.
    Blocked(ValidationFailure),
    /// Full validation passed; post this payload.
    Ready(FormSubmission),
    /// The form is closed or already submitted.
    Unavailable,
}

/// First required field in `fields` whose answer is missing.
pub fn first_unmet<'a, I>(fields: I, answers: &AnswerState) -> Option<&'a Field>
where
    I: IntoIterator<Item = &'a Field>,
{
    fields
        .into_iter()
        .find(|field| field.required && answers.is_missing(&field.label))
}

#[derive(Debug, Clone)]
pub struct FormSession {
    /// Identifier the form was requested by; echoed back on submit.
    form_id: String,
    definition: FormDefinition,
    pages: Vec<Section>,
    answers: AnswerState,
    cursor: usize,
    error: Option<String>,
    submitted: bool,
}

impl FormSession {
    pub fn new(form_id: impl Into<String>, definition: FormDefinition) -> Self {
        let pages = definition.pages().into_owned();
        let answers = AnswerState::initial_for(&definition.fields);
        Self {
            form_id: form_id.into(),
            definition,
            pages,
            answers,
            cursor: 0,
            error: None,
            submitted: false,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn pages(&self) -> &[Section] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_first_page(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.cursor + 1 >= self.pages.len()
    }

    /// Fraction of pages reached, counting the current one.
    pub fn progress(&self) -> f64 {
        (self.cursor + 1) as f64 / self.pages.len() as f64
    }

    pub fn current_section(&self) -> &Section {
        &self.pages[self.cursor]
    }

    pub fn current_fields(&self) -> Vec<&Field> {
        let section_id = self.current_section().id.as_deref();
        self.definition.fields_in(section_id).collect()
    }

    pub fn answers(&self) -> &AnswerState {
        &self.answers
    }

    pub fn answer(&self, label: &str) -> Option<&AnswerValue> {
        self.answers.get(label)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The single mutation point for answers.
    pub fn set_answer(&mut self, label: &str, value: AnswerValue) {
        self.answers = self.answers.with_answer(label, value);
    }

    /// Check or uncheck one option of a multi-choice field.
    pub fn set_choice(&mut self, label: &str, option: &str, checked: bool) {
        let current = self
            .answers
            .get(label)
            .cloned()
            .unwrap_or(AnswerValue::Choices(Vec::new()));
        self.set_answer(label, current.with_choice(option, checked));
    }

    pub fn view(&self, now: DateTime<Utc>) -> ViewPhase {
        if self.submitted {
            ViewPhase::Submitted
        } else if let Some(reason) = self.definition.closed_reason(now) {
            ViewPhase::Closed(reason)
        } else {
            ViewPhase::Active
        }
    }

    /// Validate the current page and move forward one page.
    ///
    /// On failure the cursor stays put and the banner names the first unmet
    /// field. The cursor never moves past the last page.
    pub fn advance(&mut self) -> Result<(), ValidationFailure> {
        if let Some(field) = first_unmet(self.current_fields(), &self.answers) {
            let failure = ValidationFailure::page(field.label.clone());
            tracing::debug!("Advance blocked on page {}: {}", self.cursor, failure);
            self.error = Some(failure.to_string());
            return Err(failure);
        }

        self.error = None;
        if !self.is_last_page() {
            self.cursor += 1;
            tracing::debug!("Advanced to page {}", self.cursor);
        }
        Ok(())
    }

    /// Move back one page. Returns `false` on the first page.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        tracing::debug!("Moved back to page {}", self.cursor);
        true
    }

    /// Handle a submit action at `now`.
    ///
    /// Before the last page this is an advance and never yields a payload.
    /// On the last page every required field in the form is checked.
    pub fn submit(&mut self, now: DateTime<Utc>) -> SubmitIntent {
        self.error = None;

        if self.view(now) != ViewPhase::Active {
            return SubmitIntent::Unavailable;
        }

        if !self.is_last_page() {
            return match self.advance() {
                Ok(()) => SubmitIntent::Advanced,
                Err(failure) => SubmitIntent::Blocked(failure),
            };
        }

        if let Some(field) = first_unmet(&self.definition.fields, &self.answers) {
            let failure = ValidationFailure::form(field.label.clone());
            self.error = Some(failure.to_string());
            return SubmitIntent::Blocked(failure);
        }

        SubmitIntent::Ready(FormSubmission {
            form: self.form_id.clone(),
            data: self.answers.clone(),
        })
    }

    pub fn mark_submitted(&mut self) {
        self.submitted = true;
        self.error = None;
    }

    /// Record a rejected submission. Answers are kept for a retry.
    pub fn mark_submit_failed(&mut self) {
        self.error = Some(SUBMIT_REJECTED_MESSAGE.to_string());
    }
}
