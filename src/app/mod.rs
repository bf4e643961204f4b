//! Application state and logic for the TUI.
//!
//! - [`App`] - owns the wizard session and drives network tasks
//! - [`Screen`] - loading, not-found, or the loaded wizard
//! - [`AppMessage`] - results posted back by spawned tasks

mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::Screen;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::FormsClient;
use crate::models::Field;
use crate::state::{FieldFocus, FormSession, SubmitIntent, ViewPhase};

/// Not-found detail when the backend has no form under the requested id.
pub const MISSING_FORM_DETAIL: &str = "The backend has no form with this id.";

/// Main application state
pub struct App {
    /// Form identifier from the command line
    pub form_id: String,
    /// Current screen being displayed
    pub screen: Screen,
    /// Loaded wizard; `None` until the fetch succeeds
    pub session: Option<FormSession>,
    /// Keyboard focus on the current page
    pub focus: FieldFocus,
    /// A submission is in flight
    pub submitting: bool,
    /// Why the last load failed, for the not-found view
    pub load_error: Option<String>,
    /// First visible row of the field list (maintained by the renderer)
    pub scroll: u16,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set on state mutations, cleared after each draw
    pub needs_redraw: bool,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    client: FormsClient,
    clock: fn() -> DateTime<Utc>,
    /// Id of the newest request; results carrying any other id are stale
    request_seq: u64,
    pending: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(form_id: impl Into<String>, client: FormsClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            form_id: form_id.into(),
            screen: Screen::default(),
            session: None,
            focus: FieldFocus::default(),
            submitting: false,
            load_error: None,
            scroll: 0,
            should_quit: false,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            client,
            clock: Utc::now,
            request_seq: 0,
            pending: None,
        }
    }

    /// Replace the wall clock used for deadline checks.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// The wizard's view phase, or `None` before a form is loaded.
    pub fn phase(&self) -> Option<ViewPhase> {
        self.session.as_ref().map(|session| session.view(self.now()))
    }

    /// Fields of the current page.
    pub fn current_fields(&self) -> Vec<&Field> {
        self.session
            .as_ref()
            .map(FormSession::current_fields)
            .unwrap_or_default()
    }

    /// The field under the keyboard focus.
    pub fn focused_field(&self) -> Option<Field> {
        self.current_fields().get(self.focus.field).map(|f| (*f).clone())
    }

    fn next_request_id(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Spawn the form fetch. Any earlier in-flight request is abandoned.
    pub fn start_loading(&mut self) {
        self.abort_pending();
        self.screen = Screen::Loading;
        self.session = None;
        self.load_error = None;
        self.mark_dirty();

        let request_id = self.next_request_id();
        let client = self.client.clone();
        let form_id = self.form_id.clone();
        let tx = self.message_tx.clone();
        tracing::info!("Loading form {} (request {})", form_id, request_id);

        self.pending = Some(tokio::spawn(async move {
            let message = match client.fetch_form(&form_id).await {
                Ok(definition) => AppMessage::FormLoaded {
                    request_id,
                    definition: Box::new(definition),
                },
                Err(e) if e.is_not_found() => AppMessage::FormLoadFailed {
                    request_id,
                    error: MISSING_FORM_DETAIL.to_string(),
                    code: e.error_code(),
                },
                Err(e) => AppMessage::FormLoadFailed {
                    request_id,
                    error: e.to_string(),
                    code: e.error_code(),
                },
            };
            let _ = tx.send(message);
        }));
    }

    /// Submit action: advance on earlier pages, post on the last.
    pub fn request_submit(&mut self) {
        if self.submitting {
            return;
        }
        let now = self.now();
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.submit(now) {
            SubmitIntent::Advanced => self.on_page_changed(),
            SubmitIntent::Blocked(failure) => {
                tracing::debug!("Submit blocked: {}", failure);
                self.scroll = 0;
            }
            SubmitIntent::Unavailable => {}
            SubmitIntent::Ready(submission) => {
                self.submitting = true;
                let request_id = self.next_request_id();
                let client = self.client.clone();
                let tx = self.message_tx.clone();
                tracing::info!(
                    "Submitting {} answers for form {} (request {})",
                    submission.data.len(),
                    submission.form,
                    request_id
                );

                self.abort_pending();
                self.pending = Some(tokio::spawn(async move {
                    let message = match client.submit_response(&submission).await {
                        Ok(()) => AppMessage::SubmitSucceeded { request_id },
                        Err(e) => AppMessage::SubmitFailed {
                            request_id,
                            error: e.to_string(),
                            code: e.error_code(),
                        },
                    };
                    let _ = tx.send(message);
                }));
            }
        }
        self.mark_dirty();
    }

    /// Validate the page and move forward.
    pub fn advance(&mut self) {
        let now = self.now();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.view(now) != ViewPhase::Active {
            return;
        }
        match session.advance() {
            Ok(()) => self.on_page_changed(),
            Err(_) => self.scroll = 0,
        }
        self.mark_dirty();
    }

    pub fn back(&mut self) {
        let moved = self
            .session
            .as_mut()
            .map(FormSession::back)
            .unwrap_or(false);
        if moved {
            self.on_page_changed();
            self.mark_dirty();
        }
    }

    fn on_page_changed(&mut self) {
        self.focus.reset();
        self.scroll = 0;
    }

    /// Handle an incoming async message. Stale results are dropped.
    pub fn handle_message(&mut self, msg: AppMessage) {
        if msg.request_id() != self.request_seq {
            tracing::debug!(
                "Dropping stale result for request {} (current {})",
                msg.request_id(),
                self.request_seq
            );
            return;
        }
        self.pending = None;
        self.mark_dirty();

        match msg {
            AppMessage::FormLoaded { definition, .. } => {
                tracing::info!(
                    "Loaded form {} '{}' with {} fields",
                    definition.id,
                    definition.title,
                    definition.fields.len()
                );
                self.session = Some(FormSession::new(self.form_id.clone(), *definition));
                self.screen = Screen::Wizard;
                self.on_page_changed();
            }
            AppMessage::FormLoadFailed { error, code, .. } => {
                tracing::warn!("[{}] Failed to load form {}: {}", code, self.form_id, error);
                self.load_error = Some(error);
                self.screen = Screen::NotFound;
            }
            AppMessage::SubmitSucceeded { .. } => {
                tracing::info!("Response for form {} accepted", self.form_id);
                self.submitting = false;
                if let Some(session) = self.session.as_mut() {
                    session.mark_submitted();
                }
            }
            AppMessage::SubmitFailed { error, code, .. } => {
                tracing::warn!("[{}] Submit for form {} failed: {}", code, self.form_id, error);
                self.submitting = false;
                if let Some(session) = self.session.as_mut() {
                    session.mark_submit_failed();
                }
                self.scroll = 0;
            }
        }
    }

    /// Stop the event loop and abandon any in-flight request.
    pub fn quit(&mut self) {
        self.abort_pending();
        self.should_quit = true;
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.abort_pending();
    }
}
