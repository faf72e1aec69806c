//! Application state and core logic

use crate::config::FormConfig;
use crate::state::{
    ErrorPresenter, Field, FieldId, FormPage, Messages, Navigator, SubmissionController,
    SubmitError,
};
use crate::transport::{SubmissionTransport, TransportError};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    /// Navigation target after a successful submission
    ThankYou { destination: String },
}

/// Navigates by switching the current view
struct ViewRouter<'a> {
    view: &'a mut View,
}

impl Navigator for ViewRouter<'_> {
    fn navigate(&mut self, destination: &str) {
        *self.view = View::ThankYou {
            destination: destination.to_string(),
        };
    }
}

/// Main application struct
pub struct App {
    /// Form, errors and toasts
    pub page: FormPage,
    /// Submission state machine for the form
    pub controller: SubmissionController,
    pub view: View,
    transport: Arc<dyn SubmissionTransport>,
    outcome_tx: mpsc::UnboundedSender<Result<(), TransportError>>,
    outcome_rx: mpsc::UnboundedReceiver<Result<(), TransportError>>,
    notification_duration: Duration,
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FormConfig, transport: Arc<dyn SubmissionTransport>) -> Self {
        let messages = Messages::for_locale(config.locale());
        let notification_duration = config.notification_duration();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Self {
            page: FormPage::new(messages, notification_duration),
            controller: SubmissionController::new(
                config.redirect_delay(),
                config.redirect_target(),
            ),
            view: View::default(),
            transport,
            outcome_tx,
            outcome_rx,
            notification_duration,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether something on screen is changing without user input
    pub fn is_animating(&self) -> bool {
        self.controller.is_submitting() || !self.page.notifications.is_empty()
    }

    /// Advance timers: toast expiry, transport outcomes and pending navigation
    pub fn tick(&mut self, now: Instant) {
        self.page.notifications.expire(now);

        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.controller.complete(outcome, &mut self.page, now);
        }

        let mut router = ViewRouter {
            view: &mut self.view,
        };
        self.controller.poll_navigation(now, &mut router);
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        match self.view {
            View::Form => self.handle_form_key(key),
            View::ThankYou { .. } => self.handle_thank_you_key(key),
        }
        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let on_submit = self.page.form.is_submit_active();
        let multiline = self.active_field().is_some_and(|f| f.is_multiline());
        let typing = !on_submit
            && !self.active_is_checkbox()
            && !key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                let left = self.page.form.next_field();
                self.blur(left);
            }
            KeyCode::BackTab | KeyCode::Up => {
                let left = self.page.form.prev_field();
                self.blur(left);
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Enter if on_submit => self.submit(),
            KeyCode::Esc => {
                self.page.notifications.dismiss_latest();
            }
            KeyCode::Char(' ') if self.active_is_checkbox() => {
                self.edit_active(|field| field.toggle());
            }
            KeyCode::Char(c) if typing => self.edit_active(|field| field.push_char(c)),
            KeyCode::Backspace if typing => self.edit_active(|field| field.pop_char()),
            KeyCode::Enter if multiline => self.edit_active(|field| field.push_char('\n')),
            _ => {}
        }
    }

    fn handle_thank_you_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('n') => self.start_over(),
            _ => {}
        }
    }

    fn active_field(&self) -> Option<&Field> {
        self.page
            .form
            .active_field()
            .and_then(|id| self.page.form.field(id))
    }

    fn active_is_checkbox(&self) -> bool {
        self.active_field().is_some_and(|f| f.is_checkbox())
    }

    /// Apply an edit to the focused field; a change of value clears its error
    fn edit_active(&mut self, edit: impl FnOnce(&mut Field)) {
        if self.page.form.submit.disabled {
            return;
        }
        let Some(id) = self.page.form.active_field() else {
            return;
        };
        if let Some(field) = self.page.form.field_mut(id) {
            let before = field.value.clone();
            edit(field);
            if field.value != before {
                self.page.errors.clear(id);
            }
        }
    }

    fn blur(&mut self, left: Option<FieldId>) {
        if let Some(id) = left {
            self.page.blur(id);
        }
    }

    /// Start a submission; the transport runs on its own task
    pub fn submit(&mut self) {
        match self.controller.begin(&mut self.page) {
            Ok(payload) => {
                let transport = Arc::clone(&self.transport);
                let tx = self.outcome_tx.clone();
                tokio::spawn(async move {
                    let outcome = transport.send(&payload).await;
                    if tx.send(outcome).is_err() {
                        tracing::debug!("App closed before the submission finished");
                    }
                });
            }
            Err(SubmitError::FormInvalid) => {}
            Err(err) => tracing::debug!("Submit ignored: {err}"),
        }
    }

    /// Wait for the in-flight submission to report back and apply it
    pub async fn wait_for_outcome(&mut self) {
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.controller.complete(outcome, &mut self.page, Instant::now());
        }
    }

    /// Leave the thank-you view with a fresh form
    fn start_over(&mut self) {
        self.page.teardown_form();
        self.page.initialize(self.notification_duration);
        self.controller.reset();
        self.view = View::Form;
    }
}
