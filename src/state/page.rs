//! Everything the contact page holds for its lifetime

use super::forms::{ContactForm, FieldErrors, FieldId};
use super::init::{Component, InitRegistry};
use super::messages::Messages;
use super::notifications::NotificationCenter;
use std::time::Duration;

/// Page-lifetime state shared by the form and the submission flow
#[derive(Debug)]
pub struct FormPage {
    pub messages: &'static Messages,
    pub notifications: NotificationCenter,
    pub form: ContactForm,
    pub errors: FieldErrors,
    init: InitRegistry,
}

impl FormPage {
    pub fn new(messages: &'static Messages, notification_duration: Duration) -> Self {
        let mut page = Self {
            messages,
            notifications: NotificationCenter::default(),
            form: ContactForm::new(Vec::new(), messages.submit),
            errors: FieldErrors::default(),
            init: InitRegistry::default(),
        };
        page.initialize(notification_duration);
        page
    }

    /// Set up components that are not initialized yet; already initialized
    /// ones keep their state.
    pub fn initialize(&mut self, notification_duration: Duration) {
        if self.init.begin(Component::Notifications) {
            self.notifications = NotificationCenter::new(notification_duration);
            tracing::debug!("Notification center ready");
        }
        if self.init.begin(Component::Forms) {
            self.form = ContactForm::contact(self.messages);
            self.errors = FieldErrors::default();
            tracing::debug!("Contact form bound ({} fields)", self.form.fields.len());
        }
    }

    /// Discard the form so the next `initialize` binds a fresh one.
    /// Toasts are kept.
    pub fn teardown_form(&mut self) {
        self.init.teardown(Component::Forms);
    }

    pub fn is_initialized(&self, component: Component) -> bool {
        self.init.is_initialized(component)
    }

    /// Validate the field that just lost focus
    pub fn blur(&mut self, field: FieldId) -> bool {
        self.form.validate_field(field, &mut self.errors, self.messages)
    }

    /// Validate the whole form, showing errors and the warning toast
    pub fn validate_all(&mut self) -> bool {
        self.form
            .validate_all(&mut self.errors, &mut self.notifications, self.messages)
    }
}
