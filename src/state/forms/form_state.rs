//! Form state: the ordered field list, focus and submit button

use super::errors::ErrorPresenter;
use super::field::{Field, FieldId, InputKind};
use super::validator::{validate, Verdict};
use crate::state::{Messages, NotificationCenter, Severity};
use std::collections::BTreeMap;

/// The form's submit control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

impl SubmitButton {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            disabled: false,
        }
    }
}

/// Field with its latest verdict
#[derive(Debug, Clone)]
pub struct FieldSnapshot {
    pub field: Field,
    pub verdict: Verdict,
}

/// Validity of every field at one point in time
#[derive(Debug, Clone)]
pub struct FormSnapshot {
    pub fields: BTreeMap<String, FieldSnapshot>,
    pub valid: bool,
}

/// A form: its fields in tab order, the focused row and the submit button.
///
/// Focus indices `0..fields.len()` address fields; `fields.len()` is the
/// submit button row.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: Vec<Field>,
    pub active_field_index: usize,
    pub submit: SubmitButton,
}

impl ContactForm {
    pub fn new(fields: Vec<Field>, submit_label: &str) -> Self {
        Self {
            fields,
            active_field_index: 0,
            submit: SubmitButton::new(submit_label),
        }
    }

    /// The contact form shown by the application
    pub fn contact(messages: &Messages) -> Self {
        Self::new(
            vec![
                Field::new("name", messages.label_name, InputKind::Text).required(),
                Field::new("email", messages.label_email, InputKind::Email).required(),
                Field::new("phone", messages.label_phone, InputKind::Tel),
                Field::new("message", messages.label_message, InputKind::TextArea).required(),
                Field::new("privacy", messages.label_privacy, InputKind::Checkbox).required(),
            ],
            messages.submit,
        )
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(id.0)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.get_mut(id.0)
    }

    pub fn find(&self, identifier: &str) -> Option<FieldId> {
        self.fields
            .iter()
            .position(|f| f.identifier == identifier)
            .map(FieldId)
    }

    /// Number of focusable rows, fields plus the submit button
    pub fn row_count(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn active_field(&self) -> Option<FieldId> {
        (self.active_field_index < self.fields.len()).then_some(FieldId(self.active_field_index))
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// Move focus forward, returning the field that lost focus
    pub fn next_field(&mut self) -> Option<FieldId> {
        let left = self.active_field();
        self.active_field_index = (self.active_field_index + 1) % self.row_count();
        left
    }

    /// Move focus backward, returning the field that lost focus
    pub fn prev_field(&mut self) -> Option<FieldId> {
        let left = self.active_field();
        if self.active_field_index == 0 {
            self.active_field_index = self.row_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
        left
    }

    /// Validate one field and update its error slot
    pub fn validate_field(
        &self,
        id: FieldId,
        presenter: &mut dyn ErrorPresenter,
        messages: &Messages,
    ) -> bool {
        let Some(field) = self.field(id) else {
            return true;
        };
        presenter.clear(id);
        let verdict = validate(field, messages);
        if !verdict.valid {
            presenter.show(id, &verdict.message);
        }
        verdict.valid
    }

    /// Validate every field, updating all error slots.
    ///
    /// Emits a single warning toast when any field is invalid.
    pub fn validate_all(
        &self,
        presenter: &mut dyn ErrorPresenter,
        notifications: &mut NotificationCenter,
        messages: &Messages,
    ) -> bool {
        let mut all_valid = true;
        for index in 0..self.fields.len() {
            if !self.validate_field(FieldId(index), presenter, messages) {
                all_valid = false;
            }
        }
        if !all_valid {
            notifications.notify(messages.form_invalid, Severity::Warning);
        }
        all_valid
    }

    pub fn snapshot(&self, messages: &Messages) -> FormSnapshot {
        let fields: BTreeMap<String, FieldSnapshot> = self
            .fields
            .iter()
            .map(|field| {
                let verdict = validate(field, messages);
                (
                    field.identifier.clone(),
                    FieldSnapshot {
                        field: field.clone(),
                        verdict,
                    },
                )
            })
            .collect();
        let valid = fields.values().all(|f| f.verdict.valid);
        FormSnapshot { fields, valid }
    }

    /// Values to submit, keyed by field name; unchecked boxes are omitted
    pub fn form_data(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .filter_map(|f| f.submitted_value().map(|v| (f.name.clone(), v)))
            .collect()
    }
}
