//! Per-field error slots

use super::field::FieldId;
use std::collections::HashMap;

/// Renders and clears the visible error associated with a field
pub trait ErrorPresenter {
    /// Mark the field invalid and show `message` in its error slot
    fn show(&mut self, field: FieldId, message: &str);
    /// Remove the invalid mark and empty the error slot
    fn clear(&mut self, field: FieldId);
}

/// Error slot bound to one field, created on first use
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSlot {
    pub message: String,
    pub visible: bool,
}

/// Error slots for every field of a form, read by the UI
#[derive(Debug, Clone, Default)]
pub struct FieldErrors {
    slots: HashMap<FieldId, ErrorSlot>,
}

impl FieldErrors {
    /// Whether the field currently carries the invalid mark
    pub fn is_invalid(&self, field: FieldId) -> bool {
        self.slots.get(&field).is_some_and(|slot| slot.visible)
    }

    /// Visible error message for the field, if any
    pub fn message(&self, field: FieldId) -> Option<&str> {
        self.slots
            .get(&field)
            .filter(|slot| slot.visible)
            .map(|slot| slot.message.as_str())
    }

    pub fn has_errors(&self) -> bool {
        self.slots.values().any(|slot| slot.visible)
    }
}

impl ErrorPresenter for FieldErrors {
    fn show(&mut self, field: FieldId, message: &str) {
        let slot = self.slots.entry(field).or_default();
        slot.message = message.to_string();
        slot.visible = true;
    }

    fn clear(&mut self, field: FieldId) {
        // The slot stays allocated, only hidden
        if let Some(slot) = self.slots.get_mut(&field) {
            slot.visible = false;
            slot.message.clear();
        }
    }
}
