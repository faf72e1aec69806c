//! Form field value objects

/// Stable reference to a field within its form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub usize);

/// Declared input kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    TextArea,
    Checkbox,
}

/// Semantic classification of a field, selects the validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Name,
    Email,
    Phone,
    Message,
    Consent,
    Generic,
}

impl FieldRole {
    /// Infer the role from the field identifier and its declared kind.
    ///
    /// Identifier substrings win over the kind, checked in the order
    /// name, email, phone, message.
    pub fn infer(identifier: &str, kind: InputKind) -> Self {
        let id = identifier.to_lowercase();
        if id.contains("name") {
            FieldRole::Name
        } else if id.contains("email") || kind == InputKind::Email {
            FieldRole::Email
        } else if id.contains("phone") || kind == InputKind::Tel {
            FieldRole::Phone
        } else if id.contains("message") {
            FieldRole::Message
        } else if kind == InputKind::Checkbox {
            FieldRole::Consent
        } else {
            FieldRole::Generic
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checkbox(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct Field {
    /// Identifier used for role inference
    pub identifier: String,
    /// Key under which the value is submitted
    pub name: String,
    pub label: String,
    pub kind: InputKind,
    pub role: FieldRole,
    pub required: bool,
    pub value: FieldValue,
}

impl Field {
    /// Create a field; the role is inferred from `identifier` and `kind`
    pub fn new(identifier: &str, label: &str, kind: InputKind) -> Self {
        let value = match kind {
            InputKind::Checkbox => FieldValue::Checkbox(false),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            identifier: identifier.to_string(),
            name: identifier.to_string(),
            label: label.to_string(),
            kind,
            role: FieldRole::infer(identifier, kind),
            required: false,
            value,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Override the submitted key (defaults to the identifier)
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.set_text(value.to_string());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        if let FieldValue::Checkbox(c) = &mut self.value {
            *c = checked;
        }
        self
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == InputKind::TextArea
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(_))
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checkbox(true))
    }

    /// Raw text value (empty for checkboxes)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Checkbox(_) => "",
        }
    }

    /// Set the text value, ignored for checkboxes
    pub fn set_text(&mut self, value: String) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value;
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    pub fn toggle(&mut self) {
        if let FieldValue::Checkbox(c) = &mut self.value {
            *c = !*c;
        }
    }

    /// Value as it would be submitted, `None` for an unchecked checkbox
    pub fn submitted_value(&self) -> Option<String> {
        match &self.value {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Checkbox(true) => Some("on".to_string()),
            FieldValue::Checkbox(false) => None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Checkbox(true) => "[x]".to_string(),
            FieldValue::Checkbox(false) => "[ ]".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod role_inference {
        use super::*;

        #[test]
        fn test_identifier_substrings() {
            assert_eq!(FieldRole::infer("contact-name", InputKind::Text), FieldRole::Name);
            assert_eq!(FieldRole::infer("email", InputKind::Text), FieldRole::Email);
            assert_eq!(FieldRole::infer("userPhone", InputKind::Text), FieldRole::Phone);
            assert_eq!(FieldRole::infer("message", InputKind::TextArea), FieldRole::Message);
        }

        #[test]
        fn test_declared_kind() {
            assert_eq!(FieldRole::infer("contact", InputKind::Email), FieldRole::Email);
            assert_eq!(FieldRole::infer("mobile", InputKind::Tel), FieldRole::Phone);
            assert_eq!(FieldRole::infer("privacy", InputKind::Checkbox), FieldRole::Consent);
        }

        #[test]
        fn test_identifier_wins_over_kind() {
            assert_eq!(FieldRole::infer("name", InputKind::Email), FieldRole::Name);
        }

        #[test]
        fn test_case_insensitive() {
            assert_eq!(FieldRole::infer("EMAIL", InputKind::Text), FieldRole::Email);
        }

        #[test]
        fn test_unrecognized_is_generic() {
            assert_eq!(FieldRole::infer("company", InputKind::Text), FieldRole::Generic);
        }
    }

    mod field_values {
        use super::*;

        #[test]
        fn test_text_editing() {
            let mut field = Field::new("name", "Name", InputKind::Text);
            field.push_char('J');
            field.push_char('o');
            field.pop_char();
            assert_eq!(field.as_text(), "J");
        }

        #[test]
        fn test_checkbox_ignores_text() {
            let mut field = Field::new("privacy", "Privacy", InputKind::Checkbox);
            field.push_char('x');
            field.set_text("on".to_string());
            assert!(!field.is_checked());
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_toggle() {
            let mut field = Field::new("privacy", "Privacy", InputKind::Checkbox);
            field.toggle();
            assert!(field.is_checked());
            assert_eq!(field.display_value(), "[x]");
            field.toggle();
            assert!(!field.is_checked());
        }

        #[test]
        fn test_submitted_value() {
            let text = Field::new("name", "Name", InputKind::Text).with_value("Jane");
            assert_eq!(text.submitted_value(), Some("Jane".to_string()));

            let unchecked = Field::new("privacy", "Privacy", InputKind::Checkbox);
            assert_eq!(unchecked.submitted_value(), None);

            let checked = unchecked.checked(true);
            assert_eq!(checked.submitted_value(), Some("on".to_string()));
        }

        #[test]
        fn test_named_overrides_key() {
            let field = Field::new("contact-email", "Email", InputKind::Email).named("email");
            assert_eq!(field.identifier, "contact-email");
            assert_eq!(field.name, "email");
        }

        #[test]
        fn test_textarea_is_multiline() {
            assert!(Field::new("message", "Message", InputKind::TextArea).is_multiline());
            assert!(!Field::new("name", "Name", InputKind::Text).is_multiline());
        }
    }
}
