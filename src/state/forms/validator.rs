//! Per-field validation rules
//!
//! Each role has an explicit character grammar and length bound instead of a
//! regular expression. Lengths count chars on the trimmed value.

use super::field::{Field, FieldRole};
use crate::state::Messages;

const NAME_LEN: std::ops::RangeInclusive<usize> = 2..=50;
const PHONE_LEN: std::ops::RangeInclusive<usize> = 10..=20;
const MESSAGE_MIN_LEN: usize = 10;

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    /// Empty iff `valid`
    pub message: String,
}

impl Verdict {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Validate a field's current value against its role and required flag
pub fn validate(field: &Field, messages: &Messages) -> Verdict {
    if field.role == FieldRole::Consent || field.is_checkbox() {
        if field.required && !field.is_checked() {
            return Verdict::invalid(messages.consent);
        }
        return Verdict::ok();
    }

    let value = field.as_text().trim();
    if value.is_empty() {
        return if field.required {
            Verdict::invalid(messages.required)
        } else {
            Verdict::ok()
        };
    }

    let failure = match field.role {
        FieldRole::Name if !is_valid_name(value) => Some(messages.name),
        FieldRole::Email if !is_valid_email(value) => Some(messages.email),
        FieldRole::Phone if !is_valid_phone(value) => Some(messages.phone),
        FieldRole::Message if !is_valid_message(value) => Some(messages.message),
        _ => None,
    };

    match failure {
        Some(message) => Verdict::invalid(message),
        None => Verdict::ok(),
    }
}

/// Letters of any script, whitespace, hyphens and apostrophes, with at least one letter
pub fn is_valid_name(value: &str) -> bool {
    let len = value.chars().count();
    NAME_LEN.contains(&len)
        && value
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '-' || c == '\'')
        && value.chars().any(char::is_alphabetic)
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}

/// Digits, `+`, `-`, parentheses and whitespace
pub fn is_valid_phone(value: &str) -> bool {
    let len = value.chars().count();
    PHONE_LEN.contains(&len)
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')') || c.is_whitespace())
}

pub fn is_valid_message(value: &str) -> bool {
    value.chars().count() >= MESSAGE_MIN_LEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{InputKind, Locale};
    use pretty_assertions::assert_eq;

    fn messages() -> &'static Messages {
        Messages::for_locale(Locale::En)
    }

    fn text(identifier: &str, value: &str) -> Field {
        Field::new(identifier, identifier, InputKind::Text).with_value(value)
    }

    mod required {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_required_is_invalid() {
            let field = text("company", "").required();
            assert_eq!(validate(&field, messages()), Verdict::invalid(messages().required));
        }

        #[test]
        fn test_whitespace_only_counts_as_empty() {
            for role_id in ["name", "email", "phone", "message", "company"] {
                let field = text(role_id, "   \t ").required();
                let verdict = validate(&field, messages());
                assert!(!verdict.valid, "{role_id}");
                assert_eq!(verdict.message, messages().required);
            }
        }

        #[test]
        fn test_empty_optional_is_valid() {
            let field = text("phone", "");
            assert_eq!(validate(&field, messages()), Verdict::ok());
        }

        #[test]
        fn test_generic_required_accepts_anything() {
            let field = text("company", "x").required();
            assert_eq!(validate(&field, messages()), Verdict::ok());
        }
    }

    mod name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_names() {
            for value in ["Jane Doe", "Jo", "Mary-Jane O'Neil", "Élodie", "Иван Петров"] {
                assert!(is_valid_name(value), "{value}");
            }
        }

        #[test]
        fn test_invalid_names() {
            for value in ["J", "Jane2", "jane@doe", "--", "' '"] {
                assert!(!is_valid_name(value), "{value}");
            }
        }

        #[test]
        fn test_any_whitespace_between_words() {
            assert!(is_valid_name("Jane\tDoe"));
            assert!(is_valid_name("Jane\u{a0}Doe"));
        }

        #[test]
        fn test_length_bounds() {
            assert!(is_valid_name(&"a".repeat(50)));
            assert!(!is_valid_name(&"a".repeat(51)));
        }

        #[test]
        fn test_length_counts_chars_not_bytes() {
            assert!(is_valid_name(&"я".repeat(50)));
        }

        #[test]
        fn test_message_on_failure() {
            let verdict = validate(&text("name", "J4ne"), messages());
            assert_eq!(verdict, Verdict::invalid(messages().name));
        }

        #[test]
        fn test_value_is_trimmed() {
            assert!(validate(&text("name", "  Jo  "), messages()).valid);
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_emails() {
            for value in ["a@b.co", "jane@example.com", "first.last@mail.example.org"] {
                assert!(is_valid_email(value), "{value}");
            }
        }

        #[test]
        fn test_invalid_emails() {
            for value in [
                "not-an-email",
                "@b.co",
                "a@",
                "a@b",
                "a@.co",
                "a@b.",
                "a@@b.co",
                "a@b@c.co",
                "a b@c.co",
            ] {
                assert!(!is_valid_email(value), "{value}");
            }
        }

        #[test]
        fn test_email_kind_uses_email_rule() {
            let field = Field::new("contact", "Contact", InputKind::Email).with_value("nope");
            assert_eq!(validate(&field, messages()), Verdict::invalid(messages().email));
        }
    }

    mod phone {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_phones() {
            for value in ["+7 (999) 123-45-67", "1234567890", "+1-555-123-4567"] {
                assert!(is_valid_phone(value), "{value}");
            }
        }

        #[test]
        fn test_invalid_phones() {
            for value in ["12345", "call me maybe", "+7 999 123 45 67 ext 1", "123456789012345678901"] {
                assert!(!is_valid_phone(value), "{value}");
            }
        }

        #[test]
        fn test_message_on_failure() {
            let verdict = validate(&text("phone", "12"), messages());
            assert_eq!(verdict, Verdict::invalid(messages().phone));
        }
    }

    mod message {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_boundary_is_inclusive() {
            assert!(!validate(&text("message", "123456789"), messages()).valid);
            assert!(validate(&text("message", "1234567890"), messages()).valid);
        }

        #[test]
        fn test_length_after_trim() {
            let verdict = validate(&text("message", "  short   "), messages());
            assert_eq!(verdict, Verdict::invalid(messages().message));
        }
    }

    mod consent {
        use super::*;
        use pretty_assertions::assert_eq;

        fn privacy() -> Field {
            Field::new("privacy", "Privacy", InputKind::Checkbox)
        }

        #[test]
        fn test_required_unchecked_is_invalid() {
            let verdict = validate(&privacy().required(), messages());
            assert_eq!(verdict, Verdict::invalid(messages().consent));
        }

        #[test]
        fn test_required_checked_is_valid() {
            assert!(validate(&privacy().required().checked(true), messages()).valid);
        }

        #[test]
        fn test_optional_unchecked_is_valid() {
            assert!(validate(&privacy(), messages()).valid);
        }
    }

    #[test]
    fn test_message_empty_iff_valid() {
        let fields = [
            text("name", "Jane"),
            text("name", "1"),
            text("email", "x"),
            text("message", "").required(),
            text("company", "Acme"),
        ];
        for field in &fields {
            let verdict = validate(field, messages());
            assert_eq!(verdict.valid, verdict.message.is_empty());
        }
    }
}
