//! Localized user-facing text

use serde::{Deserialize, Serialize};

/// Language of the user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// Message catalog for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub required: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub message: &'static str,
    pub consent: &'static str,
    pub form_invalid: &'static str,
    pub submit_pending: &'static str,
    pub submit_success: &'static str,
    /// Prefix for the failure toast, the transport reason is appended
    pub submit_failed: &'static str,
    pub thank_you_title: &'static str,
    pub thank_you_body: &'static str,
    pub submit: &'static str,
    pub label_name: &'static str,
    pub label_email: &'static str,
    pub label_phone: &'static str,
    pub label_message: &'static str,
    pub label_privacy: &'static str,
    pub form_title: &'static str,
    pub hints_form: &'static str,
    pub hints_thank_you: &'static str,
    pub hint_quit: &'static str,
}

static RU: Messages = Messages {
    required: "Это поле обязательно для заполнения",
    name: "Имя должно содержать от 2 до 50 символов и может включать буквы, пробелы, дефисы и апострофы",
    email: "Пожалуйста, введите корректный email адрес",
    phone: "Номер телефона должен содержать от 10 до 20 цифр",
    message: "Сообщение должно содержать минимум 10 символов",
    consent: "Необходимо согласие с политикой конфиденциальности",
    form_invalid: "Пожалуйста, исправьте ошибки в форме",
    submit_pending: "Отправка...",
    submit_success: "Сообщение успешно отправлено!",
    submit_failed: "Не удалось отправить сообщение",
    thank_you_title: "Спасибо!",
    thank_you_body: "Мы получили ваше сообщение и скоро свяжемся с вами.",
    submit: "Отправить",
    label_name: "Имя",
    label_email: "Email",
    label_phone: "Телефон",
    label_message: "Сообщение",
    label_privacy: "Я согласен с политикой конфиденциальности",
    form_title: " Обратная связь ",
    hints_form: " Tab/↑↓:поле  Пробел:отметить  Enter/^S:отправить  Esc:скрыть ",
    hints_thank_you: " n:новое сообщение  q:выход ",
    hint_quit: " ^C:выход ",
};

static EN: Messages = Messages {
    required: "This field is required",
    name: "Name must be 2 to 50 characters and may contain letters, spaces, hyphens and apostrophes",
    email: "Please enter a valid email address",
    phone: "Phone number must be 10 to 20 characters long",
    message: "Message must be at least 10 characters long",
    consent: "You must accept the privacy policy",
    form_invalid: "Please correct the errors in the form",
    submit_pending: "Sending...",
    submit_success: "Message sent successfully!",
    submit_failed: "Could not send the message",
    thank_you_title: "Thank you!",
    thank_you_body: "We received your message and will get back to you soon.",
    submit: "Send",
    label_name: "Name",
    label_email: "Email",
    label_phone: "Phone",
    label_message: "Message",
    label_privacy: "I agree to the privacy policy",
    form_title: " Contact ",
    hints_form: " Tab/↑↓:move  Space:toggle  Enter/^S:send  Esc:dismiss toast ",
    hints_thank_you: " n:new message  q:quit ",
    hint_quit: " ^C:quit ",
};

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }

    /// Failure toast text with the transport's reason
    pub fn submit_failed_with(&self, reason: &str) -> String {
        format!("{}: {reason}", self.submit_failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_russian() {
        assert_eq!(Locale::default(), Locale::Ru);
        let messages = Messages::for_locale(Locale::default());
        assert_eq!(messages.required, "Это поле обязательно для заполнения");
    }

    #[test]
    fn test_locale_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
        let parsed: Locale = serde_json::from_str("\"ru\"").unwrap();
        assert_eq!(parsed, Locale::Ru);
    }

    #[test]
    fn test_failure_text_includes_reason() {
        let text = Messages::for_locale(Locale::En).submit_failed_with("timeout");
        assert_eq!(text, "Could not send the message: timeout");
    }

    #[test]
    fn test_catalogs_differ() {
        assert_ne!(
            Messages::for_locale(Locale::Ru).required,
            Messages::for_locale(Locale::En).required
        );
    }
}
