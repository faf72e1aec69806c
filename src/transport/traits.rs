//! Trait abstraction for the submission transport to enable mocking in tests

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Body handed to the transport, serialized as `{"fields": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub fields: BTreeMap<String, String>,
}

impl SubmissionPayload {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn to_json(&self) -> Result<String, TransportError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Failure reported by a transport
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("transport unavailable: {0}")]
    Unavailable(String),
    #[error("could not encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Delivers a submitted form somewhere
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Send the collected field values
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SubmissionPayload {
        SubmissionPayload::new(
            [("email", "jane@example.com"), ("name", "Jane Doe")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_wire_format() {
        let json = payload().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"fields":{"email":"jane@example.com","name":"Jane Doe"}}"#
        );
    }

    #[test]
    fn test_wire_format_parses_back() {
        let parsed: SubmissionPayload =
            serde_json::from_str(r#"{"fields":{"name":"Jane Doe"}}"#).unwrap();
        assert_eq!(parsed.fields["name"], "Jane Doe");
    }

    #[test]
    fn test_error_display() {
        let err = TransportError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "transport unavailable: connection refused");
    }

    #[tokio::test]
    async fn test_mock_transport() {
        let mut mock = MockSubmissionTransport::new();
        mock.expect_send()
            .withf(|p| p.fields.contains_key("email"))
            .times(1)
            .returning(|_| Ok(()));
        assert!(mock.send(&payload()).await.is_ok());
    }
}
