//! Submission flow: Idle -> Submitting -> Succeeded, or back to Idle on failure

use super::page::FormPage;
use super::notifications::Severity;
use crate::transport::{SubmissionPayload, SubmissionTransport, TransportError};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Why a submit request did not start a submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form has invalid fields")]
    FormInvalid,
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("the form was already submitted")]
    AlreadySubmitted,
}

/// Receives the destination once a submission succeeded
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&mut self, destination: &str);
}

/// Bookkeeping for the in-flight submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAttempt {
    pub original_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting(SubmissionAttempt),
    Succeeded {
        navigate_at: Instant,
        navigated: bool,
    },
}

/// Drives one form through submission.
///
/// At most one attempt is in flight; the submit button stays disabled from
/// `begin` until a failure re-enables it.
#[derive(Debug)]
pub struct SubmissionController {
    state: SubmissionState,
    redirect_delay: Duration,
    destination: String,
    last_error: Option<String>,
}

impl SubmissionController {
    /// Delay between the success toast and navigation (1.5 seconds)
    pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(redirect_delay: Duration, destination: &str) -> Self {
        Self {
            state: SubmissionState::Idle,
            redirect_delay,
            destination: destination.to_string(),
            last_error: None,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting(_))
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Reason of the most recent failed attempt
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Validate and, if the form is valid, move to `Submitting`.
    ///
    /// Returns the payload to hand to the transport.
    pub fn begin(&mut self, page: &mut FormPage) -> Result<SubmissionPayload, SubmitError> {
        match self.state {
            SubmissionState::Submitting(_) => return Err(SubmitError::AlreadySubmitting),
            SubmissionState::Succeeded { .. } => return Err(SubmitError::AlreadySubmitted),
            SubmissionState::Idle => {}
        }

        if !page.validate_all() {
            tracing::debug!("Submission blocked by invalid fields");
            return Err(SubmitError::FormInvalid);
        }

        let button = &mut page.form.submit;
        let attempt = SubmissionAttempt {
            original_label: button.label.clone(),
        };
        button.disabled = true;
        button.label = page.messages.submit_pending.to_string();

        self.state = SubmissionState::Submitting(attempt);
        tracing::info!("Submission started");
        Ok(SubmissionPayload::new(page.form.form_data()))
    }

    /// Apply the transport outcome of the in-flight attempt
    pub fn complete(
        &mut self,
        outcome: Result<(), TransportError>,
        page: &mut FormPage,
        now: Instant,
    ) {
        let attempt = match std::mem::take(&mut self.state) {
            SubmissionState::Submitting(attempt) => attempt,
            other => {
                tracing::warn!("Ignoring transport outcome outside of a submission");
                self.state = other;
                return;
            }
        };

        match outcome {
            Ok(()) => {
                tracing::info!("Submission succeeded, navigating in {:?}", self.redirect_delay);
                self.last_error = None;
                page.notifications
                    .notify(page.messages.submit_success, Severity::Success);
                self.state = SubmissionState::Succeeded {
                    navigate_at: now + self.redirect_delay,
                    navigated: false,
                };
            }
            Err(err) => {
                tracing::warn!("Submission failed: {err}");
                let button = &mut page.form.submit;
                button.disabled = false;
                button.label = attempt.original_label;
                page.notifications.notify(
                    page.messages.submit_failed_with(&err.to_string()),
                    Severity::Danger,
                );
                self.last_error = Some(err.to_string());
                self.state = SubmissionState::Idle;
            }
        }
    }

    /// Navigate once the redirect delay has passed. Returns true on the call
    /// that navigated.
    pub fn poll_navigation(&mut self, now: Instant, navigator: &mut dyn Navigator) -> bool {
        if let SubmissionState::Succeeded {
            navigate_at,
            navigated,
        } = &mut self.state
        {
            if !*navigated && now >= *navigate_at {
                *navigated = true;
                tracing::info!("Navigating to {}", self.destination);
                navigator.navigate(&self.destination);
                return true;
            }
        }
        false
    }

    /// Return to `Idle` after the page was left, so a fresh form can submit
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
        self.last_error = None;
    }

    /// Run a whole submission: validate, send and apply the outcome
    pub async fn submit<T>(&mut self, transport: &T, page: &mut FormPage) -> Result<(), SubmitError>
    where
        T: SubmissionTransport + ?Sized,
    {
        let payload = self.begin(page)?;
        let outcome = transport.send(&payload).await;
        self.complete(outcome, page, Instant::now());
        Ok(())
    }
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REDIRECT_DELAY, "thank_you")
    }
}
