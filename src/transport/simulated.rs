//! Transport that fakes a network round trip

use super::traits::{SubmissionPayload, SubmissionTransport, TransportError};
use async_trait::async_trait;
use std::time::Duration;

/// Waits for a fixed latency, then reports success (or failure if configured)
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    latency: Duration,
    fail: bool,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            fail: false,
        }
    }

    pub fn failing(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), TransportError> {
        let body = payload.to_json()?;
        tracing::info!("Sending submission ({} bytes)", body.len());
        tracing::debug!("Submission body: {body}");

        tokio::time::sleep(self.latency).await;

        if self.fail {
            tracing::warn!("Simulated transport failure");
            return Err(TransportError::Unavailable(
                "simulated failure".to_string(),
            ));
        }
        Ok(())
    }
}
