//! Submission transport: the seam between the form and whatever delivers it

mod simulated;
mod traits;

pub use simulated::SimulatedTransport;
pub use traits::{SubmissionPayload, SubmissionTransport, TransportError};

#[cfg(test)]
pub use traits::MockSubmissionTransport;
