use std::time::Duration;

/// Error type for intake calls.
///
/// The contracts define no status codes or retry policy; callers show a
/// generic retry message and let the user try again manually.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// The intake call failed (transport failure, rejected payload, ...).
    #[error("Intake call failed: {0}")]
    Failed(#[from] anyhow::Error),

    /// The intake call did not settle within the configured deadline.
    /// Only produced by [`WithTimeout`](crate::WithTimeout).
    #[error("Intake call timed out after {0:?}")]
    TimedOut(Duration),
}

impl IntakeError {
    /// Create a failure from a plain message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(anyhow::anyhow!(message.into()))
    }
}
