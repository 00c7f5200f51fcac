//! Submission transport error types.

/// Errors that can occur while handing a payload to the submit collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The collaborator rejected or failed to deliver the payload
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// The submission worker is not running or its channel is closed
    #[error("Submission worker unavailable")]
    WorkerUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_error_display() {
        let error = SubmitError::SubmissionFailed("connection reset".to_string());
        assert!(error.to_string().contains("Submission failed"));
        assert!(error.to_string().contains("connection reset"));

        let error = SubmitError::WorkerUnavailable;
        assert!(error.to_string().contains("worker unavailable"));
    }
}
