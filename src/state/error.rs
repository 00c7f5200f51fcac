//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No submission worker is attached to the state
    #[error("Submission channel not set")]
    SubmissionChannelNotSet,

    /// The submission worker hung up
    #[error("Submission channel closed")]
    SubmissionChannelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::SubmissionChannelNotSet;
        assert!(error.to_string().contains("channel not set"));

        let error = StateError::SubmissionChannelClosed;
        assert!(error.to_string().contains("channel closed"));
    }
}
