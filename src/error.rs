//! Error types shared by every input operation

use thiserror::Error;

/// Result type for input operations
pub type InputResult<T> = Result<T, InputError>;

/// Errors that can occur during input simulation or observation
///
/// A backend failure is fatal to the operation it interrupts: a running
/// listener session ends, a pointer move abandons its remaining steps.
/// Nothing in this crate retries a dead backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The platform input layer could not execute a call
    #[error("input backend unavailable: {message}")]
    BackendUnavailable { message: String },
}

impl InputError {
    /// Creates a backend-unavailable error from any message
    pub fn backend(message: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InputError::backend("cursor query refused");
        assert!(err.to_string().contains("backend unavailable"));
        assert!(err.to_string().contains("cursor query refused"));
    }
}
