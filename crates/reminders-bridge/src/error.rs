use std::time::Duration;

/// Unified error type for the reminders bridge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// A required flag is missing or a value is out of range.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The referenced reminder id does not resolve in the store.
    #[error("reminder not found: {0}")]
    NotFound(String),

    /// The store refused the permission grant.
    #[error("access to Reminders denied: {0}")]
    AccessDenied(String),

    /// The external call could not run or answered with something unreadable.
    #[error("transport error: {0}")]
    Transport(String),

    /// The external call did not answer within the configured bound.
    #[error("transport timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl BridgeError {
    /// Stable machine-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::Validation(_) => "validation",
            BridgeError::NotFound(_) => "not_found",
            BridgeError::AccessDenied(_) => "access_denied",
            BridgeError::Transport(_) | BridgeError::Timeout(_) => "transport",
        }
    }

    /// Locale template key for the user-facing message.
    pub fn message_key(&self) -> &'static str {
        match self {
            BridgeError::Validation(_) => "error_validation",
            BridgeError::NotFound(_) => "error_not_found",
            BridgeError::AccessDenied(_) => "error_access",
            BridgeError::Transport(_) => "error_transport",
            BridgeError::Timeout(_) => "error_timeout",
        }
    }
}

/// Result type alias using [`BridgeError`].
pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_a_transport_kind() {
        let error = BridgeError::Timeout(Duration::from_secs(5));
        assert_eq!(error.kind(), "transport");
        assert_eq!(error.message_key(), "error_timeout");
        assert_eq!(error.to_string(), "transport timed out after 5s");
    }

    #[test]
    fn test_message_keys() {
        assert_eq!(
            BridgeError::Validation("x".into()).message_key(),
            "error_validation"
        );
        assert_eq!(BridgeError::NotFound("x".into()).message_key(), "error_not_found");
        assert_eq!(BridgeError::AccessDenied("x".into()).message_key(), "error_access");
        assert_eq!(BridgeError::Transport("x".into()).message_key(), "error_transport");
    }
}
