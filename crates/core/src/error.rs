use thiserror::Error;

/// Errors raised while running a hook.
#[derive(Debug, Error)]
pub enum HookError {
    /// The hook argument is not a string.
    #[error("the argument {0} is the wrong type - hook arguments must be strings")]
    InvalidArgumentType(String),

    /// The hook argument is missing the `::` separator.
    #[error(
        "wrong syntax for the argument \"{0}\" - expected <resume|suspend>::<process-name>"
    )]
    InvalidArgumentSyntax(String),

    /// A component of the hook argument has an invalid value.
    #[error("the argument \"{value}\" is invalid - {reason}")]
    InvalidArgumentValue { value: String, reason: String },

    /// No hook is registered under the requested name.
    #[error("unknown hook: {0}")]
    UnknownHook(String),

    /// A cloud API call failed.
    #[error(transparent)]
    External(#[from] CloudError),
}

/// Errors returned by cloud connector calls.
#[derive(Debug, Error)]
pub enum CloudError {
    /// The service returned an error.
    #[error("AWS service error: {0}")]
    ServiceError(String),

    /// The request was throttled by the service.
    #[error("AWS request throttled")]
    Throttled,

    /// A network or connection error occurred.
    #[error("AWS connection error: {0}")]
    Connection(String),

    /// The request timed out.
    #[error("AWS request timed out")]
    Timeout,

    /// Credential resolution failed.
    #[error("credential error: {0}")]
    Credential(String),

    /// Configuration is invalid.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl CloudError {
    /// Returns `true` if the error is transient. Hooks never retry; this is
    /// reported so the host can decide.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Throttled | Self::Timeout | Self::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors() {
        assert!(CloudError::Throttled.is_retryable());
        assert!(CloudError::Timeout.is_retryable());
        assert!(CloudError::Connection("reset".into()).is_retryable());
    }

    #[test]
    fn non_retryable_errors() {
        assert!(!CloudError::ServiceError("x".into()).is_retryable());
        assert!(!CloudError::Credential("x".into()).is_retryable());
        assert!(!CloudError::Configuration("x".into()).is_retryable());
    }

    #[test]
    fn cloud_error_passes_through_unchanged() {
        let err: HookError =
            CloudError::ServiceError("Stack with id x does not exist".into()).into();
        assert_eq!(
            err.to_string(),
            "AWS service error: Stack with id x does not exist"
        );
        assert!(matches!(
            err,
            HookError::External(CloudError::ServiceError(_))
        ));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            HookError::InvalidArgumentSyntax("suspend".into()).to_string(),
            "wrong syntax for the argument \"suspend\" - expected <resume|suspend>::<process-name>"
        );
        assert_eq!(
            HookError::InvalidArgumentType("42".into()).to_string(),
            "the argument 42 is the wrong type - hook arguments must be strings"
        );
        assert_eq!(
            HookError::UnknownHook("nope".into()).to_string(),
            "unknown hook: nope"
        );
    }
}
