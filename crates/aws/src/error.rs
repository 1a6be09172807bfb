use stackhook_core::CloudError;

/// Classify an AWS SDK error string into the appropriate [`CloudError`].
///
/// Inspects the message for common patterns (throttling, timeout,
/// connection, credentials) and maps them to the matching variant.
/// Everything else is a service error carrying the original message.
pub fn classify_sdk_error(error_str: &str) -> CloudError {
    let lower = error_str.to_lowercase();
    if lower.contains("throttl") || lower.contains("rate exceed") || lower.contains("too many") {
        CloudError::Throttled
    } else if lower.contains("timeout") || lower.contains("timed out") {
        CloudError::Timeout
    } else if lower.contains("credential") || lower.contains("expiredtoken") {
        CloudError::Credential(error_str.to_owned())
    } else if lower.contains("connection")
        || lower.contains("connect")
        || lower.contains("dns")
        || lower.contains("network")
    {
        CloudError::Connection(error_str.to_owned())
    } else {
        CloudError::ServiceError(error_str.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_throttled() {
        let err = classify_sdk_error("Throttling: Rate exceeded");
        assert!(matches!(err, CloudError::Throttled));
    }

    #[test]
    fn classify_timeout() {
        let err = classify_sdk_error("Request timed out after 30s");
        assert!(matches!(err, CloudError::Timeout));
    }

    #[test]
    fn classify_connection() {
        let err = classify_sdk_error("Connection refused: localhost:4566");
        assert!(matches!(err, CloudError::Connection(_)));
    }

    #[test]
    fn classify_credentials() {
        let err = classify_sdk_error("failed to load credentials from the provider chain");
        assert!(matches!(err, CloudError::Credential(_)));
    }

    #[test]
    fn classify_missing_stack_as_service_error() {
        let err = classify_sdk_error("ValidationError: Stack with id acme-prod-web does not exist");
        match err {
            CloudError::ServiceError(msg) => {
                assert_eq!(msg, "ValidationError: Stack with id acme-prod-web does not exist");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn classify_unknown_group_as_service_error() {
        let err = classify_sdk_error("ValidationError: AutoScalingGroup name not found - asg-1");
        assert!(matches!(err, CloudError::ServiceError(_)));
    }
}
