//! Error types for argument resolution.

use crate::gateway::GatewayError;
use thiserror::Error;

/// Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ResolutionError>;

/// Errors that can occur while resolving arguments.
///
/// Transport and upstream failures are collapsed into the single [`Gateway`]
/// kind whose rendering always carries the fixed prefix; callers that need
/// the distinction match on the inner [`GatewayError`] variant instead of
/// parsing message text.
///
/// [`Gateway`]: ResolutionError::Gateway
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// Any failure building or issuing the gateway call.
    #[error("There's an error parsing arguments: {0}")]
    Gateway(#[from] GatewayError),

    /// The model's `arguments` payload was not a valid JSON object.
    ///
    /// Deliberately rendered without the standard prefix: the gateway call
    /// itself succeeded, and downstream consumers key on the raw
    /// serde_json message.
    #[error(transparent)]
    InvalidArgumentsJson(#[from] serde_json::Error),
}

/// Errors a function-spec source can produce.
#[derive(Debug, Clone, Error)]
pub enum SpecSourceError {
    /// The source knows no operation under this id.
    #[error("Unknown operation: {operation_id}")]
    UnknownOperation { operation_id: String },

    /// The source holds material for the operation but cannot turn it into
    /// a usable function spec.
    #[error("Invalid function spec for {operation_id}: {message}")]
    InvalidSpec {
        operation_id: String,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gateway_error_is_prefixed() {
        let err = ResolutionError::from(GatewayError::Transport {
            message: "A network error".to_string(),
        });

        assert_eq!(
            err.to_string(),
            "There's an error parsing arguments: A network error"
        );
    }

    #[test]
    fn test_upstream_error_is_prefixed() {
        let err = ResolutionError::from(GatewayError::Upstream {
            status: 404,
            body: json!({"error": "nope"}),
        });

        assert_eq!(
            err.to_string(),
            r#"There's an error parsing arguments: Response status 404, data: {"error":"nope"}"#
        );
    }

    #[test]
    fn test_arguments_json_error_is_not_prefixed() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = ResolutionError::from(parse_err);

        assert!(!err
            .to_string()
            .starts_with("There's an error parsing arguments"));
    }
}
