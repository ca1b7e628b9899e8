//! Gateway contract for chat-style function-calling model endpoints.
//!
//! [`ModelGateway`] is the resolver's only external dependency at run time: a
//! stateless, single-method boundary that takes a model identifier, an
//! ordered message list, and a function-schema list, and returns the model's
//! candidates. Implementations handle transport and provider specifics; the
//! resolver never sees an HTTP status code or a wire format, only
//! [`ModelResponse`] and [`GatewayError`].
//!
//! Keeping the trait this narrow means the resolver is testable against
//! deterministic stand-ins, with no network-backed implementation required.

use crate::function::FunctionSpec;
use crate::message::Message;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Opaque API credential.
///
/// The Debug rendering is redacted so request structs can derive `Debug`
/// without leaking the key into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for building auth headers.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

/// Logical gateway request: model identifier, ordered messages, and the
/// function schemas offered to the model.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub functions: Vec<FunctionSpec>,
}

impl CompletionRequest {
    pub fn new(
        model: impl Into<String>,
        messages: Vec<Message>,
        functions: Vec<FunctionSpec>,
    ) -> Self {
        Self {
            model: model.into(),
            messages,
            functions,
        }
    }
}

/// The model's structured-output mechanism.
///
/// `arguments` is JSON text, not parsed JSON. Decoding it is the caller's
/// job, and a decode failure is the caller's error to classify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

/// Message carried by one response candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
}

/// One entry in the model's ordered candidate list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub message: CandidateMessage,
}

/// Successful gateway response: an ordered list of candidates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    pub candidates: Vec<Candidate>,
}

impl ModelResponse {
    /// The first candidate's function call, if any.
    pub fn first_function_call(&self) -> Option<&FunctionCall> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.message.function_call.as_ref())
    }

    /// Build a single-candidate response carrying a function call.
    pub fn with_function_call(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                message: CandidateMessage {
                    content: None,
                    function_call: Some(FunctionCall {
                        name: name.into(),
                        arguments: arguments.into(),
                    }),
                },
            }],
        }
    }

    /// Build a single-candidate response carrying plain text and no call.
    pub fn with_text(content: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                message: CandidateMessage {
                    content: Some(content.into()),
                    function_call: None,
                },
            }],
        }
    }
}

/// Failure modes of a gateway call.
///
/// The two variants render differently but both reach the caller behind the
/// resolver's single normalized error kind; callers that need to tell them
/// apart match on the variant, not the message text.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// No usable response from the endpoint; carries the upstream message.
    #[error("{message}")]
    Transport { message: String },

    /// The endpoint answered with a structured error.
    #[error("Response status {status}, data: {body}")]
    Upstream { status: u16, body: Value },
}

/// Stateless request/response boundary to a function-calling model endpoint.
///
/// Implementations must be `Send + Sync`; share them across tasks as
/// `Arc<dyn ModelGateway>`. The credential arrives with each call rather
/// than living in the implementation, so one gateway can serve any number of
/// tenants.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Issue one completion request offering the given function schemas.
    async fn complete_with_functions(
        &self,
        credential: &ApiKey,
        request: CompletionRequest,
    ) -> Result<ModelResponse, GatewayError>;

    /// Clone this gateway into a boxed trait object.
    fn clone_box(&self) -> Box<dyn ModelGateway>;
}

impl Clone for Box<dyn ModelGateway> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone)]
    struct EchoGateway;

    #[async_trait]
    impl ModelGateway for EchoGateway {
        async fn complete_with_functions(
            &self,
            _credential: &ApiKey,
            request: CompletionRequest,
        ) -> Result<ModelResponse, GatewayError> {
            Ok(ModelResponse::with_text(request.model))
        }

        fn clone_box(&self) -> Box<dyn ModelGateway> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn test_api_key_debug_redacted() {
        let key = ApiKey::new("sk-secret123");
        let rendered = format!("{:?}", key);

        assert!(!rendered.contains("sk-secret123"));
        assert!(rendered.contains("REDACTED"));
        assert_eq!(key.expose(), "sk-secret123");
    }

    #[test]
    fn test_first_function_call() {
        let response = ModelResponse::with_function_call("addPet", r#"{"name":"Sticky"}"#);

        let call = response.first_function_call().unwrap();
        assert_eq!(call.name, "addPet");
        assert_eq!(call.arguments, r#"{"name":"Sticky"}"#);
    }

    #[test]
    fn test_first_function_call_absent() {
        assert!(ModelResponse::default().first_function_call().is_none());
        assert!(ModelResponse::with_text("hello")
            .first_function_call()
            .is_none());
    }

    #[test]
    fn test_transport_error_rendering() {
        let err = GatewayError::Transport {
            message: "A network error".to_string(),
        };
        assert_eq!(err.to_string(), "A network error");
    }

    #[test]
    fn test_upstream_error_rendering() {
        let body = json!({"error": {"message": "X", "type": "invalid_request_error"}});
        let err = GatewayError::Upstream { status: 404, body };

        assert_eq!(
            err.to_string(),
            r#"Response status 404, data: {"error":{"message":"X","type":"invalid_request_error"}}"#
        );
    }

    #[tokio::test]
    async fn test_boxed_gateway_clone() {
        let gateway: Box<dyn ModelGateway> = Box::new(EchoGateway);
        let cloned = gateway.clone();

        let response = cloned
            .complete_with_functions(
                &ApiKey::new("k"),
                CompletionRequest::new("gpt-4", vec![], vec![]),
            )
            .await
            .unwrap();
        assert_eq!(response.candidates[0].message.content.as_deref(), Some("gpt-4"));
    }
}
