//! OpenAI chat-completions gateway.
//!
//! Speaks the legacy `functions` request shape, whose responses carry
//! `function_call` on the choice message, the shape the resolver's
//! extraction contract is built around.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use opcall_core::{
    ApiKey, Candidate, CandidateMessage, CompletionRequest, FunctionCall, FunctionSpec,
    GatewayError, Message, ModelGateway, ModelResponse,
};

use crate::config::OpenAiConfig;

/// OpenAI-backed [`ModelGateway`].
///
/// Holds one pooled HTTP client for its lifetime; everything else is
/// request-scoped.
#[derive(Clone)]
pub struct OpenAiGateway {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiGateway {
    /// Create a gateway with the given configuration.
    pub fn new(config: OpenAiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn convert_message(message: &Message) -> WireMessage {
        WireMessage {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
        }
    }

    fn convert_response(wire: WireResponse) -> ModelResponse {
        ModelResponse {
            candidates: wire
                .choices
                .into_iter()
                .map(|choice| Candidate {
                    message: CandidateMessage {
                        content: choice.message.content,
                        function_call: choice.message.function_call.map(|call| FunctionCall {
                            name: call.name,
                            arguments: call.arguments,
                        }),
                    },
                })
                .collect(),
        }
    }
}

#[async_trait]
impl ModelGateway for OpenAiGateway {
    async fn complete_with_functions(
        &self,
        credential: &ApiKey,
        request: CompletionRequest,
    ) -> Result<ModelResponse, GatewayError> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let body = WireRequest {
            model: request.model,
            messages: request.messages.iter().map(Self::convert_message).collect(),
            functions: request.functions,
        };

        let mut req = self
            .client
            .post(&url)
            .json(&body)
            .bearer_auth(credential.expose());

        if let Some(org) = &self.config.organization {
            req = req.header("OpenAI-Organization", org);
        }

        debug!(model = %body.model, "sending chat completion request");
        let response = req.send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
            error!(status = status.as_u16(), "chat completion request failed");
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let wire: WireResponse = response.json().await.map_err(transport_error)?;
        Ok(Self::convert_response(wire))
    }

    fn clone_box(&self) -> Box<dyn ModelGateway> {
        Box::new(self.clone())
    }
}

fn transport_error(err: reqwest::Error) -> GatewayError {
    error!(error = %err, "chat completion request failed in transport");
    GatewayError::Transport {
        message: err.to_string(),
    }
}

// OpenAI API wire types
#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    functions: Vec<FunctionSpec>,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireChoiceMessage,
}

#[derive(Debug, Default, Deserialize)]
struct WireChoiceMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    function_call: Option<WireFunctionCall>,
}

#[derive(Debug, Deserialize)]
struct WireFunctionCall {
    name: String,
    arguments: String,
}
