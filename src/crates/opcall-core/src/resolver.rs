//! The argument resolver.
//!
//! [`ArgumentResolver`] turns a natural-language prompt plus a function spec
//! into a concrete argument mapping by asking a function-calling model to do
//! the extraction. It makes at most one gateway call per resolution:
//!
//! 1. If the spec declares zero parameters, resolution short-circuits to an
//!    empty mapping without touching the gateway. This is keyed strictly on
//!    declared parameter count, never on prompt content.
//! 2. Otherwise the resolver sends a fixed system instruction plus the raw
//!    prompt, offering exactly one function schema.
//! 3. The first candidate's `function_call.arguments` JSON text is parsed
//!    into the mapping. A response without a function call resolves to
//!    [`Resolution::NoCall`], which is not the same as an empty mapping.
//!
//! There are no retries and no internal timeout; callers impose cancellation
//! around the whole call. Each resolution is independent, so concurrent use
//! needs no synchronization here.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Result;
use crate::function::FunctionSpec;
use crate::gateway::{ApiKey, CompletionRequest, ModelGateway};
use crate::message::Message;

/// Fixed extraction instruction sent as the system message.
const SYSTEM_PROMPT: &str = "Parse user input into arguments. \
    Leave missing parameters blank. \
    Do not make up any information not in user input.";

/// Mapping from argument name to a JSON-compatible value.
pub type ArgumentMap = Map<String, Value>;

/// One argument-resolution request. Request-scoped: built per call and
/// discarded on return.
#[derive(Debug, Clone)]
pub struct ResolutionRequest {
    /// The user's natural-language request, passed to the model verbatim.
    pub user_prompt: String,
    /// Model identifier handed to the gateway.
    pub model: String,
    /// Per-call credential.
    pub credential: ApiKey,
    /// Schema of the one operation to extract arguments for.
    pub function_spec: FunctionSpec,
}

impl ResolutionRequest {
    pub fn new(
        user_prompt: impl Into<String>,
        model: impl Into<String>,
        credential: ApiKey,
        function_spec: FunctionSpec,
    ) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            model: model.into(),
            credential,
            function_spec,
        }
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Parsed argument mapping; possibly empty.
    Arguments(ArgumentMap),
    /// The model answered without making a function call.
    NoCall,
}

impl Resolution {
    /// An empty argument mapping.
    pub fn empty() -> Self {
        Resolution::Arguments(ArgumentMap::new())
    }

    /// The argument mapping, if the model produced one.
    pub fn arguments(&self) -> Option<&ArgumentMap> {
        match self {
            Resolution::Arguments(map) => Some(map),
            Resolution::NoCall => None,
        }
    }

    /// True when the model made no function call.
    pub fn is_no_call(&self) -> bool {
        matches!(self, Resolution::NoCall)
    }
}

/// Resolves natural-language prompts into operation arguments through a
/// [`ModelGateway`].
#[derive(Clone)]
pub struct ArgumentResolver {
    gateway: Arc<dyn ModelGateway>,
}

impl ArgumentResolver {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Resolve one request into an argument mapping.
    ///
    /// # Errors
    ///
    /// - [`ResolutionError::Gateway`] for any failure building or issuing
    ///   the gateway call, rendered behind the fixed prefix.
    /// - [`ResolutionError::InvalidArgumentsJson`] when the model's
    ///   `arguments` text is not a valid JSON object; this one bypasses the
    ///   prefix on purpose.
    ///
    /// [`ResolutionError::Gateway`]: crate::error::ResolutionError::Gateway
    /// [`ResolutionError::InvalidArgumentsJson`]: crate::error::ResolutionError::InvalidArgumentsJson
    pub async fn resolve(&self, request: ResolutionRequest) -> Result<Resolution> {
        // Skip extraction entirely for parameterless operations.
        if request.function_spec.parameter_count() == 0 {
            debug!(
                operation = %request.function_spec.name,
                "spec declares no parameters, skipping model call"
            );
            return Ok(Resolution::empty());
        }

        let messages = vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(request.user_prompt),
        ];
        let completion =
            CompletionRequest::new(request.model, messages, vec![request.function_spec]);

        debug!(model = %completion.model, "requesting argument extraction");
        let response = self
            .gateway
            .complete_with_functions(&request.credential, completion)
            .await?;

        let call = match response.first_function_call() {
            Some(call) => call,
            None => {
                debug!("model response carried no function call");
                return Ok(Resolution::NoCall);
            }
        };

        let arguments: ArgumentMap = serde_json::from_str(&call.arguments)?;
        Ok(Resolution::Arguments(arguments))
    }
}
