//! Core argument-resolution types and traits for opcall.
//!
//! opcall turns a natural-language user request into a structured,
//! schema-valid set of invocation arguments for a single externally described
//! operation (for example, an API endpoint derived from an OpenAPI document),
//! using a language model's function-calling capability as the argument
//! extractor.
//!
//! This crate is deliberately small. It owns the one place real design
//! decisions exist, the [`ArgumentResolver`], and expresses everything
//! around it as narrow traits so callers can plug in their own spec sources
//! and model backends:
//!
//! - [`FunctionSpecSource`] yields a callable-function schema for an
//!   operation. How the schema is produced (OpenAPI parsing, hand-written
//!   registration) is the implementor's business.
//! - [`ModelGateway`] is a stateless request/response boundary to a
//!   chat-style model endpoint that supports function calling. A reference
//!   OpenAI-backed implementation lives in the `opcall-openai` crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use opcall_core::{ApiKey, ArgumentResolver, FunctionSpec, ResolutionRequest};
//! use opcall_openai::{OpenAiConfig, OpenAiGateway};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> opcall_core::Result<()> {
//!     let spec = FunctionSpec::new("addPet", "Add a new pet to the store")
//!         .with_parameter("name", json!({"type": "string"}))
//!         .with_required("name");
//!
//!     let gateway = Arc::new(OpenAiGateway::new(OpenAiConfig::default()));
//!     let resolver = ArgumentResolver::new(gateway);
//!
//!     let resolution = resolver
//!         .resolve(ResolutionRequest::new(
//!             "Add a new pet named Sticky",
//!             "gpt-3.5-turbo-0613",
//!             ApiKey::new("secretKey"),
//!             spec,
//!         ))
//!         .await?;
//!
//!     println!("arguments: {:?}", resolution.arguments());
//!     Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`message`] | Chat message model for the gateway payload |
//! | [`function`] | Strongly typed function specs with ordered parameter schemas |
//! | [`gateway`] | Gateway contract: request/response types, credential, errors |
//! | [`resolver`] | The argument resolver itself |
//! | [`source`] | Function-spec source trait and an in-memory implementation |
//! | [`error`] | Error types and the crate `Result` alias |

pub mod error;
pub mod function;
pub mod gateway;
pub mod message;
pub mod resolver;
pub mod source;

// Re-export commonly used types
pub use error::{ResolutionError, Result, SpecSourceError};
pub use function::{FunctionSpec, ParameterSchema};
pub use gateway::{
    ApiKey, Candidate, CandidateMessage, CompletionRequest, FunctionCall, GatewayError,
    ModelGateway, ModelResponse,
};
pub use message::{Message, MessageRole};
pub use resolver::{ArgumentMap, ArgumentResolver, Resolution, ResolutionRequest};
pub use source::{FunctionSpecSource, StaticSpecSource};
