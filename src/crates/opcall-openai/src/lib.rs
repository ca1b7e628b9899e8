//! OpenAI-backed model gateway for opcall.
//!
//! This crate provides the reference [`ModelGateway`] implementation against
//! the OpenAI chat-completions endpoint, using the legacy `functions` request
//! shape that pairs with the `function_call` response field.
//!
//! The gateway is stateless with respect to credentials: the API key arrives
//! with each call, so one gateway instance (and its pooled HTTP client) can
//! serve any number of tenants.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use opcall_core::{ApiKey, ArgumentResolver, ResolutionRequest};
//! use opcall_openai::{OpenAiConfig, OpenAiGateway};
//!
//! let gateway = Arc::new(OpenAiGateway::new(OpenAiConfig::default()));
//! let resolver = ArgumentResolver::new(gateway);
//! ```
//!
//! [`ModelGateway`]: opcall_core::ModelGateway

pub mod config;
pub mod gateway;

pub use config::OpenAiConfig;
pub use gateway::OpenAiGateway;
