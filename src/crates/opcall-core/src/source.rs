//! Function-spec sources.
//!
//! How an operation becomes a [`FunctionSpec`] is outside this crate's
//! concern: an OpenAPI loader, a hand-maintained registry, anything that can
//! answer "what is the callable schema for operation X?". The trait is a
//! single async method so implementations stay trivially stubbable.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::SpecSourceError;
use crate::function::FunctionSpec;

/// Yields the callable-function schema for an operation.
#[async_trait]
pub trait FunctionSpecSource: Send + Sync {
    /// Resolve the function spec for the given operation id.
    async fn function_spec(
        &self,
        operation_id: &str,
    ) -> std::result::Result<FunctionSpec, SpecSourceError>;
}

/// Deterministic in-memory source backed by pre-registered specs.
///
/// Useful for tests and for callers that already materialized their specs
/// elsewhere.
#[derive(Debug, Clone, Default)]
pub struct StaticSpecSource {
    specs: HashMap<String, FunctionSpec>,
}

impl StaticSpecSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spec under an operation id, builder-style.
    pub fn with_spec(mut self, operation_id: impl Into<String>, spec: FunctionSpec) -> Self {
        self.specs.insert(operation_id.into(), spec);
        self
    }

    /// Register a spec under an operation id.
    pub fn register(&mut self, operation_id: impl Into<String>, spec: FunctionSpec) {
        self.specs.insert(operation_id.into(), spec);
    }

    /// Number of registered specs.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// True when no specs are registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[async_trait]
impl FunctionSpecSource for StaticSpecSource {
    async fn function_spec(
        &self,
        operation_id: &str,
    ) -> std::result::Result<FunctionSpec, SpecSourceError> {
        self.specs
            .get(operation_id)
            .cloned()
            .ok_or_else(|| SpecSourceError::UnknownOperation {
                operation_id: operation_id.to_string(),
            })
    }
}
