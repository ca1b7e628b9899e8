//! Strongly typed function specs for function-calling models.
//!
//! A [`FunctionSpec`] describes one callable operation: its name, a
//! description the model uses to understand the operation, and a JSON-Schema
//! object listing the named parameters the model may fill in. Individual
//! parameter schemas stay dynamically shaped (`serde_json::Value`), but the
//! outer structure is fixed so the resolver can ask questions like "how many
//! parameters does this operation declare?" without poking through raw JSON.
//!
//! Property order is preserved end to end (serde_json's `preserve_order`
//! feature), so specs serialize in declaration order.
//!
//! # Example
//!
//! ```rust
//! use opcall_core::FunctionSpec;
//! use serde_json::json;
//!
//! let spec = FunctionSpec::new("addPet", "Add a new pet to the store")
//!     .with_parameter("name", json!({"type": "string", "description": "Pet name"}))
//!     .with_parameter("tag", json!({"type": "string"}))
//!     .with_required("name");
//!
//! assert_eq!(spec.parameter_count(), 2);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema describing a callable operation for a function-calling model.
///
/// Invariant: `parameters` is always present, possibly empty. An operation
/// with an empty parameter schema needs no argument extraction at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSpec {
    /// Operation identifier the model echoes back in its function call.
    pub name: String,

    /// Human-readable description of what the operation does.
    pub description: String,

    /// JSON-Schema object listing the operation's named parameters.
    #[serde(default)]
    pub parameters: ParameterSchema,
}

impl FunctionSpec {
    /// Create a spec with an empty parameter schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: ParameterSchema::object(),
        }
    }

    /// Add a named parameter with its JSON-Schema fragment.
    pub fn with_parameter(mut self, name: impl Into<String>, schema: Value) -> Self {
        self.parameters.properties.insert(name.into(), schema);
        self
    }

    /// Mark a previously added parameter as required.
    pub fn with_required(mut self, name: impl Into<String>) -> Self {
        self.parameters.required.push(name.into());
        self
    }

    /// Number of declared parameters.
    pub fn parameter_count(&self) -> usize {
        self.parameters.property_count()
    }
}

/// Object schema carrying an ordered mapping of named parameter schemas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    /// Always "object" for function-calling parameter schemas.
    #[serde(rename = "type")]
    pub schema_type: String,

    /// Parameter name → JSON-Schema fragment, in declaration order.
    #[serde(default)]
    pub properties: Map<String, Value>,

    /// Names of required parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl ParameterSchema {
    /// An empty object schema.
    pub fn object() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: Map::new(),
            required: Vec::new(),
        }
    }

    /// Number of declared properties.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// True when the schema declares no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for ParameterSchema {
    fn default() -> Self {
        Self::object()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spec_builder() {
        let spec = FunctionSpec::new("addPet", "Add a new pet to the store")
            .with_parameter("name", json!({"type": "string"}))
            .with_required("name");

        assert_eq!(spec.name, "addPet");
        assert_eq!(spec.description, "Add a new pet to the store");
        assert_eq!(spec.parameter_count(), 1);
        assert_eq!(spec.parameters.required, vec!["name".to_string()]);
    }

    #[test]
    fn test_empty_parameters() {
        let spec = FunctionSpec::new("listPets", "List all pets");

        assert_eq!(spec.parameter_count(), 0);
        assert!(spec.parameters.is_empty());
    }

    #[test]
    fn test_serialization_shape() {
        let spec = FunctionSpec::new("addPet", "Add a new pet to the store")
            .with_parameter("name", json!({"type": "string"}))
            .with_required("name");

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["name"], "addPet");
        assert_eq!(json["parameters"]["type"], "object");
        assert_eq!(json["parameters"]["properties"]["name"]["type"], "string");
        assert_eq!(json["parameters"]["required"][0], "name");
    }

    #[test]
    fn test_required_omitted_when_empty() {
        let spec = FunctionSpec::new("listPets", "List all pets");

        let json = serde_json::to_value(&spec).unwrap();
        assert!(json["parameters"].get("required").is_none());
    }

    #[test]
    fn test_deserialization_defaults() {
        let spec: FunctionSpec = serde_json::from_value(json!({
            "name": "listPets",
            "description": "List all pets",
            "parameters": {"type": "object"}
        }))
        .unwrap();

        assert!(spec.parameters.is_empty());
        assert!(spec.parameters.required.is_empty());
    }

    #[test]
    fn test_parameter_order_preserved() {
        let spec = FunctionSpec::new("createOrder", "Create an order")
            .with_parameter("petId", json!({"type": "integer"}))
            .with_parameter("quantity", json!({"type": "integer"}))
            .with_parameter("shipDate", json!({"type": "string"}));

        let names: Vec<&String> = spec.parameters.properties.keys().collect();
        assert_eq!(names, vec!["petId", "quantity", "shipDate"]);
    }
}
