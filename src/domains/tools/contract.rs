//! Parameter contracts: declaration, validation, schema and usage hints.
//!
//! Each tool declares an ordered [`ParamContract`]. The same declaration
//! produces the JSON input schema advertised to clients, validates raw call
//! arguments before anything is dispatched, orders the query string of GET
//! requests, and renders the usage hints appended to successful responses.

use std::fmt;
use std::sync::Arc;

use rmcp::model::JsonObject;
use schemars::{Schema, json_schema};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use super::ToolError;

// =============================================================================
// Parameter kinds
// =============================================================================

/// Element kind for array parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Non-empty string.
    String,
    /// Integer >= 1.
    PositiveInteger,
}

/// Constraint vocabulary shared by every tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    String { min_length: usize },
    PositiveInteger,
    Boolean,
    Enum(&'static [&'static str]),
    Array { items: ItemKind, min_items: usize },
}

impl ParamKind {
    /// A non-empty string.
    pub const TEXT: ParamKind = ParamKind::String { min_length: 1 };

    /// A numeric entity id.
    pub const ID: ParamKind = ParamKind::PositiveInteger;

    /// A non-empty list of entity ids.
    pub const ID_LIST: ParamKind = ParamKind::Array {
        items: ItemKind::PositiveInteger,
        min_items: 1,
    };

    /// A non-empty list of non-empty strings.
    pub const TEXT_LIST: ParamKind = ParamKind::Array {
        items: ItemKind::String,
        min_items: 1,
    };

    /// Check a present, non-null value against this kind.
    fn check(&self, value: &Value) -> Result<(), ValidationReason> {
        match self {
            ParamKind::String { min_length } => {
                let s = value
                    .as_str()
                    .ok_or_else(|| ValidationReason::wrong_type("string", value))?;
                if s.trim().chars().count() < *min_length {
                    return Err(ValidationReason::TooShort {
                        min_length: *min_length,
                    });
                }
                Ok(())
            }
            ParamKind::PositiveInteger => check_positive_integer(value),
            ParamKind::Boolean => {
                if value.is_boolean() {
                    Ok(())
                } else {
                    Err(ValidationReason::wrong_type("boolean", value))
                }
            }
            ParamKind::Enum(allowed) => {
                let s = value
                    .as_str()
                    .ok_or_else(|| ValidationReason::wrong_type("string", value))?;
                if allowed.iter().any(|candidate| *candidate == s) {
                    Ok(())
                } else {
                    Err(ValidationReason::NotAllowed {
                        value: s.to_string(),
                        allowed: *allowed,
                    })
                }
            }
            ParamKind::Array { min_items, .. } => {
                let items = value
                    .as_array()
                    .ok_or_else(|| ValidationReason::wrong_type("array", value))?;
                if items.len() < *min_items {
                    return Err(ValidationReason::TooFewItems {
                        min_items: *min_items,
                    });
                }
                Ok(())
            }
        }
    }

    /// Human-readable type name used in usage hints.
    pub fn display_name(&self) -> String {
        match self {
            ParamKind::String { min_length: 0 } => "string".to_string(),
            ParamKind::String { .. } => "non-empty string".to_string(),
            ParamKind::PositiveInteger => "positive integer".to_string(),
            ParamKind::Boolean => "boolean".to_string(),
            ParamKind::Enum(allowed) => format!("one of {}", allowed.join("|")),
            ParamKind::Array { items, min_items } => {
                let item = match items {
                    ItemKind::String => "string",
                    ItemKind::PositiveInteger => "positive integer",
                };
                format!("array of {item} (at least {min_items})")
            }
        }
    }

    fn schema(&self) -> Schema {
        match self {
            ParamKind::String { min_length } => {
                json_schema!({ "type": "string", "minLength": min_length })
            }
            ParamKind::PositiveInteger => json_schema!({ "type": "integer", "minimum": 1 }),
            ParamKind::Boolean => json_schema!({ "type": "boolean" }),
            ParamKind::Enum(allowed) => json_schema!({ "type": "string", "enum": allowed }),
            ParamKind::Array { items, min_items } => {
                let item_schema = match items {
                    ItemKind::String => json_schema!({ "type": "string", "minLength": 1 }),
                    ItemKind::PositiveInteger => json_schema!({ "type": "integer", "minimum": 1 }),
                };
                json_schema!({
                    "type": "array",
                    "items": item_schema.to_value(),
                    "minItems": min_items
                })
            }
        }
    }
}

fn check_positive_integer(value: &Value) -> Result<(), ValidationReason> {
    match value.as_u64() {
        Some(0) => Err(ValidationReason::NotPositive {
            found: value.to_string(),
        }),
        Some(_) => Ok(()),
        None if value.as_i64().is_some() => Err(ValidationReason::NotPositive {
            found: value.to_string(),
        }),
        None => Err(ValidationReason::wrong_type("positive integer", value)),
    }
}

fn check_items(name: &str, items: ItemKind, values: &[Value]) -> Result<(), ValidationError> {
    for (i, item) in values.iter().enumerate() {
        let result = match items {
            ItemKind::String => ParamKind::TEXT.check(item),
            ItemKind::PositiveInteger => check_positive_integer(item),
        };
        result.map_err(|reason| ValidationError::new(format!("{name}[{i}]"), reason))?;
    }
    Ok(())
}

fn value_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Validation errors
// =============================================================================

/// Why a field failed its contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    Missing,
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    NotPositive {
        found: String,
    },
    TooShort {
        min_length: usize,
    },
    TooFewItems {
        min_items: usize,
    },
    NotAllowed {
        value: String,
        allowed: &'static [&'static str],
    },
    NotAnObject {
        found: &'static str,
    },
}

impl ValidationReason {
    fn wrong_type(expected: &'static str, value: &Value) -> Self {
        Self::WrongType {
            expected,
            found: value_type_name(value),
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "is required"),
            Self::WrongType { expected, found } => write!(f, "expected {expected}, got {found}"),
            Self::NotPositive { found } => write!(f, "must be a positive integer, got {found}"),
            Self::TooShort { min_length: 1 } => write!(f, "must not be empty"),
            Self::TooShort { min_length } => {
                write!(f, "must be at least {min_length} characters long")
            }
            Self::TooFewItems { min_items: 1 } => write!(f, "must contain at least one item"),
            Self::TooFewItems { min_items } => write!(f, "must contain at least {min_items} items"),
            Self::NotAllowed { value, allowed } => write!(
                f,
                "invalid value '{value}', expected one of: {}",
                allowed.join(", ")
            ),
            Self::NotAnObject { found } => write!(f, "must be a JSON object, got {found}"),
        }
    }
}

/// A field-level contract violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

// =============================================================================
// Contract
// =============================================================================

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

/// One line of guidance about a parameter, appended to successful responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageHint {
    pub name: &'static str,
    pub kind: String,
    pub required: bool,
    pub description: &'static str,
}

impl fmt::Display for UsageHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let presence = if self.required { "required" } else { "optional" };
        write!(
            f,
            "{} ({}, {}): {}",
            self.name, self.kind, presence, self.description
        )
    }
}

/// Ordered parameter declaration for one tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamContract {
    params: Vec<ParamSpec>,
}

impl ParamContract {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(self, name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        self.with(name, kind, true, description)
    }

    pub fn optional(self, name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        self.with(name, kind, false, description)
    }

    fn with(
        mut self,
        name: &'static str,
        kind: ParamKind,
        required: bool,
        description: &'static str,
    ) -> Self {
        debug_assert!(
            self.params.iter().all(|p| p.name != name),
            "parameter '{name}' declared twice"
        );
        self.params.push(ParamSpec {
            name,
            kind,
            required,
            description,
        });
        self
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Validate raw call arguments.
    ///
    /// Fields are checked in declaration order and the first violation is
    /// reported. Optional fields sent as `null` count as absent. Undeclared
    /// fields are dropped.
    pub fn validate(&self, raw: Option<&JsonObject>) -> Result<ToolArgs, ValidationError> {
        let empty = JsonObject::new();
        let raw = raw.unwrap_or(&empty);

        let mut values = Vec::with_capacity(self.params.len());
        for spec in &self.params {
            match raw.get(spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        return Err(ValidationError::new(spec.name, ValidationReason::Missing));
                    }
                }
                Some(value) => {
                    spec.kind
                        .check(value)
                        .map_err(|reason| ValidationError::new(spec.name, reason))?;
                    if let (ParamKind::Array { items, .. }, Value::Array(elements)) =
                        (&spec.kind, value)
                    {
                        check_items(spec.name, *items, elements)?;
                    }
                    values.push((spec.name, value.clone()));
                }
            }
        }

        for key in raw.keys() {
            if !self.params.iter().any(|p| p.name == key.as_str()) {
                debug!("Dropping undeclared argument '{}'", key);
            }
        }

        Ok(ToolArgs { values })
    }

    /// Validate an arbitrary JSON value (HTTP transport entry point).
    pub fn validate_value(&self, raw: &Value) -> Result<ToolArgs, ValidationError> {
        match raw {
            Value::Null => self.validate(None),
            Value::Object(map) => self.validate(Some(map)),
            other => Err(ValidationError::new(
                "arguments",
                ValidationReason::NotAnObject {
                    found: value_type_name(other),
                },
            )),
        }
    }

    pub fn usage_hints(&self) -> Vec<UsageHint> {
        self.params
            .iter()
            .map(|p| UsageHint {
                name: p.name,
                kind: p.kind.display_name(),
                required: p.required,
                description: p.description,
            })
            .collect()
    }

    /// JSON Schema object advertised as the tool's `inputSchema`.
    pub fn input_schema(&self) -> Arc<JsonObject> {
        let mut properties = Map::new();
        for spec in &self.params {
            let mut schema = spec.kind.schema();
            schema.insert("description".to_string(), Value::from(spec.description));
            properties.insert(spec.name.to_string(), schema.to_value());
        }
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        let schema = json_schema!({
            "type": "object",
            "properties": properties,
            "required": required
        });
        Arc::new(schema.as_object().cloned().unwrap_or_default())
    }
}

// =============================================================================
// Validated arguments
// =============================================================================

/// Arguments that passed a contract, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArgs {
    values: Vec<(&'static str, Value)>,
}

impl ToolArgs {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Deserialize into a tool's typed parameter record.
    ///
    /// Only fails when the record disagrees with the contract that produced
    /// these arguments.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ToolError> {
        serde_json::from_value(self.to_body())
            .map_err(|e| ToolError::internal(format!("Arguments do not match their contract: {e}")))
    }

    /// Query pairs in declaration order. Arrays are comma-joined.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|(key, value)| (key.to_string(), query_value(value)))
            .collect()
    }

    /// The full argument object.
    pub fn to_body(&self) -> Value {
        let map: Map<String, Value> = self
            .values
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        Value::Object(map)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(query_value).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STATES: &[&str] = &["open", "closed"];

    fn contract() -> ParamContract {
        ParamContract::new()
            .required("projectId", ParamKind::ID, "Project ID")
            .optional("state", ParamKind::Enum(STATES), "Run state")
            .optional("name", ParamKind::TEXT, "Run name")
            .optional("testIds", ParamKind::ID_LIST, "Test IDs")
    }

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn reject(value: Value) -> ValidationError {
        contract().validate(Some(&args(value))).unwrap_err()
    }

    #[test]
    fn test_accepts_valid_arguments() {
        let validated = contract()
            .validate(Some(&args(json!({ "projectId": 3, "state": "open" }))))
            .unwrap();
        assert_eq!(validated.get("projectId"), Some(&json!(3)));
        assert_eq!(validated.get("state"), Some(&json!("open")));
        assert!(validated.get("name").is_none());
    }

    #[derive(Debug, serde::Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct RunParams {
        project_id: u64,
        state: Option<String>,
        #[serde(default)]
        test_ids: Vec<u64>,
    }

    #[test]
    fn test_parse_into_typed_params() {
        let validated = contract()
            .validate(Some(&args(json!({ "projectId": 3, "testIds": [4, 5] }))))
            .unwrap();
        let params: RunParams = validated.parse().unwrap();
        assert_eq!(
            params,
            RunParams {
                project_id: 3,
                state: None,
                test_ids: vec![4, 5],
            }
        );
    }

    #[test]
    fn test_parse_mismatched_record_is_internal() {
        #[derive(Debug, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[allow(dead_code)]
        struct Misnamed {
            project: u64,
        }

        let validated = contract()
            .validate(Some(&args(json!({ "projectId": 3 }))))
            .unwrap();
        let err = validated.parse::<Misnamed>().unwrap_err();
        assert!(matches!(err, ToolError::Internal(_)));
    }

    #[test]
    fn test_missing_required_field() {
        let err = reject(json!({ "state": "open" }));
        assert_eq!(err, ValidationError::new("projectId", ValidationReason::Missing));
        assert_eq!(err.to_string(), "projectId is required");

        let err = contract().validate(None).unwrap_err();
        assert_eq!(err.field, "projectId");
    }

    #[test]
    fn test_null_required_is_missing_null_optional_is_absent() {
        let err = reject(json!({ "projectId": null }));
        assert_eq!(err.reason, ValidationReason::Missing);

        let validated = contract()
            .validate(Some(&args(json!({ "projectId": 1, "name": null }))))
            .unwrap();
        assert!(validated.get("name").is_none());
    }

    #[test]
    fn test_non_positive_ids() {
        assert!(matches!(
            reject(json!({ "projectId": 0 })).reason,
            ValidationReason::NotPositive { .. }
        ));
        let err = reject(json!({ "projectId": -4 }));
        assert_eq!(err.to_string(), "projectId must be a positive integer, got -4");
    }

    #[test]
    fn test_wrong_types() {
        let err = reject(json!({ "projectId": "3" }));
        assert_eq!(
            err.reason,
            ValidationReason::WrongType {
                expected: "positive integer",
                found: "string"
            }
        );
        assert!(matches!(
            reject(json!({ "projectId": 1.5 })).reason,
            ValidationReason::WrongType { .. }
        ));
        assert!(matches!(
            reject(json!({ "projectId": 1, "testIds": 5 })).reason,
            ValidationReason::WrongType { expected: "array", .. }
        ));
    }

    #[test]
    fn test_enum_outside_set() {
        let err = reject(json!({ "projectId": 1, "state": "archived" }));
        assert_eq!(err.field, "state");
        assert!(err.to_string().contains("open, closed"));
    }

    #[test]
    fn test_empty_string_and_array() {
        let err = reject(json!({ "projectId": 1, "name": "   " }));
        assert_eq!(err.reason, ValidationReason::TooShort { min_length: 1 });

        let err = reject(json!({ "projectId": 1, "testIds": [] }));
        assert_eq!(err.reason, ValidationReason::TooFewItems { min_items: 1 });
    }

    #[test]
    fn test_array_elements_are_checked() {
        let err = reject(json!({ "projectId": 1, "testIds": [4, 0] }));
        assert_eq!(err.field, "testIds[1]");

        let labels = ParamContract::new().required("labels", ParamKind::TEXT_LIST, "Labels");
        let err = labels
            .validate(Some(&args(json!({ "labels": ["smoke", ""] }))))
            .unwrap_err();
        assert_eq!(err.field, "labels[1]");
    }

    #[test]
    fn test_first_violation_in_declaration_order() {
        let err = reject(json!({ "testIds": [], "state": "bogus" }));
        assert_eq!(err.field, "projectId");
    }

    #[test]
    fn test_undeclared_fields_are_dropped() {
        let validated = contract()
            .validate(Some(&args(json!({ "projectId": 1, "extra": true }))))
            .unwrap();
        assert!(validated.get("extra").is_none());
        assert_eq!(validated.to_body(), json!({ "projectId": 1 }));
    }

    #[test]
    fn test_validate_value_requires_object() {
        let err = contract().validate_value(&json!([1, 2])).unwrap_err();
        assert_eq!(err.field, "arguments");
        assert_eq!(
            err.reason,
            ValidationReason::NotAnObject { found: "array" }
        );
    }

    #[test]
    fn test_query_follows_declaration_order() {
        // Input order differs from declaration order.
        let validated = contract()
            .validate(Some(&args(json!({
                "testIds": [5, 6],
                "state": "open",
                "projectId": 3
            }))))
            .unwrap();
        assert_eq!(
            validated.to_query(),
            vec![
                ("projectId".to_string(), "3".to_string()),
                ("state".to_string(), "open".to_string()),
                ("testIds".to_string(), "5,6".to_string()),
            ]
        );
    }

    #[test]
    fn test_usage_hints() {
        let hints = contract().usage_hints();
        assert_eq!(hints.len(), 4);
        assert_eq!(
            hints[0].to_string(),
            "projectId (positive integer, required): Project ID"
        );
        assert_eq!(
            hints[1].to_string(),
            "state (one of open|closed, optional): Run state"
        );
    }

    #[test]
    fn test_input_schema() {
        let schema = contract().input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["projectId"]));
        assert_eq!(schema["properties"]["projectId"]["minimum"], 1);
        assert_eq!(schema["properties"]["projectId"]["description"], "Project ID");
        assert_eq!(schema["properties"]["state"]["enum"], json!(["open", "closed"]));
        assert_eq!(schema["properties"]["testIds"]["minItems"], 1);
        assert_eq!(schema["properties"]["testIds"]["items"]["type"], "integer");
    }

    #[test]
    fn test_empty_contract_schema() {
        let schema = ParamContract::new().input_schema();
        assert_eq!(schema["properties"], json!({}));
        assert_eq!(schema["required"], json!([]));
        assert!(ParamContract::new().validate(None).unwrap().is_empty());
    }
}
