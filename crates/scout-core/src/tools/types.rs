//! Tool-related type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A call to a tool, as received from the transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for this tool call
    pub id: String,
    /// Name of the tool to call
    pub name: String,
    /// Arguments to pass to the tool
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    /// Create a new tool call
    pub fn new<S: Into<String>>(
        id: S,
        name: S,
        arguments: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Build a call from a JSON object; non-object values yield no arguments
    pub fn from_json<S: Into<String>>(id: S, name: S, args: serde_json::Value) -> Self {
        let arguments = match args {
            serde_json::Value::Object(map) => map.into_iter().collect(),
            _ => HashMap::new(),
        };
        Self::new(id, name, arguments)
    }

    /// Whether an argument is present and not JSON `null`
    pub fn has_argument(&self, key: &str) -> bool {
        self.arguments.get(key).is_some_and(|v| !v.is_null())
    }

    /// Get a typed argument value
    pub fn get_argument<T>(&self, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.arguments
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get_argument::<String>(key)
    }

    /// Get a boolean argument
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_argument::<bool>(key)
    }

    /// Get a number argument
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get_argument::<f64>(key)
    }

    /// Get an array-of-strings argument
    pub fn get_string_list(&self, key: &str) -> Option<Vec<String>> {
        self.get_argument::<Vec<String>>(key)
    }
}

/// Result of a tool execution
///
/// `output` carries human-readable text; structured data goes into
/// `metadata`. Use `ToolResult::success()` and `ToolResult::error()` rather
/// than building the struct by hand.
///
/// ```rust
/// use scout_core::tools::types::ToolResult;
///
/// let result = ToolResult::success("call-1", "search_code_usage", "2 matches")
///     .with_metadata("total_matches", 2)
///     .with_execution_time(12);
/// assert!(result.success);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool call ID this result corresponds to
    pub call_id: String,
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the tool execution was successful
    pub success: bool,
    /// Output from the tool (if successful)
    pub output: Option<String>,
    /// Error message (if failed)
    pub error: Option<String>,
    /// Execution time in milliseconds
    pub execution_time_ms: Option<u64>,
    /// Additional metadata
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ToolResult {
    /// Create a successful tool result
    pub fn success(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
            execution_time_ms: None,
            metadata: HashMap::new(),
        }
    }

    /// Create a failed tool result
    pub fn error(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error.into()),
            execution_time_ms: None,
            metadata: HashMap::new(),
        }
    }

    /// Add execution time
    pub fn with_execution_time(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = Some(time_ms);
        self
    }

    /// Add metadata
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Parameter definition for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Parameter type (string, number, boolean, object, array)
    pub param_type: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Default value (if any)
    pub default: Option<serde_json::Value>,
    /// Additional schema properties
    pub properties: HashMap<String, serde_json::Value>,
}

impl ToolParameter {
    fn typed<S: Into<String>>(name: S, description: S, param_type: &str) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            param_type: param_type.to_string(),
            required: true,
            default: None,
            properties: HashMap::new(),
        }
    }

    /// Create a required string parameter
    pub fn string<S: Into<String>>(name: S, description: S) -> Self {
        Self::typed(name, description, "string")
    }

    /// Create an optional string parameter
    pub fn optional_string<S: Into<String>>(name: S, description: S) -> Self {
        Self::typed(name, description, "string").optional()
    }

    /// Create a boolean parameter
    pub fn boolean<S: Into<String>>(name: S, description: S) -> Self {
        Self::typed(name, description, "boolean")
    }

    /// Create a number parameter
    pub fn number<S: Into<String>>(name: S, description: S) -> Self {
        Self::typed(name, description, "number")
    }

    /// Create an array parameter whose items have the given JSON type
    pub fn array<S: Into<String>>(name: S, description: S, item_type: &str) -> Self {
        let mut param = Self::typed(name, description, "array");
        param.properties.insert(
            "items".to_string(),
            serde_json::json!({ "type": item_type }),
        );
        param
    }

    /// Make parameter optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set default value
    pub fn with_default<V: Into<serde_json::Value>>(mut self, default: V) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// JSON schema for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Input parameters schema
    pub parameters: serde_json::Value,
}

impl ToolSchema {
    /// Create a new tool schema
    pub fn new<S: Into<String>>(name: S, description: S, parameters: Vec<ToolParameter>) -> Self {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in parameters {
            if param.required {
                required.push(param.name.clone());
            }

            let mut param_schema = serde_json::Map::new();
            param_schema.insert("type".to_string(), param.param_type.into());
            param_schema.insert("description".to_string(), param.description.into());

            if let Some(default) = param.default {
                param_schema.insert("default".to_string(), default);
            }

            for (key, value) in param.properties {
                param_schema.insert(key, value);
            }

            properties.insert(param.name, param_schema.into());
        }

        let parameters_schema = serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required
        });

        Self {
            name: name.into(),
            description: description.into(),
            parameters: parameters_schema,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_call_from_json() {
        let call = ToolCall::from_json(
            "1",
            "search_code_usage",
            json!({"term": "foo", "file_types": [".js", ".py"], "max_results": 5}),
        );
        assert_eq!(call.get_string("term").as_deref(), Some("foo"));
        assert_eq!(
            call.get_string_list("file_types"),
            Some(vec![".js".to_string(), ".py".to_string()])
        );
        assert_eq!(call.get_number("max_results"), Some(5.0));
        assert!(!call.has_argument("root_path"));
    }

    #[test]
    fn test_null_argument_is_absent() {
        let call = ToolCall::from_json("1", "t", json!({"term": null}));
        assert!(!call.has_argument("term"));
        assert!(call.get_string("term").is_none());
    }

    #[test]
    fn test_schema_required_and_items() {
        let schema = ToolSchema::new(
            "t",
            "d",
            vec![
                ToolParameter::string("term", "Identifier"),
                ToolParameter::array("file_types", "Extensions", "string")
                    .optional()
                    .with_default(json!([".js"])),
            ],
        );
        assert_eq!(schema.parameters["required"], json!(["term"]));
        assert_eq!(
            schema.parameters["properties"]["file_types"]["items"]["type"],
            "string"
        );
        assert_eq!(
            schema.parameters["properties"]["file_types"]["default"],
            json!([".js"])
        );
    }
}
