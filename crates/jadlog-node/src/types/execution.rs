//! Invocation input from the host and the item envelope handed back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{NodeError, NodeResult};

/// Parameters and metadata for one node invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationContext {
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,
}

impl InvocationContext {
    pub fn with_parameter(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.to_string(), value.into());
        self
    }

    /// Read a string parameter, using `default` when the host left it out.
    pub fn get_parameter(&self, name: &str, default: &str) -> NodeResult<String> {
        match self.parameters.get(name) {
            None | Some(Value::Null) => Ok(default.to_string()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(NodeError::InvalidParams(format!(
                "'{name}' must be a string, got {other}"
            ))),
        }
    }
}

/// One output item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeExecutionData {
    pub json: Value,
}

/// Output branches of a node run; this node has a single `main` branch.
pub type NodeOutput = Vec<Vec<NodeExecutionData>>;

/// Wrap each record as its own output item.
pub fn return_json_array<T: Serialize>(records: &[T]) -> NodeResult<Vec<NodeExecutionData>> {
    records
        .iter()
        .map(|r| -> NodeResult<NodeExecutionData> {
            Ok(NodeExecutionData {
                json: serde_json::to_value(r)?,
            })
        })
        .collect()
}
