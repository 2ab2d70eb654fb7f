//! Message framing for newline-delimited JSON.

use serde_json::Value;

use crate::types::{InvocationContext, NodeError, NodeOutput, NodeResult};

/// Parse a single line of text as an invocation.
pub fn parse_invocation(line: &str) -> NodeResult<InvocationContext> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(NodeError::ParseError("Empty message".to_string()));
    }

    serde_json::from_str(trimmed).map_err(|e| NodeError::ParseError(e.to_string()))
}

/// Serialize node output to a JSON line (with trailing newline).
pub fn frame_output(output: &NodeOutput) -> NodeResult<String> {
    let mut json = serde_json::to_string(output)?;
    json.push('\n');
    Ok(json)
}

/// Serialize an arbitrary value to a JSON line.
pub fn frame_value(value: &Value) -> NodeResult<String> {
    let mut json = serde_json::to_string(value)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeExecutionData;
    use serde_json::json;

    #[test]
    fn test_parse_invocation() {
        let ctx = parse_invocation(r#"  {"parameters":{"trackNumber":"10"}}  "#).unwrap();
        assert_eq!(ctx.get_parameter("trackNumber", "").unwrap(), "10");
        assert!(ctx.execution_id.is_none());
    }

    #[test]
    fn test_empty_line_is_parse_error() {
        assert!(matches!(parse_invocation("   "), Err(NodeError::ParseError(_))));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(parse_invocation("{nope"), Err(NodeError::ParseError(_))));
    }

    #[test]
    fn test_frame_output_is_one_line() {
        let output = vec![vec![NodeExecutionData {
            json: json!({"status": "ENTREGUE"}),
        }]];
        let framed = frame_output(&output).unwrap();
        assert_eq!(framed, "[[{\"json\":{\"status\":\"ENTREGUE\"}}]]\n");
    }

    #[test]
    fn test_frame_empty_output() {
        assert_eq!(frame_output(&vec![Vec::new()]).unwrap(), "[[]]\n");
    }
}
