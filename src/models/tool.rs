use serde::{Deserialize, Serialize};

/// A model-issued request to execute one named tool. The `arguments` string
/// is the raw JSON payload exactly as the model produced it; parsing happens
/// at dispatch time so a malformed payload stays a per-call error.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionCall,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

/// Outcome of executing one ToolCall, correlated back by id. The payload is
/// already JSON-serialized: either a normalized result or `{"error": ...}`.
#[derive(Clone, Debug)]
pub struct ToolResult {
    pub tool_call_id: String,
    pub payload: String,
    pub is_error: bool,
}

impl ToolResult {
    pub fn ok(tool_call_id: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            payload: payload.into(),
            is_error: false,
        }
    }

    pub fn error(tool_call_id: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            payload: serde_json::json!({ "error": message.to_string() }).to_string(),
            is_error: true,
        }
    }
}
