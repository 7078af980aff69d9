use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Message, ToolCall};

#[derive(Serialize)]
pub struct RequestBody {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Value>>,
}

#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

/// The two response shapes the model can produce for one request. Making
/// the split explicit here keeps field-presence checks out of the
/// orchestration loop.
#[derive(Debug)]
pub enum AssistantReply {
    /// Terminal answer for the turn.
    Answer(String),
    /// The model wants tool results before it answers.
    ToolCalls(Vec<ToolCall>),
}
