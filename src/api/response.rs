use crate::api::models::{AssistantReply, ChatResponse};
use crate::error::{MapChatError, Result};

/// Classify one chat completion into the answer/tool-call split. A non-empty
/// `tool_calls` array wins over content (some providers attach commentary to
/// tool-call messages); an empty array with content is an answer; neither is
/// a malformed response.
pub fn parse_reply(response: ChatResponse) -> Result<AssistantReply> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| MapChatError::Other("Empty choices array in response".to_string()))?;

    let message = choice.message;

    if let Some(tool_calls) = message.tool_calls {
        if !tool_calls.is_empty() {
            return Ok(AssistantReply::ToolCalls(tool_calls));
        }
    }

    match message.content {
        Some(content) => Ok(AssistantReply::Answer(content)),
        None => Err(MapChatError::Other(
            "Response has neither content nor tool calls".to_string(),
        )),
    }
}
