use serde::Serialize;

use crate::models::{LatLng, Message, PlaceList, Role, ToolCall, ToolResult};

/// Whether a transcript entry was typed by the user or produced by the
/// assistant, for the chat widget's left/right alignment.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outgoing,
    Incoming,
}

#[derive(Serialize, Clone, Debug)]
pub struct TranscriptEntry {
    pub speaker: Role,
    pub text: String,
    pub direction: Direction,
}

/// A map marker derived from the latest search results.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: String,
    pub position: LatLng,
    pub title: String,
}

/// The append-only message log for one session. Messages are never mutated
/// or removed once appended; the log is the canonical replay of the session
/// and the single source of truth for both the LLM context and the UI.
#[derive(Clone, Debug)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// A conversation always starts with exactly one system message.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    pub fn push_assistant_answer(&mut self, text: impl Into<String>) {
        self.messages.push(Message::assistant(text));
    }

    /// Append one completed tool round: the assistant message that issued the
    /// calls, then one tool message per result in the order the calls were
    /// issued. Appending both sides together keeps the correlation invariant
    /// (every tool_call_id answers the immediately preceding assistant
    /// message) structural rather than something callers must remember.
    pub fn push_tool_round(&mut self, tool_calls: Vec<ToolCall>, results: Vec<ToolResult>) {
        debug_assert_eq!(tool_calls.len(), results.len());
        self.messages.push(Message::assistant_tool_calls(tool_calls));
        for result in results {
            self.messages
                .push(Message::tool(result.tool_call_id, result.payload));
        }
    }

    /// The last assistant answer, if the log currently ends in one.
    pub fn last_answer(&self) -> Option<&str> {
        self.messages
            .last()
            .filter(|m| m.is_final_answer())
            .and_then(|m| m.content.as_deref())
    }

    /// Display-ready transcript: user and assistant text only, in log order.
    /// System messages, tool messages, and tool-call-shaped assistant
    /// messages (content = None) are not part of what the user sees.
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.messages
            .iter()
            .filter_map(|m| match (m.role, m.content.as_ref()) {
                (Role::User, Some(text)) => Some(TranscriptEntry {
                    speaker: Role::User,
                    text: text.clone(),
                    direction: Direction::Outgoing,
                }),
                (Role::Assistant, Some(text)) => Some(TranscriptEntry {
                    speaker: Role::Assistant,
                    text: text.clone(),
                    direction: Direction::Incoming,
                }),
                _ => None,
            })
            .collect()
    }

    /// Map markers for the most recent set of place results: the newest
    /// tool message whose payload parses as a search result with at least
    /// one located place. Pure function of the log; recomputed per call.
    pub fn markers(&self) -> Vec<Marker> {
        for message in self.messages.iter().rev() {
            if message.role != Role::Tool {
                continue;
            }
            let Some(payload) = message.content.as_deref() else {
                continue;
            };
            let Ok(list) = serde_json::from_str::<PlaceList>(payload) else {
                continue;
            };
            let markers: Vec<Marker> = list
                .places
                .into_iter()
                .filter_map(|place| {
                    place.location.map(|position| Marker {
                        id: place.id,
                        position,
                        title: place.name,
                    })
                })
                .collect();
            if !markers.is_empty() {
                return markers;
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FunctionCall, ToolCall};

    fn call(id: &str, name: &str) -> ToolCall {
        ToolCall {
            id: id.to_string(),
            tool_type: "function".to_string(),
            function: FunctionCall {
                name: name.to_string(),
                arguments: "{}".to_string(),
            },
        }
    }

    #[test]
    fn starts_with_system_message() {
        let conversation = Conversation::new("be helpful");
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.messages()[0].role, Role::System);
    }

    #[test]
    fn tool_round_preserves_call_order() {
        let mut conversation = Conversation::new("sys");
        conversation.push_user("hi");
        conversation.push_tool_round(
            vec![call("a", "geocode"), call("b", "nearby_search")],
            vec![
                ToolResult::ok("a", "{}"),
                ToolResult::ok("b", "{}"),
            ],
        );

        let ids: Vec<_> = conversation
            .messages()
            .iter()
            .filter(|m| m.role == Role::Tool)
            .map(|m| m.tool_call_id.clone().unwrap())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
