use mapchat::api::models::{AssistantReply, ChatResponse};
use mapchat::api::parse_reply;
use serde_json::json;

fn response(value: serde_json::Value) -> ChatResponse {
    serde_json::from_value(value).unwrap()
}

#[test]
fn content_only_is_an_answer() {
    let reply = parse_reply(response(json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": "Hello, world!"
            }
        }]
    })))
    .unwrap();

    match reply {
        AssistantReply::Answer(content) => assert_eq!(content, "Hello, world!"),
        other => panic!("expected answer, got {:?}", other),
    }
}

#[test]
fn tool_calls_are_parsed_in_order() {
    let reply = parse_reply(response(json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [
                    {
                        "id": "call_1",
                        "type": "function",
                        "function": { "name": "geocodeAddress", "arguments": "{\"address\":\"Porto\"}" }
                    },
                    {
                        "id": "call_2",
                        "type": "function",
                        "function": { "name": "nearbySearch", "arguments": "{}" }
                    }
                ]
            }
        }]
    })))
    .unwrap();

    match reply {
        AssistantReply::ToolCalls(calls) => {
            let ids: Vec<_> = calls.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(ids, vec!["call_1", "call_2"]);
            assert_eq!(calls[0].function.name, "geocodeAddress");
        }
        other => panic!("expected tool calls, got {:?}", other),
    }
}

#[test]
fn tool_calls_win_over_commentary_content() {
    let reply = parse_reply(response(json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": "Let me look that up.",
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": { "name": "textSearch", "arguments": "{}" }
                }]
            }
        }]
    })))
    .unwrap();

    assert!(matches!(reply, AssistantReply::ToolCalls(_)));
}

#[test]
fn empty_tool_calls_array_is_an_answer() {
    let reply = parse_reply(response(json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": "No tools needed",
                "tool_calls": []
            }
        }]
    })))
    .unwrap();

    assert!(matches!(reply, AssistantReply::Answer(_)));
}

#[test]
fn empty_choices_is_an_error() {
    let result = parse_reply(response(json!({ "choices": [] })));
    assert!(result.is_err());
}

#[test]
fn neither_content_nor_tool_calls_is_an_error() {
    let result = parse_reply(response(json!({
        "choices": [{ "message": { "role": "assistant" } }]
    })));
    assert!(result.is_err());
}
