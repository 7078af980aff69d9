use mapchat::conversation::{Conversation, Direction};
use mapchat::models::{FunctionCall, Role, ToolCall, ToolResult};
use serde_json::json;

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

fn places_payload(names: &[(&str, f64, f64)]) -> String {
    let places: Vec<_> = names
        .iter()
        .map(|(name, latitude, longitude)| {
            json!({
                "id": format!("id_{}", name),
                "name": name,
                "location": { "latitude": latitude, "longitude": longitude }
            })
        })
        .collect();
    json!({ "places": places }).to_string()
}

#[test]
fn transcript_filters_roles_and_preserves_order() {
    let mut conversation = Conversation::new("system prompt");
    conversation.push_user("find sushi");
    conversation.push_tool_round(
        vec![call("a", "geocodeAddress")],
        vec![ToolResult::ok("a", "{}")],
    );
    conversation.push_assistant_answer("Here are three options.");
    conversation.push_user("thanks");

    let transcript = conversation.transcript();

    // system, tool, and tool-call-shaped assistant messages are invisible
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[0].speaker, Role::User);
    assert_eq!(transcript[0].direction, Direction::Outgoing);
    assert_eq!(transcript[1].speaker, Role::Assistant);
    assert_eq!(transcript[1].text, "Here are three options.");
    assert_eq!(transcript[2].text, "thanks");
}

#[test]
fn tool_messages_echo_call_ids_in_issue_order() {
    let mut conversation = Conversation::new("sys");
    conversation.push_user("hi");

    let calls = vec![
        call("call_x", "geocodeAddress"),
        call("call_y", "nearbySearch"),
        call("call_z", "textSearch"),
    ];
    let results = vec![
        ToolResult::ok("call_x", "{}"),
        ToolResult::error("call_y", "boom"),
        ToolResult::ok("call_z", "{}"),
    ];
    conversation.push_tool_round(calls.clone(), results);

    let issued: Vec<_> = calls.iter().map(|c| c.id.clone()).collect();
    let echoed: Vec<_> = conversation
        .messages()
        .iter()
        .filter(|m| m.role == Role::Tool)
        .map(|m| m.tool_call_id.clone().unwrap())
        .collect();

    // identity, not just set membership
    assert_eq!(issued, echoed);
}

#[test]
fn markers_come_from_the_latest_search_result() {
    let mut conversation = Conversation::new("sys");
    conversation.push_user("first search");
    conversation.push_tool_round(
        vec![call("a", "nearbySearch")],
        vec![ToolResult::ok(
            "a",
            places_payload(&[("Old Cafe", 41.0, -8.0)]),
        )],
    );
    conversation.push_assistant_answer("found one");
    conversation.push_user("second search");
    conversation.push_tool_round(
        vec![call("b", "textSearch")],
        vec![ToolResult::ok(
            "b",
            places_payload(&[("Sushi A", 41.15, -8.61), ("Sushi B", 41.16, -8.62)]),
        )],
    );
    conversation.push_assistant_answer("found two");

    let markers = conversation.markers();
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].title, "Sushi A");
    assert_eq!(markers[1].title, "Sushi B");
    assert_eq!(markers[0].position.latitude, 41.15);
}

#[test]
fn markers_projection_is_idempotent() {
    let mut conversation = Conversation::new("sys");
    conversation.push_user("search");
    conversation.push_tool_round(
        vec![call("a", "nearbySearch")],
        vec![ToolResult::ok(
            "a",
            places_payload(&[("Spot", 40.0, -8.5)]),
        )],
    );
    conversation.push_assistant_answer("done");

    let first = conversation.markers();
    let second = conversation.markers();
    assert_eq!(first, second);
}

#[test]
fn non_search_payloads_produce_no_markers() {
    let mut conversation = Conversation::new("sys");
    conversation.push_user("where is Porto");
    // geocode result: no `places` array, so nothing to put on the map
    conversation.push_tool_round(
        vec![call("a", "geocodeAddress")],
        vec![ToolResult::ok(
            "a",
            json!({
                "coordinates": { "latitude": 41.15, "longitude": -8.61 },
                "formatted_address": "Porto, Portugal",
                "place_id": "ChIJporto"
            })
            .to_string(),
        )],
    );
    conversation.push_assistant_answer("Porto is at 41.15, -8.61");

    assert!(conversation.markers().is_empty());
}

#[test]
fn places_without_coordinates_are_skipped_by_markers() {
    let mut conversation = Conversation::new("sys");
    conversation.push_user("search");
    let payload = json!({
        "places": [
            { "id": "with", "name": "Located", "location": { "latitude": 1.0, "longitude": 2.0 } },
            { "id": "without", "name": "Unlocated" }
        ]
    })
    .to_string();
    conversation.push_tool_round(
        vec![call("a", "textSearch")],
        vec![ToolResult::ok("a", payload)],
    );

    let markers = conversation.markers();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].id, "with");
}
