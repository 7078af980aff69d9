use serde_json::json;

use mapchat::config::{Config, SearchConfig};
use mapchat::tools::{PlacesClient, ToolExecutor, ToolKind, ToolRegistry};

fn dummy_config() -> Config {
    Config {
        openai_api_key: "test-openai-key".to_string(),
        maps_api_key: "test-maps-key".to_string(),
        api_endpoint: "http://localhost:9/v1/chat/completions".to_string(),
        model: "gpt-4o-mini".to_string(),
        system_prompt: "sys".to_string(),
        request_timeout: 5,
        verbose: false,
        max_tool_rounds: 8,
        search: SearchConfig::default(),
    }
}

fn registry() -> ToolRegistry {
    let config = dummy_config();
    ToolRegistry::new(PlacesClient::new(&config).unwrap(), config.search)
}

#[test]
fn every_tool_kind_resolves_by_its_wire_name() {
    for kind in ToolKind::ALL {
        assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(ToolKind::from_name("teleport"), None);
}

#[test]
fn declarations_advertise_all_tools_in_function_format() {
    let declarations = registry().declarations();
    assert_eq!(declarations.len(), ToolKind::ALL.len());

    for (declaration, kind) in declarations.iter().zip(ToolKind::ALL) {
        assert_eq!(declaration["type"], "function");
        assert_eq!(declaration["function"]["name"], kind.name());
        assert!(declaration["function"]["parameters"].is_object());
        assert!(!declaration["function"]["description"]
            .as_str()
            .unwrap()
            .is_empty());
    }
}

#[test]
fn nearby_search_requires_both_coordinates() {
    let err = registry()
        .validate_arguments(ToolKind::NearbySearch, &json!({ "longitude": -8.55 }))
        .unwrap_err();
    assert!(err.contains("latitude"));
}

#[test]
fn nearby_search_rejects_unknown_rank_mode() {
    let err = registry()
        .validate_arguments(
            ToolKind::NearbySearch,
            &json!({ "latitude": 41.2, "longitude": -8.5, "rankBy": "BEST" }),
        )
        .unwrap_err();
    assert!(err.contains("BEST"));
}

#[test]
fn nearby_search_rejects_unknown_place_type() {
    let err = registry()
        .validate_arguments(
            ToolKind::NearbySearch,
            &json!({ "latitude": 41.2, "longitude": -8.5, "placeType": "wizard_tower" }),
        )
        .unwrap_err();
    assert!(err.contains("wizard_tower"));
}

#[test]
fn extra_properties_are_rejected() {
    let err = registry()
        .validate_arguments(
            ToolKind::Geocode,
            &json!({ "address": "Porto", "urgency": "high" }),
        )
        .unwrap_err();
    assert!(!err.is_empty());
}

#[test]
fn fully_specified_text_search_arguments_validate() {
    let result = registry().validate_arguments(
        ToolKind::TextSearch,
        &json!({
            "textQuery": "sushi in Ermesinde",
            "latitude": 41.21,
            "longitude": -8.55,
            "radius": 2000,
            "includedType": "japanese_restaurant",
            "maxResultCount": 5,
            "rankPreference": "RELEVANCE",
            "languageCode": "pt-PT",
            "minRating": 3.0,
            "openNow": true,
            "priceLevels": ["PRICE_LEVEL_MODERATE"]
        }),
    );
    assert!(result.is_ok());
}

#[tokio::test]
async fn dispatching_an_unregistered_name_fails_before_any_request() {
    let err = registry().dispatch("teleport", "{}").await.unwrap_err();
    assert!(err.contains("not registered"));
}

#[tokio::test]
async fn text_search_rejects_a_lone_latitude() {
    // passes the schema (both fields are individually optional) and is
    // caught by the adapter before it builds a request
    let err = registry()
        .dispatch("textSearch", "{\"textQuery\":\"cafes\",\"latitude\":41.2}")
        .await
        .unwrap_err();
    assert!(err.contains("together"));
}
