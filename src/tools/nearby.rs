use serde_json::{json, Value};

use crate::config::SearchConfig;
use crate::tools::places::{parse_place_list, PlacesClient, SEARCH_FIELD_MASK};

const DEFAULT_PLACE_TYPE: &str = "restaurant";
const DEFAULT_RANK_BY: &str = "POPULARITY";

/// Ranked places around a coordinate. Latitude and longitude are required;
/// everything else falls back to the configured defaults.
pub async fn run(
    args: &Value,
    places: &PlacesClient,
    defaults: &SearchConfig,
) -> Result<String, String> {
    let latitude = args
        .get("latitude")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| "Missing required argument: latitude".to_string())?;
    let longitude = args
        .get("longitude")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| "Missing required argument: longitude".to_string())?;

    let radius = args
        .get("radius")
        .and_then(|v| v.as_f64())
        .unwrap_or(defaults.radius_m);
    let place_type = args
        .get("placeType")
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_PLACE_TYPE);
    let max_results = args
        .get("maxResults")
        .and_then(|v| v.as_u64())
        .unwrap_or(defaults.max_results as u64);
    let rank_by = args
        .get("rankBy")
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_RANK_BY);
    let language = args
        .get("language")
        .and_then(|v| v.as_str())
        .unwrap_or(&defaults.language);

    let body = json!({
        "includedTypes": [place_type],
        "locationRestriction": {
            "circle": {
                "center": { "latitude": latitude, "longitude": longitude },
                "radius": radius,
            }
        },
        "maxResultCount": max_results,
        "rankPreference": rank_by,
        "languageCode": language,
    });

    let payload = places
        .search("searchNearby", &body, SEARCH_FIELD_MASK)
        .await?;
    let list = parse_place_list(&payload);

    serde_json::to_string(&list).map_err(|e| format!("Failed to serialize result: {}", e))
}
