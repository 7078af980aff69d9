use serde_json::{json, Value};

use crate::config::SearchConfig;
use crate::tools::places::{parse_place_list, PlacesClient, SEARCH_FIELD_MASK};

const DEFAULT_RANK_PREFERENCE: &str = "RELEVANCE";

/// Semantic place search from a free-text query, optionally biased toward a
/// coordinate. The query is the only required argument.
pub async fn run(
    args: &Value,
    places: &PlacesClient,
    defaults: &SearchConfig,
) -> Result<String, String> {
    let text_query = args
        .get("textQuery")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing required argument: textQuery".to_string())?;

    let latitude = args.get("latitude").and_then(|v| v.as_f64());
    let longitude = args.get("longitude").and_then(|v| v.as_f64());
    let bias = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Some((latitude, longitude)),
        (None, None) => None,
        _ => {
            return Err(
                "Arguments latitude and longitude must be provided together".to_string(),
            )
        }
    };

    let radius = args
        .get("radius")
        .and_then(|v| v.as_f64())
        .unwrap_or(defaults.bias_radius_m);
    let max_results = args
        .get("maxResultCount")
        .and_then(|v| v.as_u64())
        .unwrap_or(defaults.max_results as u64);
    let rank_preference = args
        .get("rankPreference")
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_RANK_PREFERENCE);
    let language = args
        .get("languageCode")
        .and_then(|v| v.as_str())
        .unwrap_or(&defaults.language);
    let min_rating = args
        .get("minRating")
        .and_then(|v| v.as_f64())
        .unwrap_or(defaults.min_rating);
    let open_now = args
        .get("openNow")
        .and_then(|v| v.as_bool())
        .unwrap_or(defaults.open_now);

    let mut body = json!({
        "textQuery": text_query,
        "maxResultCount": max_results,
        "rankPreference": rank_preference,
        "languageCode": language,
        "minRating": min_rating,
        "openNow": open_now,
    });

    if let Some(included_type) = args.get("includedType").and_then(|v| v.as_str()) {
        body["includedType"] = json!(included_type);
    }
    if let Some((latitude, longitude)) = bias {
        body["locationBias"] = json!({
            "circle": {
                "center": { "latitude": latitude, "longitude": longitude },
                "radius": radius,
            }
        });
    }
    if let Some(price_levels) = args.get("priceLevels").and_then(|v| v.as_array()) {
        if !price_levels.is_empty() {
            body["priceLevels"] = json!(price_levels);
        }
    }

    let payload = places
        .search("searchText", &body, SEARCH_FIELD_MASK)
        .await?;
    let list = parse_place_list(&payload);

    serde_json::to_string(&list).map_err(|e| format!("Failed to serialize result: {}", e))
}
