use serde_json::Value;

use crate::models::PlaceDetails;
use crate::tools::places::PlacesClient;

const DETAILS_FIELD_MASK: &str = "id,displayName,formattedAddress,nationalPhoneNumber,\
internationalPhoneNumber,rating,userRatingCount,priceLevel,websiteUri,\
currentOpeningHours.openNow,regularOpeningHours.weekdayDescriptions";

/// Extended attributes for exactly one place, looked up by id.
pub async fn run(args: &Value, places: &PlacesClient) -> Result<String, String> {
    let place_id = args
        .get("placeId")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing required argument: placeId".to_string())?;

    let payload = places.place(place_id, DETAILS_FIELD_MASK).await?;
    let details = parse_details(&payload)?;

    serde_json::to_string(&details).map_err(|e| format!("Failed to serialize result: {}", e))
}

pub fn parse_details(payload: &Value) -> Result<PlaceDetails, String> {
    let id = payload
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Place details response missing id".to_string())?
        .to_string();
    let name = payload
        .pointer("/displayName/text")
        .and_then(|v| v.as_str())
        .unwrap_or("Unnamed place")
        .to_string();

    // Prefer the national number; fall back to international.
    let phone = payload
        .get("nationalPhoneNumber")
        .or_else(|| payload.get("internationalPhoneNumber"))
        .and_then(|v| v.as_str())
        .map(String::from);

    let weekday_hours = payload
        .pointer("/regularOpeningHours/weekdayDescriptions")
        .and_then(|v| v.as_array())
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e.as_str())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Ok(PlaceDetails {
        id,
        name,
        formatted_address: payload
            .get("formattedAddress")
            .and_then(|v| v.as_str())
            .map(String::from),
        phone,
        rating: payload.get("rating").and_then(|v| v.as_f64()),
        user_rating_count: payload
            .get("userRatingCount")
            .and_then(|v| v.as_u64())
            .map(|c| c as u32),
        price_level: payload
            .get("priceLevel")
            .and_then(|v| v.as_str())
            .map(String::from),
        website: payload
            .get("websiteUri")
            .and_then(|v| v.as_str())
            .map(String::from),
        open_now: payload
            .pointer("/currentOpeningHours/openNow")
            .and_then(|v| v.as_bool()),
        weekday_hours,
    })
}
