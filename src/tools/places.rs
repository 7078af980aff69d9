use colored::*;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::models::{LatLng, Place, PlaceList};

const PLACES_BASE_URL: &str = "https://places.googleapis.com/v1";
const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Shared HTTP plumbing for the Google Places API v1 and the Geocoding API.
/// Every adapter call maps to exactly one request here. Errors are returned
/// as plain strings: at this layer everything is a recoverable tool failure
/// that ends up in a tool-role payload, never a process-level error.
pub struct PlacesClient {
    client: reqwest::Client,
    api_key: String,
    verbose: bool,
}

impl PlacesClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            client,
            api_key: config.maps_api_key.clone(),
            verbose: config.verbose,
        })
    }

    /// POST to a Places v1 search method (`places:searchNearby` or
    /// `places:searchText`) with the key and field-mask headers the API
    /// expects.
    pub async fn search(
        &self,
        method: &str,
        body: &Value,
        field_mask: &str,
    ) -> std::result::Result<Value, String> {
        let url = format!("{}/places:{}", PLACES_BASE_URL, method);
        if self.verbose {
            eprintln!("{}", format!("[tools] POST {}", url).dimmed());
        }

        let response = self
            .client
            .post(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", field_mask)
            .json(body)
            .send()
            .await
            .map_err(|e| format!("{} request failed: {}", method, e))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| format!("{} returned unreadable body: {}", method, e))?;

        if !status.is_success() {
            return Err(format!(
                "{} failed with HTTP {}: {}",
                method,
                status.as_u16(),
                provider_error_message(&payload)
            ));
        }

        Ok(payload)
    }

    /// GET one place resource by id.
    pub async fn place(
        &self,
        place_id: &str,
        field_mask: &str,
    ) -> std::result::Result<Value, String> {
        let url = format!("{}/places/{}", PLACES_BASE_URL, place_id);
        if self.verbose {
            eprintln!("{}", format!("[tools] GET {}", url).dimmed());
        }

        let response = self
            .client
            .get(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", field_mask)
            .send()
            .await
            .map_err(|e| format!("Place details request failed: {}", e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(
                "Place ID not found or expired. Search for the place again to get a fresh ID."
                    .to_string(),
            );
        }

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| format!("Place details returned unreadable body: {}", e))?;

        if !status.is_success() {
            return Err(format!(
                "Place details failed with HTTP {}: {}",
                status.as_u16(),
                provider_error_message(&payload)
            ));
        }

        Ok(payload)
    }

    /// GET against the Geocoding API with arbitrary query parameters
    /// (`address=...` forward, `latlng=...` reverse). The key travels as a
    /// query parameter on this older API.
    pub async fn geocode(
        &self,
        query: &[(&str, String)],
    ) -> std::result::Result<Value, String> {
        if self.verbose {
            eprintln!("{}", format!("[tools] GET {}", GEOCODE_URL).dimmed());
        }

        let mut params: Vec<(&str, String)> = query.to_vec();
        params.push(("key", self.api_key.clone()));

        let response = self
            .client
            .get(GEOCODE_URL)
            .query(&params)
            .send()
            .await
            .map_err(|e| format!("Geocoding request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!(
                "Geocoding failed with HTTP {}",
                status.as_u16()
            ));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Geocoding returned unreadable body: {}", e))
    }
}

fn provider_error_message(payload: &Value) -> String {
    payload
        .pointer("/error/message")
        .and_then(|m| m.as_str())
        .unwrap_or("no error detail")
        .to_string()
}

/// Field mask shared by both search adapters; only fields the normalized
/// `Place` carries are requested.
pub const SEARCH_FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,\
places.location,places.rating,places.userRatingCount,places.primaryType,\
places.currentOpeningHours.openNow";

/// Normalize one Places v1 place object. Entries without an id are dropped
/// by the caller; everything else degrades to None.
pub fn parse_place(value: &Value) -> Option<Place> {
    let id = value.get("id").and_then(|v| v.as_str())?.to_string();
    let name = value
        .pointer("/displayName/text")
        .and_then(|v| v.as_str())
        .unwrap_or("Unnamed place")
        .to_string();

    let location = match (
        value.pointer("/location/latitude").and_then(|v| v.as_f64()),
        value.pointer("/location/longitude").and_then(|v| v.as_f64()),
    ) {
        (Some(latitude), Some(longitude)) => Some(LatLng {
            latitude,
            longitude,
        }),
        _ => None,
    };

    Some(Place {
        id,
        name,
        formatted_address: value
            .get("formattedAddress")
            .and_then(|v| v.as_str())
            .map(String::from),
        location,
        rating: value.get("rating").and_then(|v| v.as_f64()),
        user_rating_count: value
            .get("userRatingCount")
            .and_then(|v| v.as_u64())
            .map(|c| c as u32),
        primary_type: value
            .get("primaryType")
            .and_then(|v| v.as_str())
            .map(String::from),
        open_now: value
            .pointer("/currentOpeningHours/openNow")
            .and_then(|v| v.as_bool()),
    })
}

/// Normalize a whole search response. An absent or empty `places` array is a
/// reportable-but-recoverable outcome, not a failure.
pub fn parse_place_list(payload: &Value) -> PlaceList {
    let places: Vec<Place> = payload
        .get("places")
        .and_then(|p| p.as_array())
        .map(|entries| entries.iter().filter_map(parse_place).collect())
        .unwrap_or_default();

    if places.is_empty() {
        PlaceList::empty_with_note("No places found")
    } else {
        PlaceList {
            places,
            note: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_place_with_nested_display_name() {
        let value = json!({
            "id": "abc",
            "displayName": { "text": "Sakurai Sushi Bar", "languageCode": "en" },
            "formattedAddress": "Rua X 1, Porto",
            "location": { "latitude": 41.15, "longitude": -8.61 },
            "rating": 4.6,
            "userRatingCount": 312,
            "primaryType": "japanese_restaurant",
            "currentOpeningHours": { "openNow": true }
        });

        let place = parse_place(&value).unwrap();
        assert_eq!(place.name, "Sakurai Sushi Bar");
        assert_eq!(place.location.unwrap().latitude, 41.15);
        assert_eq!(place.open_now, Some(true));
    }

    #[test]
    fn place_without_id_is_dropped() {
        let payload = json!({
            "places": [
                { "displayName": { "text": "anonymous" } },
                { "id": "keep", "displayName": { "text": "kept" } }
            ]
        });

        let list = parse_place_list(&payload);
        assert_eq!(list.places.len(), 1);
        assert_eq!(list.places[0].id, "keep");
    }

    #[test]
    fn empty_search_response_carries_note() {
        let list = parse_place_list(&json!({}));
        assert!(list.places.is_empty());
        assert_eq!(list.note.as_deref(), Some("No places found"));
    }
}
