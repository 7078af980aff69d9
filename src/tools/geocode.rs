use serde_json::Value;

use crate::models::{GeocodeResult, LatLng, ReverseGeocodeResult};
use crate::tools::places::PlacesClient;

/// Resolve a free-text address (or a place name) to coordinates.
pub async fn run(args: &Value, places: &PlacesClient) -> Result<String, String> {
    let address = args
        .get("address")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing required argument: address".to_string())?;

    let payload = places
        .geocode(&[("address", address.to_string())])
        .await?;
    let result = parse_geocode_response(&payload)?;

    serde_json::to_string(&result).map_err(|e| format!("Failed to serialize result: {}", e))
}

/// Resolve coordinates back to a formatted address.
pub async fn run_reverse(args: &Value, places: &PlacesClient) -> Result<String, String> {
    let latitude = args
        .get("latitude")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| "Missing required argument: latitude".to_string())?;
    let longitude = args
        .get("longitude")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| "Missing required argument: longitude".to_string())?;

    let payload = places
        .geocode(&[("latlng", format!("{},{}", latitude, longitude))])
        .await?;
    let result = parse_reverse_response(&payload)?;

    serde_json::to_string(&result).map_err(|e| format!("Failed to serialize result: {}", e))
}

/// The Geocoding API reports failures in-band through `status`; anything but
/// "OK" means no usable result.
pub fn parse_geocode_response(payload: &Value) -> Result<GeocodeResult, String> {
    let first = check_status_and_first_result(payload)?;

    let latitude = first
        .pointer("/geometry/location/lat")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| "Geocoding result missing latitude".to_string())?;
    let longitude = first
        .pointer("/geometry/location/lng")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| "Geocoding result missing longitude".to_string())?;

    Ok(GeocodeResult {
        coordinates: LatLng {
            latitude,
            longitude,
        },
        formatted_address: formatted_address(first)?,
        place_id: place_id(first)?,
    })
}

pub fn parse_reverse_response(payload: &Value) -> Result<ReverseGeocodeResult, String> {
    let first = check_status_and_first_result(payload)?;

    Ok(ReverseGeocodeResult {
        formatted_address: formatted_address(first)?,
        place_id: place_id(first)?,
    })
}

fn check_status_and_first_result(payload: &Value) -> Result<&Value, String> {
    let status = payload
        .get("status")
        .and_then(|s| s.as_str())
        .unwrap_or("UNKNOWN");
    if status != "OK" {
        return Err(format!("Geocoding failed: {}", status));
    }

    payload
        .get("results")
        .and_then(|r| r.as_array())
        .and_then(|r| r.first())
        .ok_or_else(|| "Geocoding returned an empty result list".to_string())
}

fn formatted_address(result: &Value) -> Result<String, String> {
    result
        .get("formatted_address")
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| "Geocoding result missing formatted_address".to_string())
}

fn place_id(result: &Value) -> Result<String, String> {
    result
        .get("place_id")
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| "Geocoding result missing place_id".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_status_yields_coordinates() {
        let payload = json!({
            "status": "OK",
            "results": [{
                "geometry": { "location": { "lat": 41.21, "lng": -8.55 } },
                "formatted_address": "Ermesinde, Portugal",
                "place_id": "ChIJermesinde"
            }]
        });

        let result = parse_geocode_response(&payload).unwrap();
        assert_eq!(result.coordinates.latitude, 41.21);
        assert_eq!(result.place_id, "ChIJermesinde");
    }

    #[test]
    fn zero_results_status_is_an_error() {
        let payload = json!({ "status": "ZERO_RESULTS", "results": [] });
        let err = parse_geocode_response(&payload).unwrap_err();
        assert!(err.contains("ZERO_RESULTS"));
    }
}
