use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// One place as returned by the search adapters, normalized away from the
/// provider's nested `displayName.text` / `location` shapes.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_rating_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
}

impl Place {
    /// One-line summary handed to the model inside the tool payload, so it
    /// can cite rating and open/closed state without digging through fields.
    pub fn summary(&self) -> String {
        let mut parts = vec![self.name.clone()];
        if let Some(address) = &self.formatted_address {
            parts.push(address.clone());
        }
        if let Some(rating) = self.rating {
            let count = self
                .user_rating_count
                .map(|c| format!(" ({} reviews)", c))
                .unwrap_or_default();
            parts.push(format!("rated {}/5{}", rating, count));
        }
        match self.open_now {
            Some(true) => parts.push("open now".to_string()),
            Some(false) => parts.push("closed".to_string()),
            None => {}
        }
        parts.join(" | ")
    }
}

/// Normalized search-adapter result: the shape the orchestrator serializes
/// into tool messages and the marker projection scans for.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PlaceList {
    pub places: Vec<Place>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PlaceList {
    pub fn empty_with_note(note: impl Into<String>) -> Self {
        Self {
            places: Vec::new(),
            note: Some(note.into()),
        }
    }
}

/// Extended attributes for exactly one place.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PlaceDetails {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_rating_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub weekday_hours: Vec<String>,
}

/// Forward-geocoding result: one address resolved to coordinates.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GeocodeResult {
    pub coordinates: LatLng,
    pub formatted_address: String,
    pub place_id: String,
}

/// Reverse-geocoding result: coordinates resolved to an address.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReverseGeocodeResult {
    pub formatted_address: String,
    pub place_id: String,
}
