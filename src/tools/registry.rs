use async_trait::async_trait;
use jsonschema::{Draft, JSONSchema};
use serde_json::{json, Value};

use crate::config::SearchConfig;
use crate::tools::places::PlacesClient;
use crate::tools::{details, geocode, nearby, text_search};

/// What the orchestration loop needs from the tool layer: advertise the
/// declarations and execute one call by name. `ToolRegistry` is the real
/// implementation; tests drive the loop with a scripted one.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    fn declarations(&self) -> Vec<Value>;
    async fn dispatch(&self, name: &str, raw_arguments: &str) -> Result<String, String>;
}

/// Place types the search schemas advertise to the model. The provider
/// rejects anything outside its type table, so the enum keeps the model from
/// inventing categories.
pub const PLACE_TYPES: &[&str] = &[
    "adventure_sports_center",
    "airport",
    "athletic_field",
    "atm",
    "bakery",
    "bank",
    "bar",
    "barbecue_area",
    "barbecue_restaurant",
    "beach",
    "breakfast_restaurant",
    "buffet_restaurant",
    "bus_station",
    "bus_stop",
    "cafe",
    "campground",
    "camping_cabin",
    "childrens_camp",
    "chinese_restaurant",
    "coffee_shop",
    "cottage",
    "cycling_park",
    "dessert_restaurant",
    "drugstore",
    "fast_food_restaurant",
    "fire_station",
    "gift_shop",
    "gym",
    "hair_salon",
    "hamburger_restaurant",
    "hiking_area",
    "hospital",
    "ice_cream_shop",
    "italian_restaurant",
    "japanese_restaurant",
    "laundry",
    "meal_delivery",
    "meal_takeaway",
    "mediterranean_restaurant",
    "park_and_ride",
    "pharmacy",
    "picnic_ground",
    "pizza_restaurant",
    "playground",
    "police",
    "pub",
    "public_bath",
    "public_bathroom",
    "restaurant",
    "rv_park",
    "seafood_restaurant",
    "stable",
    "state_park",
    "steak_house",
    "swimming_pool",
    "taxi_stand",
    "tourist_attraction",
    "vegetarian_restaurant",
    "visitor_center",
    "water_park",
];

const PRICE_LEVELS: &[&str] = &[
    "PRICE_LEVEL_UNSPECIFIED",
    "PRICE_LEVEL_FREE",
    "PRICE_LEVEL_INEXPENSIVE",
    "PRICE_LEVEL_MODERATE",
    "PRICE_LEVEL_EXPENSIVE",
    "PRICE_LEVEL_VERY_EXPENSIVE",
];

/// The closed set of tools this assistant can execute. Dispatch is total
/// over this enumeration; a name outside it is an argument-level error that
/// flows back to the model, never a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Geocode,
    ReverseGeocode,
    NearbySearch,
    TextSearch,
    PlaceDetails,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Geocode,
        ToolKind::ReverseGeocode,
        ToolKind::NearbySearch,
        ToolKind::TextSearch,
        ToolKind::PlaceDetails,
    ];

    /// Wire name the model calls the tool by.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Geocode => "geocodeAddress",
            ToolKind::ReverseGeocode => "reverseGeocode",
            ToolKind::NearbySearch => "nearbySearch",
            ToolKind::TextSearch => "textSearch",
            ToolKind::PlaceDetails => "getPlaceDetails",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolKind::Geocode => {
                "Convert an address or place name into coordinates, a formatted address, and a place ID"
            }
            ToolKind::ReverseGeocode => {
                "Convert a latitude/longitude pair into the nearest formatted address"
            }
            ToolKind::NearbySearch => {
                "Search for places of a given type near a specific coordinate"
            }
            ToolKind::TextSearch => {
                "Search for places matching a free-text query, optionally biased toward a coordinate"
            }
            ToolKind::PlaceDetails => {
                "Get details (hours, phone, rating, price, website) for one place by its place ID"
            }
        }
    }

    /// JSON-schema parameter declaration, used both for advertising the tool
    /// to the model and for validating its arguments before dispatch.
    pub fn parameters_schema(self) -> Value {
        match self {
            ToolKind::Geocode => json!({
                "type": "object",
                "properties": {
                    "address": {
                        "type": "string",
                        "description": "The address or place name to geocode (e.g., 'Rua de Santa Catarina, Porto')"
                    }
                },
                "required": ["address"],
                "additionalProperties": false
            }),
            ToolKind::ReverseGeocode => json!({
                "type": "object",
                "properties": {
                    "latitude": {
                        "type": "number",
                        "minimum": -90,
                        "maximum": 90,
                        "description": "Latitude of the point to resolve"
                    },
                    "longitude": {
                        "type": "number",
                        "minimum": -180,
                        "maximum": 180,
                        "description": "Longitude of the point to resolve"
                    }
                },
                "required": ["latitude", "longitude"],
                "additionalProperties": false
            }),
            ToolKind::NearbySearch => json!({
                "type": "object",
                "properties": {
                    "latitude": {
                        "type": "number",
                        "minimum": -90,
                        "maximum": 90,
                        "description": "Latitude of the location to search near"
                    },
                    "longitude": {
                        "type": "number",
                        "minimum": -180,
                        "maximum": 180,
                        "description": "Longitude of the location to search near"
                    },
                    "radius": {
                        "type": "number",
                        "minimum": 1,
                        "maximum": 50000,
                        "description": "Optional search radius in meters"
                    },
                    "placeType": {
                        "type": "string",
                        "enum": PLACE_TYPES,
                        "description": "Type of place to search for"
                    },
                    "maxResults": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 20,
                        "description": "Optional maximum number of results to return"
                    },
                    "rankBy": {
                        "type": "string",
                        "enum": ["DISTANCE", "POPULARITY"],
                        "description": "Optional ranking mode for the results"
                    },
                    "language": {
                        "type": "string",
                        "description": "Language code for results (e.g., en, pt-PT)"
                    }
                },
                "required": ["latitude", "longitude"],
                "additionalProperties": false
            }),
            ToolKind::TextSearch => json!({
                "type": "object",
                "properties": {
                    "textQuery": {
                        "type": "string",
                        "description": "Text query to search for (e.g., 'sushi restaurants in Ermesinde')"
                    },
                    "latitude": {
                        "type": "number",
                        "minimum": -90,
                        "maximum": 90,
                        "description": "Optional latitude to bias results toward"
                    },
                    "longitude": {
                        "type": "number",
                        "minimum": -180,
                        "maximum": 180,
                        "description": "Optional longitude to bias results toward"
                    },
                    "radius": {
                        "type": "number",
                        "minimum": 1,
                        "maximum": 50000,
                        "description": "Optional bias radius in meters"
                    },
                    "includedType": {
                        "type": "string",
                        "enum": PLACE_TYPES,
                        "description": "Optional type of place to restrict results to"
                    },
                    "maxResultCount": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 20,
                        "description": "Optional maximum number of results to return"
                    },
                    "rankPreference": {
                        "type": "string",
                        "enum": ["RELEVANCE", "DISTANCE"],
                        "description": "Optional preference for ranking results"
                    },
                    "languageCode": {
                        "type": "string",
                        "description": "Language code for results (e.g., en, pt-PT)"
                    },
                    "minRating": {
                        "type": "number",
                        "minimum": 1.0,
                        "maximum": 5.0,
                        "description": "Optional minimum rating for places to be included"
                    },
                    "openNow": {
                        "type": "boolean",
                        "description": "Optional: only include currently open places"
                    },
                    "priceLevels": {
                        "type": "array",
                        "items": { "type": "string", "enum": PRICE_LEVELS },
                        "description": "Optional price-level filter"
                    }
                },
                "required": ["textQuery"],
                "additionalProperties": false
            }),
            ToolKind::PlaceDetails => json!({
                "type": "object",
                "properties": {
                    "placeId": {
                        "type": "string",
                        "description": "The place ID of the location to get details about"
                    }
                },
                "required": ["placeId"],
                "additionalProperties": false
            }),
        }
    }
}

/// Binds the tool enumeration to the provider client and the configured
/// defaults. Read-only after startup.
pub struct ToolRegistry {
    places: PlacesClient,
    defaults: SearchConfig,
}

impl ToolRegistry {
    pub fn new(places: PlacesClient, defaults: SearchConfig) -> Self {
        Self { places, defaults }
    }

    pub fn validate_arguments(&self, kind: ToolKind, arguments: &Value) -> Result<(), String> {
        let schema = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&kind.parameters_schema())
            .map_err(|e| format!("Invalid tool schema: {}", e))?;

        if let Err(errors) = schema.validate(arguments) {
            let messages: Vec<String> = errors
                .map(|e| format!("{}: {}", e.instance_path, e))
                .collect();
            return Err(messages.join("; "));
        }

        Ok(())
    }
}

#[async_trait]
impl ToolExecutor for ToolRegistry {
    /// Tool declarations in the chat-completions `tools` format.
    fn declarations(&self) -> Vec<Value> {
        ToolKind::ALL
            .into_iter()
            .map(|kind| {
                json!({
                    "type": "function",
                    "function": {
                        "name": kind.name(),
                        "description": kind.description(),
                        "parameters": kind.parameters_schema(),
                    }
                })
            })
            .collect()
    }

    /// Execute one tool call end to end: resolve the name, parse the raw
    /// argument JSON, validate against the schema, run the adapter. Every
    /// failure mode is a descriptive string destined for a tool-role error
    /// payload.
    async fn dispatch(&self, name: &str, raw_arguments: &str) -> Result<String, String> {
        let kind = ToolKind::from_name(name)
            .ok_or_else(|| format!("Tool '{}' is not registered", name))?;

        let arguments: Value = serde_json::from_str(raw_arguments)
            .map_err(|e| format!("Failed to parse arguments for tool '{}': {}", name, e))?;

        self.validate_arguments(kind, &arguments)?;

        match kind {
            ToolKind::Geocode => geocode::run(&arguments, &self.places).await,
            ToolKind::ReverseGeocode => geocode::run_reverse(&arguments, &self.places).await,
            ToolKind::NearbySearch => {
                nearby::run(&arguments, &self.places, &self.defaults).await
            }
            ToolKind::TextSearch => {
                text_search::run(&arguments, &self.places, &self.defaults).await
            }
            ToolKind::PlaceDetails => details::run(&arguments, &self.places).await,
        }
    }
}
