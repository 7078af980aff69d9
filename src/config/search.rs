use serde::{Deserialize, Serialize};

use crate::config::defaults::{
    default_bias_radius_m, default_language, default_max_results, default_min_rating,
    default_open_now, default_radius_m,
};

/// Defaults applied when the model omits optional search arguments. These are
/// read-only process-wide state after startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Nearby-search radius in meters.
    #[serde(default = "default_radius_m")]
    pub radius_m: f64,
    /// Location-bias radius in meters for text search.
    #[serde(default = "default_bias_radius_m")]
    pub bias_radius_m: f64,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// BCP-47 language code for provider results.
    #[serde(default = "default_language")]
    pub language: String,
    /// Rating floor applied by text search.
    #[serde(default = "default_min_rating")]
    pub min_rating: f64,
    /// Whether text search only returns currently open places.
    #[serde(default = "default_open_now")]
    pub open_now: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius_m: default_radius_m(),
            bias_radius_m: default_bias_radius_m(),
            max_results: default_max_results(),
            language: default_language(),
            min_rating: default_min_rating(),
            open_now: default_open_now(),
        }
    }
}
