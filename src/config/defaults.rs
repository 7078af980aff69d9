pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that can search for places and provide information.";

pub fn default_request_timeout() -> u64 {
    30
}

pub fn default_max_tool_rounds() -> usize {
    8
}

pub fn default_radius_m() -> f64 {
    5000.0
}

pub fn default_bias_radius_m() -> f64 {
    1000.0
}

pub fn default_max_results() -> u32 {
    5
}

pub fn default_language() -> String {
    "en".to_string()
}

pub fn default_min_rating() -> f64 {
    3.0
}

pub fn default_open_now() -> bool {
    true
}
