mod api;
mod defaults;
mod search;

use crate::cli::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub use api::ApiConfig;
pub use defaults::{DEFAULT_API_ENDPOINT, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT};
pub use search::SearchConfig;

use crate::config::defaults::{default_max_tool_rounds, default_request_timeout};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
    #[serde(default)]
    pub max_tool_rounds: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub default_model: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

#[derive(Debug)]
pub struct Config {
    pub openai_api_key: String,
    pub maps_api_key: String,
    pub api_endpoint: String,
    pub model: String,
    pub system_prompt: String,
    pub request_timeout: u64,
    pub verbose: bool,
    pub max_tool_rounds: usize,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Resolve the full configuration: CLI args > env vars > config file >
    /// defaults. Both API keys are required up front; nothing network-facing
    /// runs without them.
    pub fn from_env_and_args(args: &Args) -> Result<Self, String> {
        let file_config = FileConfig::load().map_err(|e| e.to_string())?;

        let openai_api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| "OPENAI_API_KEY environment variable not set".to_string())?;
        let maps_api_key = env::var("GOOGLE_MAPS_API_KEY")
            .map_err(|_| "GOOGLE_MAPS_API_KEY environment variable not set".to_string())?;

        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| env::var("MAPCHAT_API_ENDPOINT").ok())
            .or(file_config.api.endpoint.clone())
            .map(normalize_endpoint)
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        let model = args
            .model
            .clone()
            .or_else(|| env::var("MAPCHAT_MODEL").ok())
            .or(file_config.model.default_model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let system_prompt = env::var("MAPCHAT_SYSTEM_PROMPT")
            .ok()
            .or(file_config.model.system_prompt.clone())
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

        let request_timeout = env::var("MAPCHAT_REQUEST_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .or(file_config.api.request_timeout)
            .unwrap_or_else(default_request_timeout);

        let verbose = args.verbose
            || env::var("MAPCHAT_VERBOSE")
                .ok()
                .map(|v| v == "true")
                .or(file_config.session.verbose)
                .unwrap_or(false);

        let max_tool_rounds = args
            .max_tool_rounds
            .or_else(|| {
                env::var("MAPCHAT_MAX_TOOL_ROUNDS")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
            })
            .or(file_config.session.max_tool_rounds)
            .unwrap_or_else(default_max_tool_rounds);
        if max_tool_rounds == 0 {
            return Err("max_tool_rounds must be at least 1".to_string());
        }

        let mut search = file_config.search;
        if let Some(language) = args.language.clone() {
            search.language = language;
        }

        Ok(Config {
            openai_api_key,
            maps_api_key,
            api_endpoint,
            model,
            system_prompt,
            request_timeout,
            verbose,
            max_tool_rounds,
            search,
        })
    }

    /// System prompt with the current date prepended, so "open now" style
    /// questions have a point of reference.
    pub fn dated_system_prompt(&self) -> String {
        format!(
            "Today's date is {}.\n\n{}",
            chrono::Local::now().format("%A, %B %d, %Y"),
            self.system_prompt
        )
    }
}

/// Accept a bare base URL, a `/v1` base, or a full chat-completions URL.
fn normalize_endpoint(endpoint: String) -> String {
    if endpoint.ends_with("/chat/completions") {
        endpoint
    } else if endpoint.ends_with("/v1") {
        format!("{}/chat/completions", endpoint)
    } else if endpoint.ends_with("/v1/") {
        format!("{}chat/completions", endpoint)
    } else {
        format!("{}/v1/chat/completions", endpoint.trim_end_matches('/'))
    }
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        for path in Self::config_paths() {
            if path.exists() {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

                // YAML first; JSON accepted for compatibility
                let config: FileConfig = if matches!(
                    path.extension().and_then(|s| s.to_str()),
                    Some("yaml") | Some("yml")
                ) {
                    serde_yaml::from_str(&contents).with_context(|| {
                        format!("Failed to parse YAML config file: {}", path.display())
                    })?
                } else {
                    serde_json::from_str(&contents).with_context(|| {
                        format!("Failed to parse JSON config file: {}", path.display())
                    })?
                };

                return Ok(config);
            }
        }

        Ok(FileConfig::default())
    }

    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory first, so a project-local file wins
        paths.push(PathBuf::from(".mapchat.yaml"));
        paths.push(PathBuf::from(".mapchat.yml"));
        paths.push(PathBuf::from(".mapchat.json"));

        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("mapchat");
            paths.push(config_dir.join("mapchat.yaml"));
            paths.push(config_dir.join("mapchat.yml"));
            paths.push(config_dir.join("mapchat.json"));
        }

        paths
    }
}
