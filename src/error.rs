use std::fmt;

#[derive(Debug)]
pub enum MapChatError {
    ApiError {
        status: u16,
        message: String,
    },
    ConfigError(String),
    /// The model kept requesting tool calls past the configured round cap.
    ToolRoundsExceeded(usize),
    NetworkError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
    Other(String),
}

impl fmt::Display for MapChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapChatError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            MapChatError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MapChatError::ToolRoundsExceeded(rounds) => {
                write!(f, "Tool-call rounds exceeded limit of {}", rounds)
            }
            MapChatError::NetworkError(e) => write!(f, "Network error: {}", e),
            MapChatError::IoError(e) => write!(f, "IO error: {}", e),
            MapChatError::JsonError(e) => write!(f, "JSON error: {}", e),
            MapChatError::YamlError(e) => write!(f, "YAML error: {}", e),
            MapChatError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MapChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapChatError::NetworkError(e) => Some(e),
            MapChatError::IoError(e) => Some(e),
            MapChatError::JsonError(e) => Some(e),
            MapChatError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MapChatError {
    fn from(err: reqwest::Error) -> Self {
        MapChatError::NetworkError(err)
    }
}

impl From<std::io::Error> for MapChatError {
    fn from(err: std::io::Error) -> Self {
        MapChatError::IoError(err)
    }
}

impl From<serde_json::Error> for MapChatError {
    fn from(err: serde_json::Error) -> Self {
        MapChatError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for MapChatError {
    fn from(err: serde_yaml::Error) -> Self {
        MapChatError::YamlError(err)
    }
}

impl From<anyhow::Error> for MapChatError {
    fn from(err: anyhow::Error) -> Self {
        MapChatError::Other(err.to_string())
    }
}

impl From<String> for MapChatError {
    fn from(msg: String) -> Self {
        MapChatError::Other(msg)
    }
}

pub type Result<T> = std::result::Result<T, MapChatError>;
