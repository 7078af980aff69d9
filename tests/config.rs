use mapchat::cli::Args;
use mapchat::config::{Config, FileConfig, SearchConfig};
use std::fs;
use tempfile::TempDir;

fn bare_args() -> Args {
    Args {
        model: None,
        api_endpoint: None,
        max_tool_rounds: None,
        language: None,
        verbose: false,
        query: Vec::new(),
    }
}

#[test]
fn missing_api_keys_refuse_startup() {
    // single test owns these variables; no other test reads the environment
    std::env::remove_var("OPENAI_API_KEY");
    std::env::remove_var("GOOGLE_MAPS_API_KEY");

    let err = Config::from_env_and_args(&bare_args()).unwrap_err();
    assert!(err.contains("OPENAI_API_KEY"));

    std::env::set_var("OPENAI_API_KEY", "test-key");
    let err = Config::from_env_and_args(&bare_args()).unwrap_err();
    assert!(err.contains("GOOGLE_MAPS_API_KEY"));
    std::env::remove_var("OPENAI_API_KEY");
}

#[test]
fn search_defaults_match_the_documented_values() {
    let search = SearchConfig::default();
    assert_eq!(search.radius_m, 5000.0);
    assert_eq!(search.bias_radius_m, 1000.0);
    assert_eq!(search.max_results, 5);
    assert_eq!(search.language, "en");
    assert_eq!(search.min_rating, 3.0);
    assert!(search.open_now);
}

#[test]
fn yaml_config_file_overrides_sections_it_names() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("mapchat.yaml");
    fs::write(
        &path,
        r#"
model:
  default_model: gpt-4o
session:
  max_tool_rounds: 4
search:
  language: pt-PT
  max_results: 10
"#,
    )
    .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let config: FileConfig = serde_yaml::from_str(&contents).unwrap();

    assert_eq!(config.model.default_model.as_deref(), Some("gpt-4o"));
    assert_eq!(config.session.max_tool_rounds, Some(4));
    assert_eq!(config.search.language, "pt-PT");
    assert_eq!(config.search.max_results, 10);
    // untouched sections keep their defaults
    assert_eq!(config.search.min_rating, 3.0);
    assert!(config.api.endpoint.is_none());
}

#[test]
fn empty_sections_fall_back_to_defaults() {
    let config: FileConfig = serde_yaml::from_str("{}").unwrap();
    assert!(config.model.default_model.is_none());
    assert!(config.session.verbose.is_none());
    assert_eq!(config.search.radius_m, 5000.0);
}
