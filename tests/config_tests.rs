//! Configuration module unit tests

use ollama_client::config::{ClientConfig, LoggingConfig, Settings};
use ollama_client::{ClientError, OllamaClient};
use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn settings_from(pairs: &[(&str, &str)]) -> anyhow::Result<Settings> {
    let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
    Settings::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
}

#[test]
fn test_settings_creation_with_valid_env() {
    let settings = settings_from(&[
        ("OLLAMA_BASE_URL", "http://gpu-box:11434"),
        ("OLLAMA_TIMEOUT", "120"),
        ("OLLAMA_INCLUDE_NULL_FIELDS", "false"),
        ("RUST_LOG", "debug"),
        ("LOG_FORMAT", "json"),
    ])
    .unwrap();

    assert_eq!(settings.client.base_url, "http://gpu-box:11434");
    assert_eq!(settings.client.timeout, Some(120));
    assert_eq!(settings.client.timeout_duration(), Some(Duration::from_secs(120)));
    assert!(!settings.client.include_null_fields);
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.logging.format, "json");
}

#[test]
fn test_settings_without_env_use_local_server_and_no_timeout() {
    let settings = settings_from(&[]).unwrap();

    assert_eq!(settings.client.base_url, "http://localhost:11434");
    assert_eq!(settings.client.timeout, None);
    assert!(settings.client.include_null_fields);
}

#[test]
fn test_empty_timeout_means_no_timeout() {
    let settings = settings_from(&[("OLLAMA_TIMEOUT", "")]).unwrap();
    assert_eq!(settings.client.timeout, None);
}

#[test]
fn test_invalid_timeout() {
    assert!(settings_from(&[("OLLAMA_TIMEOUT", "soon")]).is_err());
    assert!(settings_from(&[("OLLAMA_TIMEOUT", "0")]).is_err());
}

#[test]
fn test_invalid_base_url() {
    assert!(settings_from(&[("OLLAMA_BASE_URL", "localhost")]).is_err());
    assert!(settings_from(&[("OLLAMA_BASE_URL", "ftp://localhost:11434")]).is_err());
}

#[test]
fn test_invalid_logging() {
    assert!(settings_from(&[("RUST_LOG", "verbose")]).is_err());
    assert!(settings_from(&[("LOG_FORMAT", "xml")]).is_err());
}

#[test]
fn test_invalid_null_fields_flag() {
    assert!(settings_from(&[("OLLAMA_INCLUDE_NULL_FIELDS", "sometimes")]).is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "client": {{
                "baseUrl": "https://ollama.internal:443",
                "timeout": 15,
                "includeNullFields": false
            }},
            "logging": {{"level": "warn", "format": "json"}}
        }}"#
    )
    .unwrap();

    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(
        settings,
        Settings {
            client: ClientConfig {
                base_url: "https://ollama.internal:443".to_string(),
                timeout: Some(15),
                include_null_fields: false,
                ..Default::default()
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                format: "json".to_string(),
            },
        }
    );
}

#[test]
fn test_load_missing_file() {
    let result = Settings::load(std::path::Path::new("/nonexistent/ollama-client.json"));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"client": {{"baseUrl": "not a url"}}}}"#).unwrap();
    assert!(Settings::load(file.path()).is_err());
}

#[test]
fn test_client_from_default_settings_targets_local_server() {
    let client = OllamaClient::from_settings(&Settings::default()).unwrap();
    assert_eq!(
        client.adapter().endpoint_url("api/tags").unwrap().as_str(),
        "http://localhost:11434/api/tags"
    );
}

#[test]
fn test_client_from_invalid_settings() {
    let mut settings = Settings::default();
    settings.logging.level = "loud".to_string();

    let err = OllamaClient::from_settings(&settings).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_init_logging_installs_subscriber() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        format: "json".to_string(),
    };
    assert!(ollama_client::utils::logging::init_logging(&config).is_ok());
}
