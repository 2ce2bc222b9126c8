//! Configuration management module
//!
//! Responsible for loading client configuration from environment variables or a JSON file

pub mod settings;

pub use settings::{ClientConfig, LoggingConfig, Settings, DEFAULT_BASE_URL};
