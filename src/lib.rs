//! Ollama REST Client Library
//!
//! Wraps the Ollama server's REST endpoints behind method calls with uniform
//! results and errors

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use models::{ApiResult, GenerateCompletion, GenerateRequest};
pub use services::{OllamaClient, OllamaClientBuilder, RestAdapter};
pub use utils::error::{ClientError, ClientResult};
pub use utils::logging::{RequestLogger, TracingLogger};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
