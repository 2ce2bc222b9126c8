//! Ollama response structures
//!
//! The server's schemas are not contractually fixed, so every view keeps
//! unrecognized keys in an `extra` map instead of dropping them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `api/generate` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateCompletion {
    pub model: String,
    pub created_at: Option<DateTime<Utc>>,
    /// Generated text
    pub response: String,
    /// Encoding of the conversation, pass back for follow-up prompts
    pub context: Vec<i64>,
    pub done: bool,
    /// Durations are in nanoseconds
    pub total_duration: u64,
    pub load_duration: u64,
    pub sample_count: u64,
    pub sample_duration: u64,
    pub prompt_eval_count: u64,
    pub prompt_eval_duration: u64,
    pub eval_count: u64,
    pub eval_duration: u64,
    /// Fields the server sent that are not listed above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GenerateCompletion {
    /// Look up an unrecognized field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Generated tokens per second, when the server reported eval timings
    pub fn tokens_per_second(&self) -> Option<f64> {
        if self.eval_duration == 0 {
            return None;
        }
        Some(self.eval_count as f64 / self.eval_duration as f64 * 1e9)
    }
}

/// `api/tags` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub models: Vec<ModelSummary>,
}

impl ModelList {
    pub fn names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name.as_str()).collect()
    }
}

/// One locally available model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSummary {
    pub name: String,
    pub modified_at: Option<DateTime<Utc>>,
    /// Size on disk in bytes
    pub size: u64,
    pub digest: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `api/show` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelDetails {
    pub license: Option<String>,
    pub modelfile: Option<String>,
    pub parameters: Option<String>,
    pub template: Option<String>,
    pub system: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
