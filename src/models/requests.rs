//! Ollama request payloads
//!
//! Optional fields serialize as explicit `null`s; the adapter decides whether they go on the wire

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `api/generate` request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model name
    pub model: String,
    /// Prompt text
    pub prompt: String,
    /// Response format, e.g. `json`
    pub format: Option<String>,
    /// Model parameters such as temperature
    pub options: Option<Value>,
    /// System prompt override
    pub system: Option<String>,
    /// Prompt template override
    pub template: Option<String>,
    /// Context returned by a previous completion
    pub context: Option<Vec<i64>>,
    /// Ask the server to stream; the reply is still read as one JSON value
    pub stream: bool,
    /// Send the prompt without templating
    pub raw: bool,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }

    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Continue the conversation of an earlier completion
    pub fn context(mut self, context: Vec<i64>) -> Self {
        self.context = Some(context);
        self
    }

    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }
}

/// `api/create` request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateModelRequest {
    /// Name of the model to create
    pub name: String,
    /// Contents of the Modelfile
    pub modelfile: Option<String>,
    pub stream: bool,
    /// Path to a Modelfile on the server
    pub path: Option<String>,
}

impl CreateModelRequest {
    /// Create from Modelfile contents sent inline
    pub fn from_modelfile(name: impl Into<String>, modelfile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modelfile: Some(modelfile.into()),
            ..Default::default()
        }
    }

    /// Create from a Modelfile already on the server
    pub fn from_path(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: Some(path.into()),
            ..Default::default()
        }
    }
}

/// Body for endpoints addressing one model by name (`api/show`, `api/delete`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelNameRequest {
    pub name: String,
}

/// `api/copy` request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CopyModelRequest {
    pub source: String,
    pub destination: String,
}

/// `api/pull` request body
///
/// `insecure` and `stream` are accepted but never sent to the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PullModelRequest {
    pub name: String,
    #[serde(skip)]
    pub insecure: bool,
    #[serde(skip)]
    pub stream: bool,
}
