//! Ollama API client
//!
//! One method per Ollama endpoint, each delegating to the REST adapter

use crate::config::{Settings, DEFAULT_BASE_URL};
use crate::models::*;
use crate::services::adapter::{AdapterOptions, RestAdapter};
use crate::utils::error::{ClientError, ClientResult};
use crate::utils::logging::{RequestLogger, TracingLogger};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const GENERATE_ENDPOINT: &str = "api/generate";
const TAGS_ENDPOINT: &str = "api/tags";
const CREATE_ENDPOINT: &str = "api/create";
const SHOW_ENDPOINT: &str = "api/show";
const COPY_ENDPOINT: &str = "api/copy";
const DELETE_ENDPOINT: &str = "api/delete";
const PULL_ENDPOINT: &str = "api/pull";

/// Ollama API client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    adapter: RestAdapter,
}

impl OllamaClient {
    /// Create a client for the given server address
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Ok(Self {
            adapter: RestAdapter::new(base_url)?,
        })
    }

    /// Create a client that reports requests to `logger`
    pub fn with_logger(base_url: &str, logger: Arc<dyn RequestLogger>) -> ClientResult<Self> {
        Self::builder().base_url(base_url).logger(logger).build()
    }

    pub fn builder() -> OllamaClientBuilder {
        OllamaClientBuilder::default()
    }

    /// Create a client from loaded settings
    pub fn from_settings(settings: &Settings) -> ClientResult<Self> {
        settings.validate()?;
        debug!("Creating Ollama client for {}", settings.client.base_url);

        Ok(Self {
            adapter: RestAdapter::with_options(
                &settings.client.base_url,
                Arc::new(TracingLogger),
                AdapterOptions::from(&settings.client),
            )?,
        })
    }

    pub fn adapter(&self) -> &RestAdapter {
        &self.adapter
    }

    /// Generate a response for a prompt with the given model
    ///
    /// With `stream` set the server still gets the flag, but the reply is
    /// awaited and decoded as a single JSON value.
    pub async fn generate_completion(&self, request: GenerateRequest) -> ClientResult<ApiResult> {
        self.adapter
            .post(GENERATE_ENDPOINT, Some(to_body(&request)?))
            .await
    }

    /// List models that are available locally
    pub async fn list_models(&self) -> ClientResult<ApiResult> {
        self.adapter.get(TAGS_ENDPOINT).await
    }

    /// Create a model from a Modelfile
    pub async fn create_model(&self, request: CreateModelRequest) -> ClientResult<ApiResult> {
        self.adapter
            .post(CREATE_ENDPOINT, Some(to_body(&request)?))
            .await
    }

    /// Show model details: modelfile, template, parameters, license and system prompt
    pub async fn model_info(&self, name: &str) -> ClientResult<ApiResult> {
        let request = ModelNameRequest {
            name: name.to_string(),
        };
        self.adapter
            .post(SHOW_ENDPOINT, Some(to_body(&request)?))
            .await
    }

    /// Copy a model under a new name on the server
    pub async fn copy_model(&self, source: &str, destination: &str) -> ClientResult<ApiResult> {
        let request = CopyModelRequest {
            source: source.to_string(),
            destination: destination.to_string(),
        };
        self.adapter
            .post(COPY_ENDPOINT, Some(to_body(&request)?))
            .await
    }

    /// Delete a model and its data
    pub async fn delete_model(&self, name: &str) -> ClientResult<ApiResult> {
        let request = ModelNameRequest {
            name: name.to_string(),
        };
        self.adapter
            .delete(DELETE_ENDPOINT, Some(to_body(&request)?))
            .await
    }

    /// Download a model from the Ollama library
    ///
    /// `insecure` and `stream` are not transmitted yet; only the name is sent.
    pub async fn pull_model(&self, name: &str, insecure: bool, stream: bool) -> ClientResult<ApiResult> {
        let request = PullModelRequest {
            name: name.to_string(),
            insecure,
            stream,
        };
        self.adapter
            .post(PULL_ENDPOINT, Some(to_body(&request)?))
            .await
    }
}

fn to_body<T: Serialize>(request: &T) -> ClientResult<Value> {
    serde_json::to_value(request).map_err(ClientError::Encode)
}

/// Builder for [`OllamaClient`]
#[derive(Debug, Clone)]
pub struct OllamaClientBuilder {
    base_url: String,
    logger: Arc<dyn RequestLogger>,
    options: AdapterOptions,
}

impl Default for OllamaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            logger: Arc::new(TracingLogger),
            options: AdapterOptions::default(),
        }
    }
}

impl OllamaClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Give up on requests that take longer than `timeout`
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    pub fn include_null_fields(mut self, include: bool) -> Self {
        self.options.include_null_fields = include;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.options.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> ClientResult<OllamaClient> {
        Ok(OllamaClient {
            adapter: RestAdapter::with_options(&self.base_url, self.logger, self.options)?,
        })
    }
}
