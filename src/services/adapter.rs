//! REST adapter
//!
//! Single choke point for all HTTP communication with the Ollama server

use crate::config::ClientConfig;
use crate::models::ApiResult;
use crate::utils::error::{
    helpers::{decode_error, invalid_url_error, request_failed_error, transport_error},
    ClientError, ClientResult,
};
use crate::utils::logging::{truncate_content, RequestLogger, TracingLogger, MAX_LOGGED_BODY_LEN};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug_span, Instrument};
use url::Url;
use uuid::Uuid;

/// Transport options for the adapter
#[derive(Debug, Clone)]
pub struct AdapterOptions {
    /// Request timeout, `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Send `null` members of object payloads
    pub include_null_fields: bool,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        ClientConfig::default().into()
    }
}

impl From<&ClientConfig> for AdapterOptions {
    fn from(config: &ClientConfig) -> Self {
        Self {
            timeout: config.timeout_duration(),
            include_null_fields: config.include_null_fields,
            user_agent: config.user_agent.clone(),
        }
    }
}

impl From<ClientConfig> for AdapterOptions {
    fn from(config: ClientConfig) -> Self {
        Self::from(&config)
    }
}

/// Ollama REST adapter
#[derive(Debug, Clone)]
pub struct RestAdapter {
    client: Client,
    base_url: Url,
    logger: Arc<dyn RequestLogger>,
    include_null_fields: bool,
}

impl RestAdapter {
    /// Create an adapter with default options, logging through `tracing`
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_options(base_url, Arc::new(TracingLogger), AdapterOptions::default())
    }

    /// Create an adapter with an explicit logger and transport options
    pub fn with_options(
        base_url: &str,
        logger: Arc<dyn RequestLogger>,
        options: AdapterOptions,
    ) -> ClientResult<Self> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = Client::builder().user_agent(options.user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClientError::Build)?;

        Ok(Self {
            client,
            base_url,
            logger,
            include_null_fields: options.include_null_fields,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint against the base address
    pub fn endpoint_url(&self, endpoint: &str) -> ClientResult<Url> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| invalid_url_error(endpoint, e))
    }

    /// Send a request and classify the response
    pub async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> ClientResult<ApiResult> {
        let url = self.endpoint_url(endpoint)?;

        let span = debug_span!(
            "ollama_request",
            request_id = %Uuid::new_v4(),
            method = %method,
            url = %url,
        );

        self.dispatch(method, url, body).instrument(span).await
    }

    pub async fn get(&self, endpoint: &str) -> ClientResult<ApiResult> {
        self.execute(Method::GET, endpoint, None).await
    }

    pub async fn post(&self, endpoint: &str, body: Option<Value>) -> ClientResult<ApiResult> {
        self.execute(Method::POST, endpoint, body).await
    }

    pub async fn delete(&self, endpoint: &str, body: Option<Value>) -> ClientResult<ApiResult> {
        self.execute(Method::DELETE, endpoint, body).await
    }

    async fn dispatch(&self, method: Method, url: Url, body: Option<Value>) -> ClientResult<ApiResult> {
        let log_line_pre = format!("method={}, url={}", method, url);

        // Content type goes on every request, body or not
        let mut request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(&self.prepare_body(body));
        }

        self.logger.debug(&log_line_pre);

        // No response at all: nothing to classify
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.logger.error(&e.to_string());
                return Err(transport_error("Request failed", e));
            }
        };

        let status = response.status();
        // reqwest does not surface the server's own reason text
        let reason = status.canonical_reason().unwrap_or_default().to_string();

        let content = match response.bytes().await {
            Ok(content) => content,
            Err(e) => {
                self.logger.error(&e.to_string());
                return Err(transport_error("Failed to read response body", e));
            }
        };

        // Empty body means no data, even on success
        let data = if content.is_empty() {
            None
        } else {
            match serde_json::from_slice::<Value>(&content) {
                Ok(value) => Some(value),
                Err(e) => {
                    self.logger.error(&format!(
                        "{}, success=false, status_code={}, message={}",
                        log_line_pre,
                        status.as_u16(),
                        e
                    ));
                    return Err(decode_error("Bad JSON in response", e));
                }
            }
        };

        // 200-299 only, regardless of body
        let is_success = status.is_success();
        let log_line = format!(
            "{}, success={}, status_code={}, message={}",
            log_line_pre,
            is_success,
            status.as_u16(),
            reason
        );

        if is_success {
            self.logger.debug(&log_line);
            return Ok(ApiResult::new(status.as_u16(), reason, data));
        }

        self.logger.error(&log_line);
        let body = (!content.is_empty()).then(|| String::from_utf8_lossy(&content).into_owned());
        if let Some(text) = &body {
            self.logger.error(&format!(
                "Response content: {}",
                truncate_content(text, MAX_LOGGED_BODY_LEN)
            ));
        }

        Err(request_failed_error(status.as_u16(), reason, body))
    }

    /// Apply the null-field policy to an outgoing payload
    fn prepare_body(&self, body: Value) -> Value {
        match body {
            Value::Object(map) if !self.include_null_fields => {
                Value::Object(map.into_iter().filter(|(_, v)| !v.is_null()).collect())
            }
            other => other,
        }
    }
}

/// Parse the base address and make sure its path ends in `/`
///
/// `Url::join` replaces the last path segment unless it ends in a slash, so
/// without this `http://host/ollama` and `http://host/ollama/` would resolve
/// endpoints differently.
fn normalize_base_url(raw: &str) -> ClientResult<Url> {
    let raw = raw.trim();
    let mut url = Url::parse(raw).map_err(|e| invalid_url_error(raw, e))?;

    // "localhost:11434" parses with scheme "localhost" and no joinable path
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid_url_error(
            raw,
            format!("scheme '{}' is not http or https", url.scheme()),
        ));
    }
    if url.cannot_be_a_base() {
        return Err(invalid_url_error(raw, "URL cannot be used as a base"));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
