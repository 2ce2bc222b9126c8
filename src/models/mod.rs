//! Data models module
//!
//! Defines the uniform call result and the Ollama request and response structures

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::error::{helpers::decode_error, ClientResult};

pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;

/// Outcome of a successful call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult {
    /// HTTP status code
    pub status_code: u16,
    /// Reason phrase
    ///
    /// The standard phrase for the status code ("OK", "Not Found"); a custom
    /// reason sent by the server is not preserved, and codes without a
    /// standard phrase (e.g. 299) give an empty string.
    pub message: String,
    /// Deserialized body, `None` when the server sent nothing
    pub data: Option<Value>,
}

impl ApiResult {
    pub fn new(status_code: u16, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            status_code,
            message: message.into(),
            data,
        }
    }

    /// Whether the response carried no body
    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Decode the body into a typed view
    ///
    /// An absent body decodes as JSON `null`.
    pub fn into_data<T: DeserializeOwned>(self) -> ClientResult<T> {
        let value = self.data.unwrap_or(Value::Null);
        serde_json::from_value(value)
            .map_err(|e| decode_error("Response does not match expected shape", e))
    }

    /// Structured view over a generate-completion response
    pub fn completion(&self) -> ClientResult<GenerateCompletion> {
        self.clone().into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_result() {
        let result = ApiResult::new(200, "OK", None);
        assert!(result.is_empty());
        assert_eq!(result.data(), None);
    }

    #[test]
    fn test_into_data_shape_mismatch_is_decode_error() {
        let result = ApiResult::new(200, "OK", Some(json!({"models": "not a list"})));
        let err = result.into_data::<ModelList>().unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_completion_view() {
        let result = ApiResult::new(
            200,
            "OK",
            Some(json!({"model": "orca-mini:3b", "response": "Hi", "done": true})),
        );
        let completion = result.completion().unwrap();
        assert_eq!(completion.model, "orca-mini:3b");
        assert!(completion.done);
    }
}
