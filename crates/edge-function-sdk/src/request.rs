//! HTTP request descriptor handed to the function by the gateway

use crate::error::HandlerError;
use serde::{Deserialize, Serialize};

/// The slice of the gateway's request descriptor a function consumes.
///
/// The gateway forwards the full inbound event; only the method, path and
/// body are read here. Any other descriptor field (headers, query string,
/// auth context) is ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    #[serde(rename = "httpMethod")]
    pub method: String,

    /// Request path (e.g., "/users/123")
    pub path: String,

    /// Raw request body, JSON-encoded when present
    #[serde(default)]
    pub body: Option<String>,
}

impl Request {
    /// Parse the body as JSON into a typed value.
    ///
    /// An absent body parses as JSON `null`, so `Option<T>` targets map it
    /// to `None`. A body that is present but malformed is a serialization
    /// failure, not a validation failure.
    ///
    /// # Example
    /// ```ignore
    /// #[derive(Deserialize, Default)]
    /// struct CreateUser { name: Option<String>, email: Option<String> }
    ///
    /// let input = req.json::<Option<CreateUser>>()?.unwrap_or_default();
    /// ```
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> Result<T, HandlerError> {
        let raw = self.body.as_deref().unwrap_or("null");
        Ok(serde_json::from_str(raw)?)
    }

    /// Check if request method matches (case-insensitive).
    pub fn is_method(&self, method: &str) -> bool {
        self.method.eq_ignore_ascii_case(method)
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            path: "/".to_string(),
            body: None,
        }
    }
}
