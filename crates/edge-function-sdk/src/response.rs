//! HTTP response envelope returned to the gateway

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The response envelope a function hands back to the gateway.
///
/// The gateway relays status, headers and body to the client verbatim, so
/// the body is always a complete JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// HTTP status code
    #[serde(rename = "statusCode")]
    pub status: u16,

    /// Response headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// JSON-encoded response body
    pub body: String,
}

impl Response {
    /// Create a JSON response with a custom status code.
    ///
    /// # Example
    /// ```ignore
    /// Response::json(201, json!({"id": 3}))
    /// ```
    pub fn json<T: Serialize>(status: u16, body: T) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            status,
            headers,
            body: serde_json::to_string(&body).unwrap_or_else(|_| "{}".to_string()),
        }
    }

    /// Create a 200 OK response with JSON body.
    pub fn ok<T: Serialize>(body: T) -> Self {
        Self::json(200, body)
    }

    /// Create a 201 Created response with JSON body.
    pub fn created<T: Serialize>(body: T) -> Self {
        Self::json(201, body)
    }

    /// Create an error envelope with a message and generation timestamp.
    ///
    /// # Example
    /// ```ignore
    /// Response::error(404, "Route not found")
    /// ```
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::json(
            status,
            serde_json::json!({
                "error": message.into(),
                "timestamp": Utc::now().to_rfc3339(),
            }),
        )
    }

    /// Add a header to the response (builder pattern).
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Stamp the cross-origin header.
    ///
    /// Preflight terminates at the gateway, so the function only declares
    /// the allowed origin.
    pub fn with_cors(self, origin: impl Into<String>) -> Self {
        self.with_header("Access-Control-Allow-Origin", origin)
    }
}
