//! Error types for edge function handlers

use thiserror::Error;

/// Errors a handler can surface.
///
/// Validation and lookup failures carry their client-facing message
/// verbatim; everything else maps to a 500 with the failure description
/// embedded in the message.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Request failed a presence/shape check (400).
    #[error("{0}")]
    Validation(String),

    /// Route or resource does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// Body could not be parsed or a payload could not be encoded (500).
    #[error("Internal error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Anything else that escaped a handler (500).
    #[error("Internal error: {0}")]
    Internal(String),

    /// Transport failure talking to the gateway (500).
    #[error("IPC error: {0}")]
    Ipc(String),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::Validation(_) => 400,
            HandlerError::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// Convert to an error envelope
    pub fn to_response(&self) -> crate::Response {
        crate::Response::error(self.status_code(), self.to_string())
    }
}
