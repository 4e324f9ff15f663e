//! Edge Function SDK - types and plumbing for gateway-hosted functions
//!
//! A function built on this crate is driven by the gateway over stdio: each
//! frame read from stdin is one HTTP request descriptor, each frame written
//! to stdout is one response envelope.

pub mod error;
pub mod ipc;
pub mod request;
pub mod response;

pub mod prelude {
    //! Common imports for edge functions
    pub use crate::error::HandlerError;
    pub use crate::ipc::{read_request, send_response};
    pub use crate::request::Request;
    pub use crate::response::Response;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use error::HandlerError;
pub use request::Request;
pub use response::Response;
