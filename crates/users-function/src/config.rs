//! Function configuration

use std::env;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct FunctionConfig {
    /// Value stamped into the Access-Control-Allow-Origin header on every
    /// envelope. The deployment descriptor applies the same policy at the
    /// gateway.
    pub allow_origin: String,
}

impl FunctionConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            allow_origin: env::var("USERS_FUNCTION_ALLOW_ORIGIN")
                .unwrap_or_else(|_| "*".to_string()),
        }
    }
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
