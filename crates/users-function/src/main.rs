//! Users API edge function - entry point.
//!
//! The gateway drives the function over stdio: each frame read from stdin is
//! one request descriptor, each frame written to stdout is one response
//! envelope. The loop ends when the gateway closes the stream.

mod config;
mod handlers;
mod router;
mod users;

use edge_function_sdk::ipc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::FunctionConfig;
use crate::router::UsersApi;

fn main() {
    // Stdout carries the IPC frames; diagnostics stay on stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,users_function=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = FunctionConfig::from_env();
    tracing::info!("Starting users function: {:?}", config);

    let api = UsersApi::new(&config);

    loop {
        match ipc::read_request() {
            Ok(req) => {
                let response = api.handle(&req);
                if let Err(e) = ipc::send_response(response) {
                    tracing::error!("Failed to send response: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to read request: {}", e);
                break;
            }
        }
    }
}
