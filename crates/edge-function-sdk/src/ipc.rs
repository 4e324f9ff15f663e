//! IPC protocol between the gateway and the function.
//!
//! The gateway drives the function over stdio with a simple length-prefixed
//! JSON protocol: a 4-byte big-endian length followed by the payload.
//! Request descriptors arrive on stdin, response envelopes go back on
//! stdout. Stderr is left free for diagnostics.

use crate::{HandlerError, Request, Response};
use std::io::{self, Read, Write};

/// Read a request frame from stdin (sent by the gateway)
pub fn read_request() -> Result<Request, HandlerError> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();

    let payload = read_frame(&mut handle)?;

    serde_json::from_slice(&payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to parse request: {}", e)))
}

/// Send a response frame to stdout (read by the gateway)
pub fn send_response(response: Response) -> Result<(), HandlerError> {
    let payload = serde_json::to_vec(&response)
        .map_err(|e| HandlerError::Ipc(format!("Failed to serialize response: {}", e)))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_frame(&mut handle, &payload)?;

    handle
        .flush()
        .map_err(|e| HandlerError::Ipc(format!("Failed to flush: {}", e)))
}

/// Read one length-prefixed frame
fn read_frame(reader: &mut impl Read) -> Result<Vec<u8>, HandlerError> {
    let mut len_buf = [0u8; 4];
    if reader.read_exact(&mut len_buf).is_err() {
        return Err(HandlerError::Ipc("Failed to read length prefix".into()));
    }

    let len = u32::from_be_bytes(len_buf) as usize;

    let mut payload = vec![0u8; len];
    if reader.read_exact(&mut payload).is_err() {
        return Err(HandlerError::Ipc("Failed to read payload".into()));
    }

    Ok(payload)
}

/// Write one length-prefixed frame
fn write_frame(writer: &mut impl Write, payload: &[u8]) -> Result<(), HandlerError> {
    let len = payload.len() as u32;
    writer
        .write_all(&len.to_be_bytes())
        .map_err(|e| HandlerError::Ipc(format!("Failed to write length: {}", e)))?;
    writer
        .write_all(payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to write payload: {}", e)))
}
