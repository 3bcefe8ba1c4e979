//! Shared error type across x4pay crates.

use thiserror::Error;

/// Client-facing error codes (stable API, used in reply tokens).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed message.
    BadRequest,
    /// Continuation or END chunk arrived without a preceding START.
    ChunkOrder,
    /// Verification queue is full; the job was rejected, not enqueued.
    Busy,
    /// HTTP transport could not complete.
    Transport,
    /// Facilitator answered but the response was unusable.
    Facilitator,
    /// Internal error.
    Internal,
}

impl ClientCode {
    /// String representation used in reply tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::ChunkOrder => "CHUNK_ORDER",
            ClientCode::Busy => "BUSY",
            ClientCode::Transport => "TRANSPORT",
            ClientCode::Facilitator => "FACILITATOR",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, X4PayError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum X4PayError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("out-of-order chunk on {0} channel")]
    OutOfOrderChunk(&'static str),
    #[error("verification queue full")]
    QueueFull,
    #[error("transport: {0}")]
    Transport(String),
    #[error("facilitator: {0}")]
    Facilitator(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl X4PayError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            X4PayError::BadRequest(_) => ClientCode::BadRequest,
            X4PayError::OutOfOrderChunk(_) => ClientCode::ChunkOrder,
            X4PayError::QueueFull => ClientCode::Busy,
            X4PayError::Transport(_) => ClientCode::Transport,
            X4PayError::Facilitator(_) => ClientCode::Facilitator,
            X4PayError::Internal(_) => ClientCode::Internal,
        }
    }
}
