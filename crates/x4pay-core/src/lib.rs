//! x4pay core: transport-agnostic payment protocol primitives and error types.
//!
//! This crate defines the chunk-reassembly state machine, the payment/price
//! envelope formats, and the narrow facilitator-response field extractor
//! shared by the gateway and SDK tooling. It intentionally carries no
//! transport or runtime dependencies so it can be reused in multiple
//! contexts (device firmware bridges, host-side simulators, tests).
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `X4PayError`/`Result` so a device
//! session does not crash on malformed client traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, X4PayError};
