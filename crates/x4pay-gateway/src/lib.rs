//! x4pay gateway library entry.
//!
//! This crate wires the device config, request router, verification worker,
//! facilitator client, and session state into a cohesive device-side payment
//! stack. It is intended to be consumed by the binary (`main.rs`), by a
//! wireless transport bridge, and by integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod facilitator;
pub mod hooks;
pub mod reply;
pub mod requirements;
pub mod session;
pub mod worker;
