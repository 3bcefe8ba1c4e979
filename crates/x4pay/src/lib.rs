//! Top-level facade crate for x4pay.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use x4pay_core::*;
}

pub mod gateway {
    pub use x4pay_gateway::*;
}
