//! Inbound message dispatch.

pub mod router;

pub use router::RequestRouter;
