//! Wire-level protocol primitives.
//!
//! - [`chunk`]: reassembly of bounded-size writes into one logical message.
//! - [`envelope`]: the `--`-delimited payment/price envelope formats.
//! - [`extract`]: narrow field extraction from facilitator JSON bodies.

pub mod chunk;
pub mod envelope;
pub mod extract;

pub use chunk::{AssemblyState, Channel, ChunkAssembler};
pub use envelope::{PaymentEnvelope, PaymentPayload, PriceEnvelope};
