//! Outbound reply channel abstraction.
//!
//! On the device this is the notify characteristic of the wireless link;
//! in tests and the stdin harness it is an mpsc sender or stdout. Delivery
//! failures are logged and swallowed: a disconnected client must not abort
//! the worker loop.

use async_trait::async_trait;
use tokio::sync::mpsc;

/// Opaque handle replies are delivered through.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send(&self, msg: String);
}

#[async_trait]
impl ReplySink for mpsc::Sender<String> {
    async fn send(&self, msg: String) {
        if mpsc::Sender::send(self, msg).await.is_err() {
            tracing::debug!("reply receiver dropped");
        }
    }
}
