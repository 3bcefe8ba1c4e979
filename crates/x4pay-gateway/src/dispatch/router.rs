//! Request router for inbound wireless messages.
//!
//! Runs on the wireless control path, so it only does in-memory string
//! work plus a non-blocking queue submission. Everything that can block
//! (HTTP verify/settle) lives behind the worker queue.
//!
//! Dispatch is by message prefix: payment chunks, price-query chunks, and
//! a small set of case-insensitive metadata queries answered synchronously.

use std::sync::Arc;

use serde_json::json;

use x4pay_core::protocol::chunk::{AssemblyState, Channel, ChunkAssembler};
use x4pay_core::protocol::envelope::{PaymentEnvelope, PaymentPayload, PriceEnvelope};

use crate::app_state::DeviceCtx;
use crate::reply::ReplySink;
use crate::requirements;
use crate::worker::{VerifyJob, WorkerHandle};

pub struct RequestRouter {
    ctx: Arc<DeviceCtx>,
    worker: WorkerHandle,
    reply: Arc<dyn ReplySink>,
    payment: ChunkAssembler,
    price: ChunkAssembler,
}

impl RequestRouter {
    pub fn new(ctx: Arc<DeviceCtx>, worker: WorkerHandle, reply: Arc<dyn ReplySink>) -> Self {
        Self {
            ctx,
            worker,
            reply,
            payment: ChunkAssembler::new(Channel::Payment),
            price: ChunkAssembler::new(Channel::Price),
        }
    }

    /// Dispatch one inbound message and answer through the reply sink.
    pub async fn handle(&mut self, msg: &str) {
        if msg.is_empty() {
            return;
        }

        if msg.starts_with("X-PAYMENT") {
            self.handle_payment_chunk(msg).await;
        } else if starts_with_ignore_case(msg, "[PRICE]") {
            self.handle_price_chunk(msg).await;
        } else if starts_with_ignore_case(msg, "[LOGO]") {
            self.send(format!("LOGO://{}", self.ctx.cfg().device.logo)).await;
        } else if starts_with_ignore_case(msg, "[BANNER]") {
            self.send(format!("BANNER://{}", self.ctx.cfg().device.banner))
                .await;
        } else if starts_with_ignore_case(msg, "[DESC]") {
            self.send(format!("DESC://{}", self.ctx.cfg().device.description))
                .await;
        } else if starts_with_ignore_case(msg, "[CONFIG]") {
            let cfg = &self.ctx.cfg().payment;
            let body = json!({
                "frequency": cfg.frequency,
                "allowCustomContent": cfg.allow_custom_content,
            });
            self.send(format!("CONFIG://{body}")).await;
        } else if starts_with_ignore_case(msg, "[OPTIONS]") {
            let opts = self.ctx.cfg().payment.options.join(",");
            self.send(format!("OPTIONS://{opts}")).await;
        } else {
            // Unknown command: answer with the static payment pointer so a
            // fresh client can always discover how to pay.
            self.send(self.payment_pointer(&self.ctx.cfg().device.price))
                .await;
        }
    }

    async fn handle_payment_chunk(&mut self, msg: &str) {
        match self.payment.feed(msg) {
            AssemblyState::Incomplete => self.send("PAYMENT:ACK".to_owned()).await,
            AssemblyState::OutOfOrder => {
                self.send("ERROR:CHUNK_ORDER".to_owned()).await;
            }
            AssemblyState::Ignored => {}
            AssemblyState::Complete(combined) => {
                let env = PaymentEnvelope::parse(&combined);
                tracing::debug!(
                    context = %env.custom_context,
                    options = ?env.selected_options,
                    "payment envelope assembled"
                );
                let job = VerifyJob {
                    payload: PaymentPayload::from_json(&env.payload_json),
                    // Built in the worker with the dynamically resolved price.
                    requirements: String::new(),
                    reply: Arc::clone(&self.reply),
                    custom_context: env.custom_context,
                    selected_options: env.selected_options,
                };
                if self.worker.submit(job) {
                    self.send("PAYMENT:VERIFYING".to_owned()).await;
                } else {
                    self.send("ERROR:BUSY".to_owned()).await;
                }
            }
        }
    }

    async fn handle_price_chunk(&mut self, msg: &str) {
        match self.price.feed(msg) {
            AssemblyState::Incomplete => self.send("PRICE:ACK".to_owned()).await,
            AssemblyState::OutOfOrder => {
                self.send("ERROR:CHUNK_ORDER".to_owned()).await;
            }
            AssemblyState::Ignored => {
                // Bare "[PRICE]" with no marker: treat like any other
                // unknown command and point at the static price.
                self.send(self.payment_pointer(&self.ctx.cfg().device.price))
                    .await;
            }
            AssemblyState::Complete(combined) => {
                let env = PriceEnvelope::parse(&combined);
                let price = requirements::resolve_price(
                    self.ctx.cfg(),
                    self.ctx.hooks(),
                    &env.selected_options,
                    &env.custom_context,
                );
                self.send(self.payment_pointer(&price)).await;
            }
        }
    }

    fn payment_pointer(&self, price: &str) -> String {
        let device = &self.ctx.cfg().device;
        let body = json!({
            "price": price,
            "payTo": device.pay_to,
            "network": device.network,
        });
        format!("402://{body}")
    }

    async fn send(&self, msg: String) {
        self.reply.send(msg).await;
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
