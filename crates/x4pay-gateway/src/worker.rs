//! Verification worker: the single task doing blocking network I/O.
//!
//! The wireless control path must never wait on the facilitator, so jobs
//! cross a bounded queue into exactly one consumer task. One consumer
//! means at most one verify/settle in flight, FIFO processing, and no
//! races on session state.

use std::sync::Arc;

use tokio::sync::mpsc;

use x4pay_core::protocol::envelope::PaymentPayload;

use crate::app_state::DeviceCtx;
use crate::facilitator::FacilitatorClient;
use crate::reply::ReplySink;
use crate::requirements;

/// One payment verification/settlement attempt. Exclusively owned by the
/// producer until handed to the queue, then by the worker; never aliased.
pub struct VerifyJob {
    pub payload: PaymentPayload,
    /// Pre-built requirements snapshot; empty means "build in the worker
    /// with the dynamically resolved price".
    pub requirements: String,
    pub reply: Arc<dyn ReplySink>,
    pub custom_context: String,
    pub selected_options: Vec<String>,
}

/// Producer-side handle to the worker queue.
#[derive(Clone)]
pub struct WorkerHandle {
    tx: mpsc::Sender<VerifyJob>,
}

impl WorkerHandle {
    /// Non-blocking enqueue. `false` means rejected, not enqueued — the
    /// caller must treat the job as discarded, not eventually delivered.
    pub fn submit(&self, job: VerifyJob) -> bool {
        match self.tx.try_send(job) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "verify queue rejected job");
                false
            }
        }
    }
}

/// Spawn the worker task. The context handle is injected here; the worker
/// never looks anything up globally.
pub fn spawn(ctx: Arc<DeviceCtx>, client: FacilitatorClient) -> WorkerHandle {
    let capacity = ctx.cfg().payment.queue_capacity;
    let (tx, rx) = mpsc::channel(capacity);
    tokio::spawn(run(rx, ctx, client));
    WorkerHandle { tx }
}

async fn run(mut rx: mpsc::Receiver<VerifyJob>, ctx: Arc<DeviceCtx>, client: FacilitatorClient) {
    while let Some(job) = rx.recv().await {
        process(job, &ctx, &client).await;
    }
    tracing::debug!("all job producers dropped; verify worker exiting");
}

/// One full job: price resolution, requirements build, verify, settle,
/// state update, terminal reply. Every failure path is a rejection reply,
/// never a panic or loop exit.
async fn process(job: VerifyJob, ctx: &DeviceCtx, client: &FacilitatorClient) {
    let requirements = if job.requirements.is_empty() {
        let price = requirements::resolve_price(
            ctx.cfg(),
            ctx.hooks(),
            &job.selected_options,
            &job.custom_context,
        );
        let doc = requirements::build_requirements(ctx.cfg(), &price);
        match serde_json::to_string(&doc) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "requirements encode failed");
                job.reply
                    .send("PAYMENT:COMPLETE VERIFIED:false".to_owned())
                    .await;
                return;
            }
        }
    } else {
        job.requirements.clone()
    };

    let verified = client.verify(&job.payload, &requirements).await;
    let settlement = if verified {
        client.settle(&job.payload, &requirements).await
    } else {
        None
    };

    // Accepted = verify ok AND settle ok AND hash present (settle already
    // guarantees a non-empty hash).
    let reply = match settlement {
        Some(settlement) => {
            ctx.session().record_success(
                &settlement.transaction,
                &settlement.payer,
                &job.selected_options,
                &job.custom_context,
                ctx.now_micros(),
            );
            if let Some(hook) = &ctx.hooks().on_pay {
                hook.on_paid(&job.selected_options, &job.custom_context);
            }
            tracing::info!(
                tx = %settlement.transaction,
                payer = %settlement.payer,
                "payment settled"
            );
            format!("PAYMENT:COMPLETE VERIFIED:true TX:{}", settlement.transaction)
        }
        None => "PAYMENT:COMPLETE VERIFIED:false".to_owned(),
    };

    job.reply.send(reply).await;
}
