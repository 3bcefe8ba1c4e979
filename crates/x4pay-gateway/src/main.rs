//! x4pay gateway harness.
//!
//! Drives the full pipeline with the wireless transport stubbed out:
//! stdin lines stand in for characteristic writes, stdout for notify.
//! Useful for exercising a facilitator end to end without a radio.

use std::sync::Arc;

use async_trait::async_trait;
use tracing_subscriber::{fmt, EnvFilter};

use tokio::io::{AsyncBufReadExt, BufReader};

use x4pay_gateway::app_state::DeviceCtx;
use x4pay_gateway::config;
use x4pay_gateway::dispatch::RequestRouter;
use x4pay_gateway::facilitator::FacilitatorClient;
use x4pay_gateway::reply::ReplySink;
use x4pay_gateway::worker;

struct StdoutSink;

#[async_trait]
impl ReplySink for StdoutSink {
    async fn send(&self, msg: String) {
        println!("{msg}");
    }
}

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("x4pay.yaml").expect("config load failed");
    let timeout = std::time::Duration::from_secs(cfg.payment.http_timeout_secs);
    let facilitator = cfg.device.facilitator.clone();

    let ctx = Arc::new(DeviceCtx::new(cfg).expect("device context build failed"));
    let client = FacilitatorClient::new(facilitator, timeout);
    let handle = worker::spawn(Arc::clone(&ctx), client);

    let mut router = RequestRouter::new(ctx, handle, Arc::new(StdoutSink));

    tracing::info!("x4pay-gateway reading writes from stdin");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        router.handle(&line).await;
    }
}
