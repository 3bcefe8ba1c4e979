//! Shared device context.
//!
//! One `DeviceCtx` exists per device session, built from validated config
//! and handed to the worker and router by `Arc` at startup. There is no
//! global active-instance lookup: everything that needs the context gets
//! it injected.

use std::sync::Arc;

use x4pay_core::error::Result;

use crate::config::DeviceConfig;
use crate::hooks::{Hooks, PaymentHook, PriceHook};
use crate::session::{MonotonicClock, ProcessClock, SessionState};

pub struct DeviceCtx {
    cfg: DeviceConfig,
    session: SessionState,
    hooks: Hooks,
    clock: Arc<dyn MonotonicClock>,
}

impl DeviceCtx {
    /// Build the context from validated config.
    pub fn new(cfg: DeviceConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            session: SessionState::new(),
            hooks: Hooks::default(),
            clock: Arc::new(ProcessClock::new()),
        })
    }

    /// Register a dynamic price hook (builder style, before `Arc`-wrapping).
    pub fn with_price_hook(mut self, hook: impl PriceHook + 'static) -> Self {
        self.hooks.price = Some(Arc::new(hook));
        self
    }

    /// Register a payment-success hook.
    pub fn with_payment_hook(mut self, hook: impl PaymentHook + 'static) -> Self {
        self.hooks.on_pay = Some(Arc::new(hook));
        self
    }

    /// Override the tick source (tests drive wraparound through this).
    pub fn with_clock(mut self, clock: Arc<dyn MonotonicClock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn cfg(&self) -> &DeviceConfig {
        &self.cfg
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    pub fn now_micros(&self) -> u32 {
        self.clock.now_micros()
    }

    /// Micros since the last settled payment (0 when none yet).
    pub fn micros_since_last_payment(&self) -> u32 {
        self.session.micros_since_last_payment(self.clock.now_micros())
    }
}
