//! Per-device-session payment state.
//!
//! The verification worker is the sole writer; the router and application
//! layer only read. A mutex guards the snapshot so readers never observe a
//! torn update (hash written, payer not yet).

use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

/// Monotonic tick source, sized like a device cycle counter. The reading
/// wraps at `u32::MAX`; elapsed math accounts for one wrap.
pub trait MonotonicClock: Send + Sync {
    fn now_micros(&self) -> u32;
}

/// Process-uptime clock. Truncating the microsecond count to `u32` gives
/// the same wrap behavior as a device counter (every ~71 minutes).
pub struct ProcessClock {
    start: Instant,
}

impl ProcessClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for ProcessClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for ProcessClock {
    fn now_micros(&self) -> u32 {
        self.start.elapsed().as_micros() as u32
    }
}

#[derive(Debug, Default, Clone)]
struct SessionInner {
    last_paid: bool,
    last_tx_hash: String,
    last_payer: String,
    /// Tick reading at the last settled payment. Meaningless until
    /// `has_paid_once` is set; a genuine 0 reading is still a payment.
    last_payment_micros: u32,
    has_paid_once: bool,
    user_selected_options: Vec<String>,
    user_custom_context: String,
}

/// Snapshot of the last payment outcome and the paying client's choices.
#[derive(Debug, Default)]
pub struct SessionState {
    inner: Mutex<SessionInner>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        // The worker never panics while holding the lock, but recover from
        // poisoning anyway rather than taking the process down.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record a settled payment. User selections and context are written
    /// here and nowhere else: a failed or in-flight job must never
    /// overwrite what the last paying client chose.
    pub fn record_success(
        &self,
        tx_hash: &str,
        payer: &str,
        options: &[String],
        custom_context: &str,
        now_micros: u32,
    ) {
        let mut s = self.lock();
        s.last_paid = true;
        s.last_tx_hash = tx_hash.to_owned();
        s.last_payer = payer.to_owned();
        s.last_payment_micros = now_micros;
        s.has_paid_once = true;
        s.user_selected_options = options.to_vec();
        s.user_custom_context = custom_context.to_owned();
    }

    /// Read the paid flag and clear it. Single consumer assumed.
    pub fn status_and_reset(&self) -> bool {
        let mut s = self.lock();
        std::mem::take(&mut s.last_paid)
    }

    pub fn last_paid(&self) -> bool {
        self.lock().last_paid
    }

    pub fn last_tx_hash(&self) -> String {
        self.lock().last_tx_hash.clone()
    }

    pub fn last_payer(&self) -> String {
        self.lock().last_payer.clone()
    }

    pub fn user_selected_options(&self) -> Vec<String> {
        self.lock().user_selected_options.clone()
    }

    pub fn user_custom_context(&self) -> String {
        self.lock().user_custom_context.clone()
    }

    /// Micros elapsed since the last settled payment, 0 when none yet.
    /// A reading smaller than the stored stamp means the counter wrapped:
    /// `(max - last) + current + 1`.
    pub fn micros_since_last_payment(&self, now_micros: u32) -> u32 {
        let s = self.lock();
        if !s.has_paid_once {
            return 0;
        }
        let last = s.last_payment_micros;
        if now_micros >= last {
            now_micros - last
        } else {
            (u32::MAX - last) + now_micros + 1
        }
    }
}
