//! Application hooks, injected at configuration time.
//!
//! Modeled as single-method capabilities rather than bare function pointers
//! so closures with captured state work. Hooks run on the worker task, so
//! they must be `Send + Sync` and should not block for long.

use std::sync::Arc;

/// Resolves a price from the client's selections and custom context.
pub trait PriceHook: Send + Sync {
    fn price(&self, options: &[String], custom_context: &str) -> String;
}

impl<F> PriceHook for F
where
    F: Fn(&[String], &str) -> String + Send + Sync,
{
    fn price(&self, options: &[String], custom_context: &str) -> String {
        self(options, custom_context)
    }
}

/// Invoked after a payment is verified and settled.
pub trait PaymentHook: Send + Sync {
    fn on_paid(&self, options: &[String], custom_context: &str);
}

impl<F> PaymentHook for F
where
    F: Fn(&[String], &str) + Send + Sync,
{
    fn on_paid(&self, options: &[String], custom_context: &str) {
        self(options, custom_context)
    }
}

/// Hook registry held by the device context.
#[derive(Default, Clone)]
pub struct Hooks {
    pub price: Option<Arc<dyn PriceHook>>,
    pub on_pay: Option<Arc<dyn PaymentHook>>,
}
