use serde::Deserialize;
use x4pay_core::error::{Result, X4PayError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceConfig {
    pub version: u32,

    pub device: DeviceSection,

    #[serde(default)]
    pub payment: PaymentSection,
}

impl DeviceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(X4PayError::BadRequest(
                "config version must be 1".into(),
            ));
        }
        self.device.validate()?;
        self.payment.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceSection {
    pub name: String,

    /// Static price quoted when no dynamic hook is registered.
    pub price: String,

    pub pay_to: String,

    #[serde(default = "default_network")]
    pub network: String,

    #[serde(default)]
    pub logo: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub banner: String,

    #[serde(default = "default_facilitator")]
    pub facilitator: String,
}

impl DeviceSection {
    pub fn validate(&self) -> Result<()> {
        if self.price.is_empty() {
            return Err(X4PayError::BadRequest("device.price must not be empty".into()));
        }
        if self.pay_to.is_empty() {
            return Err(X4PayError::BadRequest(
                "device.pay_to must not be empty".into(),
            ));
        }
        if self.facilitator.is_empty() {
            return Err(X4PayError::BadRequest(
                "device.facilitator must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaymentSection {
    /// Recurring payment frequency; 0 means unset.
    #[serde(default)]
    pub frequency: u32,

    /// Options advertised to the client via `[OPTIONS]`.
    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default)]
    pub allow_custom_content: bool,

    /// Facilitator HTTP timeout; settlement can take 30-45 s on chain.
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// Verification job queue bound.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for PaymentSection {
    fn default() -> Self {
        Self {
            frequency: 0,
            options: Vec::new(),
            allow_custom_content: false,
            http_timeout_secs: default_http_timeout_secs(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

impl PaymentSection {
    pub fn validate(&self) -> Result<()> {
        if self.http_timeout_secs == 0 {
            return Err(X4PayError::BadRequest(
                "payment.http_timeout_secs must be positive".into(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(X4PayError::BadRequest(
                "payment.queue_capacity must be positive".into(),
            ));
        }
        Ok(())
    }
}

fn default_network() -> String {
    "base-sepolia".into()
}
fn default_facilitator() -> String {
    "https://www.x402.org/facilitator".into()
}
fn default_http_timeout_secs() -> u64 {
    60
}
fn default_queue_capacity() -> usize {
    4
}
