//! Device config loader (strict parsing).

pub mod schema;

use std::fs;

use x4pay_core::error::{Result, X4PayError};

pub use schema::{DeviceConfig, DeviceSection, PaymentSection};

pub fn load_from_file(path: &str) -> Result<DeviceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| X4PayError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<DeviceConfig> {
    let cfg: DeviceConfig = serde_yaml::from_str(s)
        .map_err(|e| X4PayError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
