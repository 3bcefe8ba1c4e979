//! Payment requirements document and pricing resolution.
//!
//! Requirements are rebuilt per job, never cached: the quoted price may
//! change with every selection/context combination.

use serde::Serialize;

use crate::config::DeviceConfig;
use crate::hooks::Hooks;

/// On-chain settlement asset for a network (USDC flavors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetInfo {
    pub address: &'static str,
    pub name: &'static str,
}

const NETWORK_CHAIN_IDS: &[(&str, u32)] = &[
    ("base-sepolia", 84532),
    ("base", 8453),
    ("avalanche-fuji", 43113),
    ("avalanche", 43114),
    ("iotex", 4689),
    ("sei", 1329),
    ("sei-testnet", 1328),
    ("polygon", 137),
    ("polygon-amoy", 80002),
    ("peaq", 3338),
];

const CHAIN_USDC: &[(u32, AssetInfo)] = &[
    (84532, AssetInfo { address: "0x036CbD53842c5426634e7929541eC2318f3dCF7e", name: "USDC" }),
    (8453, AssetInfo { address: "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913", name: "USD Coin" }),
    (43113, AssetInfo { address: "0x5425890298aed601595a70AB815c96711a31Bc65", name: "USD Coin" }),
    (43114, AssetInfo { address: "0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E", name: "USD Coin" }),
    (4689, AssetInfo { address: "0xcdf79194c6c285077a58da47641d4dbe51f63542", name: "Bridged USDC" }),
    (1328, AssetInfo { address: "0x4fcf1784b31630811181f670aea7a7bef803eaed", name: "USDC" }),
    (1329, AssetInfo { address: "0xe15fc38f6d8c56af07bbcbe3baf5708a2bf42392", name: "USDC" }),
    (137, AssetInfo { address: "0x3c499c542cef5e3811e1192ce70d8cc03d5c3359", name: "USD Coin" }),
    (80002, AssetInfo { address: "0x41E94Eb019C0762f9Bfcf9Fb1E58725BfB0e7582", name: "USDC" }),
    (3338, AssetInfo { address: "0xbbA60da06c2c5424f03f7434542280FCAd453d10", name: "USDC" }),
];

/// Look up the settlement asset for a network name. An unknown network is
/// not an error: empty asset fields flow downstream and verification
/// simply uses an empty asset identifier.
pub fn asset_for_network(network: &str) -> AssetInfo {
    NETWORK_CHAIN_IDS
        .iter()
        .find(|(name, _)| *name == network)
        .and_then(|(_, chain_id)| {
            CHAIN_USDC
                .iter()
                .find(|(id, _)| id == chain_id)
                .map(|(_, asset)| *asset)
        })
        .unwrap_or(AssetInfo {
            address: "",
            name: "",
        })
}

/// Canonical payment-requirements document, immutable once built.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequirements {
    pub scheme: String,
    pub network: String,
    pub max_amount_required: String,
    pub resource: String,
    pub description: String,
    pub mime_type: String,
    pub pay_to: String,
    pub max_timeout_seconds: u32,
    pub asset: String,
    pub extra: RequirementsExtra,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequirementsExtra {
    pub name: String,
    pub version: String,
}

/// Build the requirements document for one job. The device logo doubles as
/// the resource URL, matching what clients already render.
pub fn build_requirements(cfg: &DeviceConfig, price: &str) -> PaymentRequirements {
    let asset = asset_for_network(&cfg.device.network);
    PaymentRequirements {
        scheme: "exact".into(),
        network: cfg.device.network.clone(),
        max_amount_required: price.to_owned(),
        resource: cfg.device.logo.clone(),
        description: cfg.device.description.clone(),
        mime_type: "application/json".into(),
        pay_to: cfg.device.pay_to.clone(),
        max_timeout_seconds: 300,
        asset: asset.address.into(),
        extra: RequirementsExtra {
            name: asset.name.into(),
            version: "2".into(),
        },
    }
}

/// Dynamic price when a hook is registered, static config price otherwise.
pub fn resolve_price(
    cfg: &DeviceConfig,
    hooks: &Hooks,
    options: &[String],
    custom_context: &str,
) -> String {
    match &hooks.price {
        Some(hook) => hook.price(options, custom_context),
        None => cfg.device.price.clone(),
    }
}
