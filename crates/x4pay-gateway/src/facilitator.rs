//! HTTP client for the remote facilitator's `/verify` and `/settle`
//! endpoints.
//!
//! Both calls POST `{"x402Version": <int>, "paymentPayload": <raw>,
//! "paymentRequirements": <raw>}`. The signed payment object passes
//! through as `RawValue` so its bytes reach the facilitator untouched.
//! Response bodies are not parsed as JSON; the few decision fields are
//! pulled out with the core extractor.

use std::time::Duration;

use serde::Serialize;
use serde_json::value::RawValue;

use x4pay_core::protocol::envelope::PaymentPayload;
use x4pay_core::protocol::extract::{extract_field, field_is_true};

pub struct FacilitatorClient {
    base: String,
    client: reqwest::Client,
    timeout: Duration,
}

/// Raw outcome of one facilitator call.
#[derive(Debug)]
struct FacilitatorResponse {
    /// HTTP status was 2xx.
    success: bool,
    status: u16,
    body: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FacilitatorRequest<'a> {
    x402_version: u32,
    payment_payload: &'a RawValue,
    payment_requirements: &'a RawValue,
}

/// Settlement result: transaction hash plus payer address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub transaction: String,
    pub payer: String,
}

impl FacilitatorClient {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base: base.into(),
            client: reqwest::Client::new(),
            timeout,
        }
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base.trim_end_matches('/'))
    }

    /// Serialize the request body. Returns `None` when the client sent
    /// payment JSON that is not even syntactically valid; callers treat
    /// that as a verification failure, not a crash.
    fn request_body(payload: &PaymentPayload, requirements: &str) -> Option<String> {
        let payment: &RawValue = match serde_json::from_str(&payload.payload_json) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "payment payload is not valid JSON");
                return None;
            }
        };
        let requirements: &RawValue = match serde_json::from_str(requirements) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "requirements document is not valid JSON");
                return None;
            }
        };
        let req = FacilitatorRequest {
            x402_version: payload.x402_version.parse().unwrap_or(1),
            payment_payload: payment,
            payment_requirements: requirements,
        };
        match serde_json::to_string(&req) {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!(error = %e, "request body encode failed");
                None
            }
        }
    }

    async fn post(&self, endpoint: &str, body: String) -> FacilitatorResponse {
        let url = self.endpoint_url(endpoint);
        let result = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .body(body)
            .send()
            .await;

        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(%url, error = %e, "facilitator request failed");
                return FacilitatorResponse {
                    success: false,
                    status: 0,
                    body: String::new(),
                };
            }
        };

        let status = resp.status().as_u16();
        let success = resp.status().is_success();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(%url, error = %e, "facilitator body read failed");
                return FacilitatorResponse {
                    success: false,
                    status,
                    body: String::new(),
                };
            }
        };

        FacilitatorResponse {
            success,
            status,
            body,
        }
    }

    /// True iff the HTTP call succeeded (2xx) and the response says
    /// `isValid: true`. Every other outcome, transport failure included,
    /// is a verification failure.
    pub async fn verify(&self, payload: &PaymentPayload, requirements: &str) -> bool {
        let Some(body) = Self::request_body(payload, requirements) else {
            return false;
        };
        let resp = self.post("verify", body).await;
        if !resp.success {
            tracing::warn!(status = resp.status, "verify HTTP call failed");
            return false;
        }
        let is_valid = field_is_true(&resp.body, "isValid");
        if !is_valid {
            match extract_field(&resp.body, "invalidReason") {
                Some(reason) if !reason.is_empty() => {
                    tracing::warn!(%reason, "payment verification rejected")
                }
                _ => tracing::warn!("payment verification rejected"),
            }
        }
        is_valid
    }

    /// Only attempted after `verify` succeeds. Settlement counts only when
    /// the status is exactly 200, `success` is true, and a non-empty
    /// transaction hash is present in the body.
    pub async fn settle(
        &self,
        payload: &PaymentPayload,
        requirements: &str,
    ) -> Option<Settlement> {
        let body = Self::request_body(payload, requirements)?;
        let resp = self.post("settle", body).await;
        if resp.status != 200 {
            tracing::warn!(status = resp.status, "settle HTTP call failed");
            return None;
        }
        if !field_is_true(&resp.body, "success") {
            tracing::warn!("settlement reported failure");
            return None;
        }
        let transaction = extract_field(&resp.body, "transaction").unwrap_or_default();
        if transaction.is_empty() {
            tracing::warn!("settlement body carried no transaction hash");
            return None;
        }
        let payer = extract_field(&resp.body, "payer").unwrap_or_default();
        Some(Settlement { transaction, payer })
    }
}
