#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use x4pay_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
device:
  name: "vend-01"
  price: "10000"
  pay_to: "0xabc"
payment:
  queue_capacityy: 8 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
device:
  name: "vend-01"
  price: "10000"
  pay_to: "0xabc"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.device.network, "base-sepolia");
    assert_eq!(cfg.device.facilitator, "https://www.x402.org/facilitator");
    assert_eq!(cfg.payment.http_timeout_secs, 60);
    assert_eq!(cfg.payment.queue_capacity, 4);
    assert!(!cfg.payment.allow_custom_content);
}

#[test]
fn empty_pay_to_rejected() {
    let bad = r#"
version: 1
device:
  name: "vend-01"
  price: "10000"
  pay_to: ""
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn zero_queue_capacity_rejected() {
    let bad = r#"
version: 1
device:
  name: "vend-01"
  price: "10000"
  pay_to: "0xabc"
payment:
  queue_capacity: 0
"#;
    assert!(config::load_from_str(bad).is_err());
}
