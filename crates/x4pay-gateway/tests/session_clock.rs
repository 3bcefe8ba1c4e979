//! Session state and wraparound clock tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use x4pay_gateway::session::SessionState;

#[test]
fn no_payment_yet_reports_zero_elapsed() {
    let s = SessionState::new();
    assert_eq!(s.micros_since_last_payment(123_456), 0);
}

#[test]
fn elapsed_without_wrap() {
    let s = SessionState::new();
    s.record_success("0xabc", "0x1", &[], "", 1_000);
    assert_eq!(s.micros_since_last_payment(5_000), 4_000);
}

#[test]
fn elapsed_across_counter_wrap() {
    let s = SessionState::new();
    s.record_success("0xabc", "0x1", &[], "", u32::MAX - 10);
    // Counter wrapped: 10 ticks to the top, then 5 past zero.
    assert_eq!(s.micros_since_last_payment(5), 16);
}

#[test]
fn zero_stamp_still_counts_as_paid() {
    let s = SessionState::new();
    s.record_success("0xabc", "0x1", &[], "", 0);
    assert_eq!(s.micros_since_last_payment(7), 7);
}

#[test]
fn status_and_reset_is_read_once() {
    let s = SessionState::new();
    assert!(!s.status_and_reset());

    s.record_success("0xabc", "0xpayer", &["a".into()], "ctx", 1);
    assert!(s.status_and_reset());
    assert!(!s.status_and_reset());

    // The rest of the snapshot survives the flag reset.
    assert_eq!(s.last_tx_hash(), "0xabc");
    assert_eq!(s.last_payer(), "0xpayer");
    assert_eq!(s.user_selected_options(), vec!["a".to_owned()]);
    assert_eq!(s.user_custom_context(), "ctx");
}
