//! Chunk reassembly state-machine tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use x4pay_core::protocol::chunk::{AssemblyState, Channel, ChunkAssembler};

#[test]
fn payment_sequence_reassembles_in_order() {
    let mut asm = ChunkAssembler::new(Channel::Payment);

    assert_eq!(
        asm.feed("X-PAYMENT:START{\"x402Ver"),
        AssemblyState::Incomplete
    );
    assert_eq!(asm.feed("X-PAYMENTsion\":1,"), AssemblyState::Incomplete);
    assert_eq!(
        asm.feed("X-PAYMENT:END\"scheme\":\"exact\"}--ctx--[a]"),
        AssemblyState::Complete(
            "{\"x402Version\":1,\"scheme\":\"exact\"}--ctx--[a]".to_owned()
        )
    );
    assert!(!asm.in_progress());
}

#[test]
fn complete_reported_exactly_once() {
    let mut asm = ChunkAssembler::new(Channel::Price);
    assert_eq!(asm.feed("[PRICE]:STARTvip"), AssemblyState::Incomplete);
    assert_eq!(
        asm.feed("[PRICE]:END--[opt1]"),
        AssemblyState::Complete("vip--[opt1]".to_owned())
    );
    // A second END has no START behind it anymore.
    assert_eq!(asm.feed("[PRICE]:ENDx"), AssemblyState::OutOfOrder);
}

#[test]
fn start_discards_previous_buffer() {
    let mut asm = ChunkAssembler::new(Channel::Payment);
    asm.feed("X-PAYMENT:STARTstale");
    asm.feed("X-PAYMENT:STARTfresh");
    assert_eq!(
        asm.feed("X-PAYMENT:END!"),
        AssemblyState::Complete("fresh!".to_owned())
    );
}

#[test]
fn foreign_tags_are_ignored_without_state_change() {
    let mut asm = ChunkAssembler::new(Channel::Payment);
    asm.feed("X-PAYMENT:STARTab");
    assert_eq!(asm.feed("[LOGO]"), AssemblyState::Ignored);
    assert_eq!(asm.feed("[PRICE]:STARTzz"), AssemblyState::Ignored);
    assert!(asm.in_progress());
    assert_eq!(
        asm.feed("X-PAYMENT:ENDcd"),
        AssemblyState::Complete("abcd".to_owned())
    );
}

#[test]
fn continuation_without_start_is_out_of_order() {
    let mut asm = ChunkAssembler::new(Channel::Payment);
    assert_eq!(asm.feed("X-PAYMENTorphan"), AssemblyState::OutOfOrder);
    assert_eq!(asm.feed("X-PAYMENT:ENDorphan"), AssemblyState::OutOfOrder);
    // A proper sequence still works afterwards.
    asm.feed("X-PAYMENT:STARTok");
    assert_eq!(
        asm.feed("X-PAYMENT:END!"),
        AssemblyState::Complete("ok!".to_owned())
    );
}

#[test]
fn price_continuation_requires_colon() {
    let mut asm = ChunkAssembler::new(Channel::Price);
    asm.feed("[PRICE]:STARTa");
    assert_eq!(asm.feed("[PRICE]:b"), AssemblyState::Incomplete);
    // Bare "[PRICE]" without the colon is a metadata-style tag, not a chunk.
    assert_eq!(asm.feed("[PRICE]"), AssemblyState::Ignored);
    assert_eq!(
        asm.feed("[PRICE]:ENDc"),
        AssemblyState::Complete("abc".to_owned())
    );
}

#[test]
fn reset_discards_partial_assembly() {
    let mut asm = ChunkAssembler::new(Channel::Payment);
    asm.feed("X-PAYMENT:STARTabc");
    asm.reset();
    assert!(!asm.in_progress());
    assert_eq!(asm.feed("X-PAYMENT:ENDtail"), AssemblyState::OutOfOrder);
}
