//! Chunked message reassembly (panic-free).
//!
//! The wireless link's single write cannot carry a full payment payload, so
//! the client splits it: `<TAG>:START<data>`, `<TAG><data>`, ...,
//! `<TAG>:END<data>`. One assembler instance exists per channel and
//! accumulates until `END`.
//!
//! Parsing rules:
//! - Never index into the message — always prefix-match.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.

/// Logical channel a chunk stream belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Payment payload chunks (`X-PAYMENT` tag).
    Payment,
    /// Price-query chunks (`[PRICE]` tag).
    Price,
}

impl Channel {
    fn start_marker(self) -> &'static str {
        match self {
            Channel::Payment => "X-PAYMENT:START",
            Channel::Price => "[PRICE]:START",
        }
    }

    fn end_marker(self) -> &'static str {
        match self {
            Channel::Payment => "X-PAYMENT:END",
            Channel::Price => "[PRICE]:END",
        }
    }

    fn continuation_marker(self) -> &'static str {
        match self {
            Channel::Payment => "X-PAYMENT",
            Channel::Price => "[PRICE]:",
        }
    }

    /// Expected payload size, reserved up front on `START`.
    fn expected_capacity(self) -> usize {
        match self {
            Channel::Payment => 1024,
            Channel::Price => 512,
        }
    }

    /// Channel name for logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Payment => "payment",
            Channel::Price => "price",
        }
    }
}

/// Outcome of feeding one inbound message to the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyState {
    /// Chunk accepted; the message is not complete yet.
    Incomplete,
    /// `END` received; the fully reassembled message. Reported exactly once.
    Complete(String),
    /// The message does not carry this channel's tag; no state change.
    Ignored,
    /// Continuation or `END` arrived without a preceding `START`.
    /// The stale buffer is discarded rather than silently appended to.
    OutOfOrder,
}

/// Accumulates one logical message per channel.
#[derive(Debug)]
pub struct ChunkAssembler {
    channel: Channel,
    buf: String,
    in_progress: bool,
}

impl ChunkAssembler {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            buf: String::new(),
            in_progress: false,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// True while a `START` has been seen and no `END` yet.
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Feed one inbound message. Marker precedence matters: `START` and
    /// `END` both begin with the continuation tag, so they are checked
    /// first.
    pub fn feed(&mut self, msg: &str) -> AssemblyState {
        if let Some(rest) = msg.strip_prefix(self.channel.start_marker()) {
            self.buf.clear();
            self.buf.reserve(self.channel.expected_capacity());
            self.buf.push_str(rest);
            self.in_progress = true;
            return AssemblyState::Incomplete;
        }

        if let Some(rest) = msg.strip_prefix(self.channel.end_marker()) {
            if !self.in_progress {
                tracing::warn!(channel = self.channel.name(), "END without START");
                self.buf.clear();
                return AssemblyState::OutOfOrder;
            }
            self.buf.push_str(rest);
            self.in_progress = false;
            return AssemblyState::Complete(std::mem::take(&mut self.buf));
        }

        if let Some(rest) = msg.strip_prefix(self.channel.continuation_marker()) {
            if !self.in_progress {
                tracing::warn!(channel = self.channel.name(), "continuation without START");
                self.buf.clear();
                return AssemblyState::OutOfOrder;
            }
            self.buf.push_str(rest);
            return AssemblyState::Incomplete;
        }

        AssemblyState::Ignored
    }

    /// Discard any partial assembly.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.in_progress = false;
    }
}
