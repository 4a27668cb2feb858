use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Notification sent from inside a tree walk to the host.
///
/// Signals are dumb data: a tag plus two numeric payload slots, enough to
/// say "this happened, about these ids" without the engine knowing anything
/// about the host's event model. Static tags don't allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signal {
    pub tag: Cow<'static, str>,
    pub a: u64,
    pub b: u64,
}

impl Signal {
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            a: 0,
            b: 0,
        }
    }

    pub fn with_a(mut self, a: u64) -> Self {
        self.a = a;
        self
    }

    pub fn with_b(mut self, b: u64) -> Self {
        self.b = b;
        self
    }
}

/// Host-side receiver for signals emitted during evaluation.
pub trait SignalSink {
    fn emit(&mut self, signal: Signal);
}

/// Sink that drops every signal. For hosts that don't listen.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSignalSink;

impl SignalSink for NullSignalSink {
    fn emit(&mut self, _signal: Signal) {}
}

/// Sink that keeps every signal in emission order. For tests and replays.
#[derive(Debug, Default)]
pub struct VecSignalSink {
    pub signals: Vec<Signal>,
}

impl VecSignalSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SignalSink for VecSignalSink {
    fn emit(&mut self, signal: Signal) {
        self.signals.push(signal);
    }
}
