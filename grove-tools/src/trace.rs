use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use grove_core::{AttrKey, Attributes};

/// One trace record from inside an evaluation walk.
///
/// Events are small: a tick index, a tag, and two numeric payload slots
/// whose meaning depends on the tag. `a` usually carries a node id. Static
/// tags don't allocate, so tracing a hot walk stays close to free when no
/// log is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub tag: Cow<'static, str>,
    pub a: u64,
    pub b: u64,
}

impl TraceEvent {
    pub fn new(tick: u64, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tick,
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

/// Ordered collection of trace events for one actor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Events whose tag matches exactly, in recorded order.
    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a TraceEvent> + 'a {
        self.events.iter().filter(move |e| e.tag == tag)
    }
}

/// Attribute slot where a host installs the per-actor trace log.
///
/// Tracing is opt-in per actor: install a [`TraceLog`] under this key and
/// the instrumented nodes start recording; leave it out and [`emit`] is a
/// lookup miss and nothing else.
pub const TRACE_LOG: AttrKey<TraceLog> = AttrKey::new(0xB7_00AC_E000_0001);

/// Record `event` into the actor's trace log, if one is installed.
pub fn emit(attrs: &mut Attributes, event: TraceEvent) {
    if let Some(log) = attrs.get_mut(TRACE_LOG) {
        log.push(event);
    }
}
