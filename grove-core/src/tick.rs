use crate::signal::{Signal, SignalSink};

/// Host-supplied context for one evaluation call.
///
/// The engine has no clock and no event loop of its own; whatever drives the
/// simulation builds one of these per tick and threads it through the walk.
/// `time` must be monotonic non-decreasing across ticks for one actor: the
/// wait and debounce nodes compare stamped times against it and assume time
/// never runs backwards.
pub struct TickContext<'a> {
    /// Index of the current tick.
    pub tick: u64,
    /// Current time in seconds. Monotonic non-decreasing.
    pub time: f64,
    signals: &'a mut dyn SignalSink,
}

impl<'a> TickContext<'a> {
    pub fn new(tick: u64, time: f64, signals: &'a mut dyn SignalSink) -> Self {
        Self {
            tick,
            time,
            signals,
        }
    }

    /// Send a notification to the host through the sink for this tick.
    pub fn emit(&mut self, signal: Signal) {
        self.signals.emit(signal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::VecSignalSink;

    #[test]
    fn emit_forwards_to_the_sink() {
        let mut sink = VecSignalSink::new();
        let mut ctx = TickContext::new(4, 0.4, &mut sink);
        ctx.emit(Signal::new("spotted").with_a(11));
        assert_eq!(sink.signals.len(), 1);
        assert_eq!(sink.signals[0].tag, "spotted");
        assert_eq!(sink.signals[0].a, 11);
    }
}
