#![cfg(feature = "serde")]

use grove_tools::{TraceEvent, TraceLog};

#[test]
fn trace_log_roundtrips_through_json() {
    let mut log = TraceLog::new();
    log.push(TraceEvent::new(0, "tree.running").with_a(9));
    log.push(TraceEvent::new(1, "selector.resume").with_a(4).with_b(2));
    log.push(TraceEvent::new(1, "tree.success").with_a(9));

    let json = serde_json::to_string(&log).unwrap();
    let back: TraceLog = serde_json::from_str(&json).unwrap();
    assert_eq!(back, log);
    assert_eq!(back.events[1].b, 2);
}
