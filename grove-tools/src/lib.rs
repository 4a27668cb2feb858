//! Debug tooling for behavior tree evaluation.
//!
//! The engine's only observability hook lives here: small [`TraceEvent`]
//! records that instrumented nodes append to a per-actor [`TraceLog`]. The
//! log is an ordinary attribute slot, so hosts turn tracing on per actor by
//! installing a log and read it back whenever they like; there is no global
//! collector and no background thread.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{emit, TraceEvent, TraceLog, TRACE_LOG};
