//! Core contracts for deterministic behavior tree evaluation.
//!
//! The pieces every node library and host agree on: the [`Outcome`] a node
//! reports, the [`Node`] contract, typed per-actor [`Attributes`], the
//! per-tick [`TickContext`], and the [`Signal`] channel back to the host.
//! A tree is immutable once built; all mutable evaluation state is keyed
//! onto the actor, which is what lets one tree value serve any number of
//! actors. Concrete nodes live in `grove-nodes`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod actor;
pub mod attrs;
pub mod error;
pub mod node;
pub mod outcome;
pub mod signal;
pub mod tick;

pub use actor::Actor;
pub use attrs::{AttrKey, Attributes};
pub use error::EvalError;
pub use node::{Node, NodeId};
pub use outcome::Outcome;
pub use signal::{NullSignalSink, Signal, SignalSink, VecSignalSink};
pub use tick::TickContext;
