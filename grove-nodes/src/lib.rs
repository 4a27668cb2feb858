//! Leaf actions, decorators, selectors, and the tick driver for grove
//! behavior trees.
//!
//! A tree is built once from boxed [`Node`](grove_core::Node) values and
//! then shared: all mutable evaluation state lives on the actor (see
//! `grove-core`). The
//! [`Tree`] driver is the per-tick entry point; underneath it sit three
//! kinds of node:
//!
//! - leaf actions ([`action`]) that read and write actor attributes,
//! - decorators ([`decorator`]) that wrap a single child,
//! - selectors ([`selector`]) that combine several children, including
//!   the resumable [`Priority`] and [`Sequence`] scans.
//!
//! ```
//! use grove_core::{AttrKey, Attributes, NodeId, NullSignalSink, Outcome, TickContext};
//! use grove_nodes::{CheckValue, Idle, Priority, Sequence, SetValue, Tree};
//!
//! const READY: AttrKey<bool> = AttrKey::new(1);
//! const DONE: AttrKey<bool> = AttrKey::new(2);
//!
//! // Until READY flips, the first branch is a dead end and the actor idles.
//! let tree: Tree<Attributes> = Tree::new(
//!     NodeId::new(100),
//!     Box::new(Priority::new(
//!         NodeId::new(101),
//!         vec![
//!             Box::new(Sequence::new(
//!                 NodeId::new(102),
//!                 vec![
//!                     Box::new(CheckValue::new(READY)),
//!                     Box::new(SetValue::new(DONE, true)),
//!                 ],
//!             )),
//!             Box::new(Idle),
//!         ],
//!     )),
//! );
//!
//! let mut actor = Attributes::new();
//! let mut signals = NullSignalSink;
//!
//! let mut ctx = TickContext::new(0, 0.0, &mut signals);
//! assert_eq!(tree.tick(&mut actor, &mut ctx), Ok(Outcome::Running));
//!
//! actor.set(READY, true);
//! let mut ctx = TickContext::new(1, 0.1, &mut signals);
//! assert_eq!(tree.tick(&mut actor, &mut ctx), Ok(Outcome::Success));
//! assert_eq!(actor.get(DONE), Some(&true));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod decorator;
pub mod driver;
pub mod selector;

pub use action::{
    CheckValue, Condition, Idle, IncreaseValue, SetCurrentTime, SetValue, Task, Truthy, Wait,
};
pub use decorator::{Debounce, EmitOnSuccess, Inverter};
pub use driver::Tree;
pub use selector::{Concurrent, Priority, Sequence};
