//! Umbrella crate for the grove behavior tree engine.
//!
//! Pulls the `grove-*` crates together under one roof so hosts depend on a
//! single name. Each member stays usable on its own; the feature flags here
//! just mirror that split.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use grove_core as core;

#[cfg(feature = "nodes")]
#[cfg_attr(docsrs, doc(cfg(feature = "nodes")))]
pub use grove_nodes as nodes;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use grove_tools as tools;
