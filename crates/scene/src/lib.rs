//! Scene graph: named nodes with world transforms, typed selector resolution.
//!
//! # Invariants
//! - Selectors resolve to typed [`NodeId`](handspace_common::NodeId) handles;
//!   a handle outliving its node is a typed error on lookup, never a panic.
//! - Iteration order is deterministic (BTreeMap).

pub mod graph;

pub use graph::{Node, SceneError, SceneGraph};
