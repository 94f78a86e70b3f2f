//! Per-tick input frame buffer with interned path addressing.
//!
//! Device bindings publish normalized controller state into an [`InputFrame`]
//! under opaque [`PathKey`]s. Path strings are interned once, at binding time;
//! the per-tick hot loop only touches integer keys.
//!
//! # Invariants
//! - Interning the same path twice yields the same key.
//! - Frame contents are scoped to a single tick; the caller clears the frame
//!   with [`InputFrame::begin_tick`] before handing it to device bindings.
//! - Iteration order over frame entries is deterministic (BTreeMap).

pub mod frame;
pub mod registry;
pub mod tables;

pub use frame::{InputFrame, Value};
pub use registry::{PathKey, PathRegistry};
pub use tables::{ButtonPaths, RawPathTable, SemanticPathTable};
