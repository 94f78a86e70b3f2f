//! Shared types for the handspace input pipeline.
//!
//! # Invariants
//! - `Pose::direction` is expected to be unit length; constructors preserve it.
//! - Types here carry no device- or scene-specific behavior.

pub mod types;

pub use types::{Handedness, NodeId, Pose, Transform};
