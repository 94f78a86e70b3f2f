//! Developer tooling for the input pipeline.

pub mod inspector;

pub use inspector::{FrameEntry, FrameInspector, FrameSummary};
