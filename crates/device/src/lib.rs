//! Tracked-controller input: one binding per connected device, one tick call
//! per simulation tick.
//!
//! Each tick runs three stages in strict order: mirror every raw button/axis
//! into device-indexed frame paths, remap a profiled subset into semantic
//! per-hand paths, then synthesize the grip transform and the pointing ray.
//!
//! # Invariants
//! - The semantic remapper reads back the frame paths the mirror just wrote,
//!   never the snapshot directly.
//! - Hand resolution is a one-way latch; the semantic path table is rebuilt
//!   at most once per binding.
//! - A disconnected device skips the entire tick without writing anything.

pub mod controller;
pub mod profile;
pub mod snapshot;

pub use controller::{ControllerConfig, DeviceError, TickContext, TrackedController};
pub use profile::{AxisBinding, ButtonBinding, DeviceProfile, ProfileError};
pub use snapshot::{ButtonState, DevicePose, DeviceSnapshot};
