use glam::{Quat, Vec3};
use handspace_common::Handedness;

/// One button's raw state as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonState {
    pub pressed: bool,
    pub touched: bool,
    /// Analog pull in `[0, 1]`.
    pub value: f32,
}

/// Tracking-space pose. Position and orientation can be independently absent
/// when the sensor loses them; both are required for grip synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DevicePose {
    pub position: Option<Vec3>,
    pub orientation: Option<Quat>,
}

/// Raw device state, polled from the device-enumeration layer once per tick.
///
/// Read-only from the pipeline's view; the pipeline copies fields out and
/// never mutates or retains the snapshot.
#[derive(Debug, Clone, Default)]
pub struct DeviceSnapshot {
    pub connected: bool,
    /// Stable device index assigned by the enumeration layer.
    pub index: u32,
    /// Hand identity, unknown until the runtime reports it.
    pub hand: Option<Handedness>,
    pub buttons: Vec<ButtonState>,
    /// Axis values in `[-1, 1]`.
    pub axes: Vec<f32>,
    pub pose: DevicePose,
}
