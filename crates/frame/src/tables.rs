use crate::registry::{PathKey, PathRegistry};
use handspace_common::Handedness;
use std::collections::BTreeMap;

/// The pressed/touched/value key triple addressing one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPaths {
    pub pressed: PathKey,
    pub touched: PathKey,
    pub value: PathKey,
}

impl ButtonPaths {
    fn intern(registry: &mut PathRegistry, base: &str) -> Self {
        Self {
            pressed: registry.intern(&format!("{base}/pressed")),
            touched: registry.intern(&format!("{base}/touched")),
            value: registry.intern(&format!("{base}/value")),
        }
    }
}

/// Device-indexed raw paths for a tracked controller's buttons and axes.
///
/// Built at binding time for the control counts the device model declares and
/// grown on demand if a snapshot reports more controls. Keys are interned
/// exactly once either way.
#[derive(Debug)]
pub struct RawPathTable {
    device_index: u32,
    buttons: Vec<ButtonPaths>,
    axes: Vec<PathKey>,
}

impl RawPathTable {
    pub fn new(
        registry: &mut PathRegistry,
        device_index: u32,
        button_count: usize,
        axis_count: usize,
    ) -> Self {
        let mut table = Self {
            device_index,
            buttons: Vec::new(),
            axes: Vec::new(),
        };
        table.ensure_buttons(registry, button_count);
        table.ensure_axes(registry, axis_count);
        table
    }

    pub fn device_index(&self) -> u32 {
        self.device_index
    }

    /// Extend the button paths up to `count` entries.
    pub fn ensure_buttons(&mut self, registry: &mut PathRegistry, count: usize) {
        for i in self.buttons.len()..count {
            let base = format!("/device/gamepad/{}/button/{}", self.device_index, i);
            self.buttons.push(ButtonPaths::intern(registry, &base));
        }
    }

    /// Extend the axis paths up to `count` entries.
    pub fn ensure_axes(&mut self, registry: &mut PathRegistry, count: usize) {
        for i in self.axes.len()..count {
            let path = format!("/device/gamepad/{}/axis/{}", self.device_index, i);
            self.axes.push(registry.intern(&path));
        }
    }

    pub fn button(&self, index: usize) -> Option<ButtonPaths> {
        self.buttons.get(index).copied()
    }

    pub fn axis(&self, index: usize) -> Option<PathKey> {
        self.axes.get(index).copied()
    }

    pub fn buttons(&self) -> &[ButtonPaths] {
        &self.buttons
    }

    pub fn axes(&self) -> &[PathKey] {
        &self.axes
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }
}

/// Semantically named per-hand paths for one device model.
///
/// Built exactly once, when the controller's hand identity becomes known, and
/// stable thereafter.
#[derive(Debug)]
pub struct SemanticPathTable {
    buttons: BTreeMap<String, ButtonPaths>,
    axes: BTreeMap<String, PathKey>,
    pose: PathKey,
    matrix: PathKey,
}

impl SemanticPathTable {
    pub fn new(
        registry: &mut PathRegistry,
        device: &str,
        hand: Handedness,
        button_names: &[&str],
        axis_names: &[&str],
    ) -> Self {
        let root = format!("/device/{device}/{hand}");
        let buttons = button_names
            .iter()
            .map(|name| {
                let base = format!("{root}/{name}");
                (name.to_string(), ButtonPaths::intern(registry, &base))
            })
            .collect();
        let axes = axis_names
            .iter()
            .map(|name| {
                let path = format!("{root}/axis/{name}");
                (name.to_string(), registry.intern(&path))
            })
            .collect();
        Self {
            buttons,
            axes,
            pose: registry.intern(&format!("{root}/pose")),
            matrix: registry.intern(&format!("{root}/matrix")),
        }
    }

    pub fn button(&self, name: &str) -> Option<ButtonPaths> {
        self.buttons.get(name).copied()
    }

    pub fn axis(&self, name: &str) -> Option<PathKey> {
        self.axes.get(name).copied()
    }

    pub fn pose(&self) -> PathKey {
        self.pose
    }

    pub fn matrix(&self) -> PathKey {
        self.matrix
    }
}
