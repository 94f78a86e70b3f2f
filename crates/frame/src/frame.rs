use crate::registry::{PathKey, PathRegistry};
use glam::Mat4;
use handspace_common::Pose;
use std::collections::BTreeMap;

/// A value published into the frame at some path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bool(bool),
    Float(f32),
    Pose(Pose),
    Matrix(Mat4),
}

impl Value {
    /// Truthiness coercion: booleans pass through, floats are true when
    /// non-zero, structured values are always true.
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Float(f) => *f != 0.0,
            Value::Pose(_) | Value::Matrix(_) => true,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_pose(&self) -> Option<Pose> {
        match self {
            Value::Pose(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<Mat4> {
        match self {
            Value::Matrix(m) => Some(*m),
            _ => None,
        }
    }
}

/// The per-tick frame buffer all device bindings write into.
///
/// Owns the path registry so keys and values share one lifetime. Each device
/// binding writes a disjoint subset of paths; the frame performs no locking
/// and is driven by exactly one thread.
#[derive(Debug, Default)]
pub struct InputFrame {
    registry: PathRegistry,
    values: BTreeMap<PathKey, Value>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the previous tick's values. Interned paths survive.
    pub fn begin_tick(&mut self) {
        self.values.clear();
    }

    /// Access the path registry for binding-time interning.
    pub fn paths_mut(&mut self) -> &mut PathRegistry {
        &mut self.registry
    }

    pub fn paths(&self) -> &PathRegistry {
        &self.registry
    }

    /// Write a value, overwriting any value written earlier this tick.
    pub fn set(&mut self, key: PathKey, value: Value) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: PathKey) -> Option<&Value> {
        self.values.get(&key)
    }

    /// Number of paths written this tick.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Deterministic iteration over this tick's writes.
    pub fn entries(&self) -> impl Iterator<Item = (PathKey, &Value)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }
}
