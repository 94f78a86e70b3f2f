use handspace_frame::{InputFrame, Value};
use serde_json::json;

/// Input frame inspector for developer tooling.
///
/// Provides read-only, deterministically ordered views of a tick's frame
/// writes for debugging and CLI output.
pub struct FrameInspector;

impl FrameInspector {
    /// Produce a summary of the frame state.
    pub fn summary(frame: &InputFrame) -> FrameSummary {
        FrameSummary {
            writes: frame.len(),
            interned_paths: frame.paths().len(),
        }
    }

    /// List this tick's writes as (path, formatted value) pairs, in path-key
    /// order.
    pub fn entries(frame: &InputFrame) -> Vec<FrameEntry> {
        frame
            .entries()
            .map(|(key, value)| FrameEntry {
                path: frame.paths().name(key).unwrap_or("<unknown>").to_owned(),
                value: format_value(value),
            })
            .collect()
    }

    /// Render this tick's writes as a JSON object keyed by path.
    pub fn to_json(frame: &InputFrame) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (key, value) in frame.entries() {
            let path = frame.paths().name(key).unwrap_or("<unknown>").to_owned();
            map.insert(path, value_to_json(value));
        }
        serde_json::Value::Object(map)
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Float(f) => format!("{f:.3}"),
        Value::Pose(p) => format!(
            "pose origin=({:.2}, {:.2}, {:.2}) dir=({:.2}, {:.2}, {:.2})",
            p.origin.x, p.origin.y, p.origin.z, p.direction.x, p.direction.y, p.direction.z
        ),
        Value::Matrix(m) => {
            let t = m.w_axis;
            format!("matrix t=({:.2}, {:.2}, {:.2})", t.x, t.y, t.z)
        }
    }
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Bool(b) => json!(b),
        Value::Float(f) => json!(f),
        Value::Pose(p) => json!({
            "origin": [p.origin.x, p.origin.y, p.origin.z],
            "direction": [p.direction.x, p.direction.y, p.direction.z],
        }),
        Value::Matrix(m) => json!(m.to_cols_array().to_vec()),
    }
}

/// Summary of a frame's tick state.
#[derive(Debug, Clone)]
pub struct FrameSummary {
    pub writes: usize,
    pub interned_paths: usize,
}

impl std::fmt::Display for FrameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Frame: writes={} interned_paths={}",
            self.writes, self.interned_paths
        )
    }
}

/// One formatted frame write.
#[derive(Debug, Clone)]
pub struct FrameEntry {
    pub path: String,
    pub value: String,
}

impl std::fmt::Display for FrameEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.path, self.value)
    }
}
