use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading a device profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A semantic button name bound to a raw button index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonBinding {
    pub name: String,
    pub index: usize,
}

/// A semantic axis name bound to a raw axis index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisBinding {
    pub name: String,
    pub index: usize,
}

/// Static description of one controller model: which raw indices carry which
/// semantic controls. Fixed for the lifetime of a device binding.
///
/// Profiles are plain data so new device models ship as YAML files rather
/// than code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub name: String,
    pub buttons: Vec<ButtonBinding>,
    pub axes: Vec<AxisBinding>,
}

impl DeviceProfile {
    /// The HTC Vive wand layout.
    pub fn vive_wand() -> Self {
        let button = |name: &str, index| ButtonBinding {
            name: name.to_owned(),
            index,
        };
        let axis = |name: &str, index| AxisBinding {
            name: name.to_owned(),
            index,
        };
        Self {
            name: "vive".to_owned(),
            buttons: vec![
                button("touchpad", 0),
                button("trigger", 1),
                button("grip", 2),
                button("top", 3),
            ],
            axes: vec![axis("joyX", 0), axis("joyY", 1)],
        }
    }

    pub fn button_names(&self) -> Vec<&str> {
        self.buttons.iter().map(|b| b.name.as_str()).collect()
    }

    pub fn axis_names(&self) -> Vec<&str> {
        self.axes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Raw button slots the profile addresses (highest bound index + 1).
    pub fn raw_button_count(&self) -> usize {
        self.buttons.iter().map(|b| b.index + 1).max().unwrap_or(0)
    }

    /// Raw axis slots the profile addresses (highest bound index + 1).
    pub fn raw_axis_count(&self) -> usize {
        self.axes.iter().map(|a| a.index + 1).max().unwrap_or(0)
    }

    /// Load a profile from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Serialize the profile as YAML.
    pub fn to_yaml(&self) -> Result<String, ProfileError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vive_wand_layout() {
        let profile = DeviceProfile::vive_wand();
        assert_eq!(profile.name, "vive");
        assert_eq!(
            profile.button_names(),
            vec!["touchpad", "trigger", "grip", "top"]
        );
        assert_eq!(profile.axis_names(), vec!["joyX", "joyY"]);
        assert_eq!(profile.raw_button_count(), 4);
        assert_eq!(profile.raw_axis_count(), 2);
    }

    #[test]
    fn raw_counts_follow_highest_index() {
        let profile = DeviceProfile {
            name: "sparse".to_owned(),
            buttons: vec![ButtonBinding {
                name: "menu".to_owned(),
                index: 6,
            }],
            axes: vec![],
        };
        assert_eq!(profile.raw_button_count(), 7);
        assert_eq!(profile.raw_axis_count(), 0);
    }

    #[test]
    fn yaml_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vive.yaml");
        let profile = DeviceProfile::vive_wand();
        std::fs::write(&path, profile.to_yaml().unwrap()).unwrap();

        let loaded = DeviceProfile::from_yaml_file(&path).unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "buttons: [not, a, profile").unwrap();
        assert!(matches!(
            DeviceProfile::from_yaml_file(&path),
            Err(ProfileError::Yaml(_))
        ));
    }
}
