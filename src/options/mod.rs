//! Centralized walkthrough configuration with TOML preset support.
//!
//! Camera projection, orbit controls, the bounding volume, named
//! viewpoints and key bindings are consolidated here. Options serialize
//! to/from TOML; the web host passes the same structure as JSON.

mod camera;
mod controls;
mod keybindings;
mod navigation;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use keybindings::KeybindingOptions;
pub use navigation::NavigationOptions;
use serde::{Deserialize, Serialize};

use crate::camera::BoundingVolume;
use crate::error::WalkthroughError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[bounds]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Orbit gesture parameters.
    pub controls: ControlOptions,
    /// Legal region for the camera and its target.
    pub bounds: BoundingVolume,
    /// Start pose, easing, and viewpoints.
    pub navigation: NavigationOptions,
    /// Keyboard shortcuts.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, WalkthroughError> {
        let content =
            std::fs::read_to_string(path).map_err(WalkthroughError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!(
            "loaded options from {} ({} viewpoints)",
            path.display(),
            options.navigation.viewpoints.len()
        );
        Ok(options)
    }

    /// Parse options from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, WalkthroughError> {
        toml::from_str(content)
            .map_err(|e| WalkthroughError::OptionsParse(e.to_string()))
    }

    /// Parse options from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, WalkthroughError> {
        serde_json::from_str(content)
            .map_err(|e| WalkthroughError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), WalkthroughError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WalkthroughError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(WalkthroughError::Io)?;
        }
        std::fs::write(path, content).map_err(WalkthroughError::Io)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[bounds]
max_x = 6.0

[navigation.viewpoints.desk]
position = [0.0, 1.5, 1.0]
target = [0.0, 1.0, -1.0]
duration = 0.8
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.bounds.max_x, 6.0);
        assert_eq!(opts.bounds.min_x, -16.0);

        // An explicit viewpoint table replaces the default set
        let desk = &opts.navigation.viewpoints["desk"];
        assert_eq!(desk.position, Vec3::new(0.0, 1.5, 1.0));
        assert_eq!(desk.duration, 0.8);
        assert!(!opts.navigation.viewpoints.contains_key("home"));

        assert_eq!(opts.navigation.easing, EasingFunction::QuadraticInOut);
        assert_eq!(opts.keybindings.lookup("Digit1"), Some("home"));
    }

    #[test]
    fn json_options_parse() {
        let json = r#"{ "controls": { "enable_damping": false } }"#;
        let opts = Options::from_json(json).unwrap();
        assert!(!opts.controls.enable_damping);
        assert!(opts.controls.enable_rotate);
    }

    #[test]
    fn invalid_toml_is_an_options_error() {
        let err = Options::from_toml("bounds = 3").unwrap_err();
        assert!(matches!(err, WalkthroughError::OptionsParse(_)));
    }

    #[test]
    fn easing_is_configurable() {
        let opts = Options::from_toml(
            "[navigation]\neasing = \"linear\"\n",
        )
        .unwrap();
        assert_eq!(opts.navigation.easing, EasingFunction::Linear);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = std::env::temp_dir()
            .join(format!("walkthrough-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let opts = Options::default();
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(opts, loaded);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
