use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Keyboard shortcuts that fly the camera to a named viewpoint.
///
/// Keys use the `winit::keyboard::KeyCode` debug format on native hosts
/// (`"Digit1"`, `"KeyH"`) and `KeyboardEvent.code` on the web, which share
/// the same spelling:
/// ```toml
/// [keybindings.fly_to]
/// Digit1 = "home"
/// KeyP = "projects"
/// ```
pub struct KeybindingOptions {
    /// Maps key string → viewpoint name.
    pub fly_to: BTreeMap<String, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let fly_to = BTreeMap::from([
            ("Digit1".into(), "home".into()),
            ("Digit2".into(), "social".into()),
            ("Digit3".into(), "projects".into()),
            ("KeyH".into(), "home".into()),
        ]);
        Self { fly_to }
    }
}

impl KeybindingOptions {
    /// Look up the viewpoint bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.fly_to.get(key).map(String::as_str)
    }
}
