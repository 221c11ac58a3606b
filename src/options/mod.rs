//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera feel, keybindings) are consolidated
//! here. Options serialize to/from TOML so a host application can ship
//! control presets.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RoamError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[camera]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera feel parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RoamError> {
        let content = std::fs::read_to_string(path).map_err(RoamError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| RoamError::OptionsParse(e.to_string()))?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RoamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RoamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RoamError::Io)?;
        }
        std::fs::write(path, content).map_err(RoamError::Io)?;
        log::info!("Saved options to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::input::KeyAction;

    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
sensitivity = 0.25
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.sensitivity, 0.25);
        // Everything else should be default
        assert_eq!(opts.camera.fly_speed, 5.0);
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
    }

    #[test]
    fn keybinding_lookup_after_load() {
        let toml_str = r#"
[keybindings]
move_forward = "ArrowUp"
toggle_fly = "KeyV"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("KeyV"), Some(KeyAction::ToggleFly));
        // overriding [keybindings] replaces the whole table
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("camera"));
        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("sensitivity").is_some());
        assert!(camera.get("fly_speed").is_some());
    }

    #[test]
    fn save_then_load_preserves_options() {
        let mut opts = Options::default();
        opts.camera.sensitivity = 0.2;
        opts.keybindings.bind(KeyAction::ToggleFly, "KeyG");

        let path = std::env::temp_dir().join("roam_options_test.toml");
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(opts, loaded);
        assert_eq!(loaded.keybindings.lookup("KeyG"), Some(KeyAction::ToggleFly));
    }
}
