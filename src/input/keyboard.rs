use serde::{Deserialize, Serialize};

/// Camera-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay
/// readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// toggle_fly = "KeyF"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move toward the look direction (held).
    MoveForward,
    /// Move away from the look direction (held).
    MoveBackward,
    /// Strafe left (held).
    StrafeLeft,
    /// Strafe right (held).
    StrafeRight,
    /// Switch between walking and free flight (press).
    ToggleFly,
}
