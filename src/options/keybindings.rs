use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::keyboard::KeyAction;

/// Configurable keyboard bindings mapping actions to key codes.
///
/// Serializes transparently as an action → key table, so a TOML options
/// file reads naturally:
/// ```toml
/// [keybindings]
/// move_forward = "KeyW"
/// toggle_fly = "KeyF"
/// ```
/// Actions omitted from the table are simply unbound.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(
    from = "HashMap<KeyAction, String>",
    into = "HashMap<KeyAction, String>"
)]
pub struct KeybindingOptions {
    /// Forward map: action → key string (e.g. `MoveForward` → `"KeyW"`).
    bindings: HashMap<KeyAction, String>,
    /// Reverse lookup (key string → action), rebuilt on construction.
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        HashMap::from([
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveBackward, "KeyS".into()),
            (KeyAction::StrafeLeft, "KeyA".into()),
            (KeyAction::StrafeRight, "KeyD".into()),
            (KeyAction::ToggleFly, "KeyF".into()),
        ])
        .into()
    }
}

impl From<HashMap<KeyAction, String>> for KeybindingOptions {
    fn from(bindings: HashMap<KeyAction, String>) -> Self {
        let key_to_action = bindings
            .iter()
            .map(|(action, key)| (key.clone(), *action))
            .collect();
        Self {
            bindings,
            key_to_action,
        }
    }
}

impl From<KeybindingOptions> for HashMap<KeyAction, String> {
    fn from(opts: KeybindingOptions) -> Self {
        opts.bindings
    }
}

impl KeybindingOptions {
    /// Look up the action for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Bind `action` to `key`, replacing any previous binding of either.
    pub fn bind(&mut self, action: KeyAction, key: &str) {
        self.bindings.retain(|_, bound| bound != key);
        if let Some(old_key) = self.bindings.insert(action, key.to_owned()) {
            let _ = self.key_to_action.remove(&old_key);
        }
        let _ = self.key_to_action.insert(key.to_owned(), action);
    }
}
