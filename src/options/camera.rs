use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera feel parameters.
pub struct CameraOptions {
    /// Pointer-delta multiplier for look rotation, degrees per count.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub sensitivity: f32,
    /// Speed multiplier applied to movement while flying.
    #[schemars(title = "Flight Speed", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub fly_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            sensitivity: 0.14,
            fly_speed: 5.0,
        }
    }
}
