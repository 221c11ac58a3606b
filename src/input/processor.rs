//! Converts raw platform events into camera mutations.
//!
//! The `InputProcessor` owns all transient input state (held movement
//! keys, fly-toggle edge detection) and the key-binding map. It is the
//! only thing that sits between raw window events and the camera's
//! [`on_look`](crate::camera::core::Camera::on_look) /
//! [`on_move`](crate::camera::core::Camera::on_move) methods.

use glam::Vec2;

use crate::camera::core::{Camera, MoveDirection};
use crate::input::keyboard::KeyAction;
use crate::options::KeybindingOptions;

/// Converts raw key/pointer events into [`Camera`] calls.
///
/// Movement keys are *held* state: presses and releases flip flags, and
/// a per-frame [`advance`](Self::advance) call drains the held
/// directions into `on_move` commands scaled by the frame's `dt`. The
/// fly toggle is edge-triggered so key repeat does not flap the mode.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// let _ = processor.handle_key(&mut camera, "KeyW", true);
/// processor.handle_pointer_delta(&mut camera, Vec2::new(dx, dy));
///
/// // Once per frame:
/// processor.advance(&mut camera, dt);
/// ```
pub struct InputProcessor {
    /// Key string → action mapping.
    bindings: KeybindingOptions,
    forward_held: bool,
    backward_held: bool,
    left_held: bool,
    right_held: bool,
    /// Tracks the physical fly key so OS key repeat does not re-toggle.
    fly_key_held: bool,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeybindingOptions::default())
    }
}

impl InputProcessor {
    /// Create a processor with the given key bindings.
    #[must_use]
    pub fn new(bindings: KeybindingOptions) -> Self {
        Self {
            bindings,
            forward_held: false,
            backward_held: false,
            left_held: false,
            right_held: false,
            fly_key_held: false,
        }
    }

    /// Replace the key bindings (e.g. after options reload).
    pub fn set_bindings(&mut self, bindings: KeybindingOptions) {
        self.bindings = bindings;
    }

    /// Process a key press/release.
    ///
    /// `key` uses the `winit::keyboard::KeyCode` debug format (`"KeyW"`,
    /// `"Tab"`, ...). Returns `true` if the key was bound to a camera
    /// action.
    pub fn handle_key(
        &mut self,
        camera: &mut Camera,
        key: &str,
        pressed: bool,
    ) -> bool {
        let Some(action) = self.bindings.lookup(key) else {
            return false;
        };
        match action {
            KeyAction::MoveForward => self.forward_held = pressed,
            KeyAction::MoveBackward => self.backward_held = pressed,
            KeyAction::StrafeLeft => self.left_held = pressed,
            KeyAction::StrafeRight => self.right_held = pressed,
            KeyAction::ToggleFly => {
                if pressed && !self.fly_key_held {
                    camera.toggle_flying();
                    log::debug!(
                        "fly mode {}",
                        if camera.is_flying() { "on" } else { "off" }
                    );
                }
                self.fly_key_held = pressed;
            }
        }
        true
    }

    /// Forward a raw pointer delta to the camera's look handler.
    ///
    /// The delta is passed through unscaled; the camera owns sensitivity
    /// and the pointer-warp guard.
    pub fn handle_pointer_delta(&self, camera: &mut Camera, delta: Vec2) {
        camera.on_look(delta.x, delta.y);
    }

    /// Release all held movement keys.
    ///
    /// Call when the window loses focus, otherwise a key released while
    /// unfocused stays held forever.
    pub fn release_all(&mut self) {
        self.forward_held = false;
        self.backward_held = false;
        self.left_held = false;
        self.right_held = false;
        self.fly_key_held = false;
    }

    /// Drain held movement keys into camera movement for this frame.
    ///
    /// `dt` is the frame's elapsed time; each held direction issues one
    /// `on_move` with that delta. Opposing held keys cancel out
    /// positionally by symmetry.
    pub fn advance(&self, camera: &mut Camera, dt: f32) {
        if self.forward_held {
            camera.on_move(MoveDirection::Forward, dt);
        }
        if self.backward_held {
            camera.on_move(MoveDirection::Backward, dt);
        }
        if self.left_held {
            camera.on_move(MoveDirection::Left, dt);
        }
        if self.right_held {
            camera.on_move(MoveDirection::Right, dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn default_bindings_cover_wasd_and_fly() {
        let mut processor = InputProcessor::default();
        let mut camera = Camera::new(Vec3::ZERO);
        assert!(processor.handle_key(&mut camera, "KeyW", true));
        assert!(processor.handle_key(&mut camera, "KeyA", true));
        assert!(processor.handle_key(&mut camera, "KeyS", true));
        assert!(processor.handle_key(&mut camera, "KeyD", true));
        assert!(processor.handle_key(&mut camera, "KeyF", true));
        assert!(!processor.handle_key(&mut camera, "KeyZ", true));
    }

    #[test]
    fn held_key_moves_camera_each_frame() {
        let mut processor = InputProcessor::default();
        let mut camera = Camera::new(Vec3::ZERO);

        let _ = processor.handle_key(&mut camera, "KeyW", true);
        processor.advance(&mut camera, 0.5);
        processor.advance(&mut camera, 0.5);
        assert!((camera.position().z - (-1.0)).abs() < 1e-5);

        let _ = processor.handle_key(&mut camera, "KeyW", false);
        processor.advance(&mut camera, 1.0);
        assert!((camera.position().z - (-1.0)).abs() < 1e-5);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut processor = InputProcessor::default();
        let mut camera = Camera::new(Vec3::ZERO);
        let _ = processor.handle_key(&mut camera, "KeyA", true);
        let _ = processor.handle_key(&mut camera, "KeyD", true);
        processor.advance(&mut camera, 1.0);
        assert!(camera.position().length() < 1e-5);
    }

    #[test]
    fn fly_toggle_is_edge_triggered() {
        let mut processor = InputProcessor::default();
        let mut camera = Camera::new(Vec3::ZERO);

        // press + OS key repeat: only the first press toggles
        let _ = processor.handle_key(&mut camera, "KeyF", true);
        let _ = processor.handle_key(&mut camera, "KeyF", true);
        let _ = processor.handle_key(&mut camera, "KeyF", true);
        assert!(camera.is_flying());

        let _ = processor.handle_key(&mut camera, "KeyF", false);
        let _ = processor.handle_key(&mut camera, "KeyF", true);
        assert!(!camera.is_flying());
    }

    #[test]
    fn pointer_delta_reaches_look_handler() {
        let processor = InputProcessor::default();
        let mut camera = Camera::new(Vec3::ZERO);
        processor.handle_pointer_delta(&mut camera, Vec2::new(100.0, 0.0));
        assert!((camera.yaw() - (-90.0 + 100.0 * 0.14)).abs() < 1e-5);

        // warp-sized deltas are ignored by the camera guard
        processor.handle_pointer_delta(&mut camera, Vec2::new(500.0, 0.0));
        assert!((camera.yaw() - (-90.0 + 100.0 * 0.14)).abs() < 1e-5);
    }

    #[test]
    fn set_bindings_takes_effect_immediately() {
        let mut processor = InputProcessor::default();
        let mut camera = Camera::new(Vec3::ZERO);

        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::MoveForward, "ArrowUp");
        processor.set_bindings(bindings);

        assert!(processor.handle_key(&mut camera, "ArrowUp", true));
        assert!(!processor.handle_key(&mut camera, "KeyW", true));
    }

    #[test]
    fn release_all_clears_held_state() {
        let mut processor = InputProcessor::default();
        let mut camera = Camera::new(Vec3::ZERO);
        let _ = processor.handle_key(&mut camera, "KeyW", true);
        let _ = processor.handle_key(&mut camera, "KeyD", true);
        processor.release_all();
        processor.advance(&mut camera, 1.0);
        assert!(camera.position().length() < 1e-5);
    }
}
