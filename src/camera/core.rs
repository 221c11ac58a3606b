use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// World-space up direction every basis derivation is anchored to.
const WORLD_UP: Vec3 = Vec3::Y;

/// Look deltas with magnitude above this are discarded as pointer-warp
/// artifacts (cursor re-centering, focus regain).
const LOOK_DELTA_LIMIT: f32 = 200.0;

/// Pitch stops short of ±90° so `front` never reaches the world-up axis,
/// where the `right` cross product would degenerate.
const PITCH_LIMIT: f32 = 89.0;

/// Discrete movement command fed to [`Camera::on_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Along the look direction (flying) or its ground projection
    /// (walking).
    Forward,
    /// Opposite of forward.
    Backward,
    /// Horizontal strafe against the right vector.
    Left,
    /// Horizontal strafe along the right vector.
    Right,
}

/// First-person camera with an eagerly derived orthonormal basis.
///
/// Yaw and pitch are stored in degrees. The four derived vectors
/// (`front`, `right`, `up`, `walk_front`) are recomputed inside every
/// angle mutation, so reads are always consistent with the current
/// angles. `right` is derived by crossing `front` with world-up, which
/// keeps it horizontal and rules out roll.
///
/// All operations are plain in-place mutation or pure computation; the
/// owning loop is responsible for sequencing input events before each
/// frame's [`view_matrix`](Self::view_matrix) call.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    /// Rotation around the vertical axis, degrees. Unbounded; wraps via
    /// trig periodicity.
    yaw: f32,
    /// Rotation around the lateral axis, degrees, in
    /// `[-PITCH_LIMIT, PITCH_LIMIT]`.
    pitch: f32,

    front: Vec3,
    right: Vec3,
    up: Vec3,
    /// Ground-projected forward direction used for walking.
    walk_front: Vec3,

    sensitivity: f32,
    fly_speed: f32,
    flying: bool,
}

impl Camera {
    /// Create a camera at `position` with default tuning: yaw -90° /
    /// pitch 0° (looking down -Z), walking mode.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self::with_options(position, &CameraOptions::default())
    }

    /// Create a camera at `position` with configured sensitivity and
    /// flight speed.
    #[must_use]
    pub fn with_options(position: Vec3, options: &CameraOptions) -> Self {
        let mut camera = Self {
            position,
            yaw: -90.0,
            pitch: 0.0,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            walk_front: Vec3::NEG_Z,
            sensitivity: options.sensitivity,
            fly_speed: options.fly_speed,
            flying: false,
        };
        camera.recompute_basis();
        camera
    }

    /// Build the right-handed view matrix for the current pose.
    ///
    /// Pure function of current state; callable every frame.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Current world-space position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the camera to `position` directly. No validation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Unit forward (look) direction.
    #[must_use]
    pub const fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right direction. Always horizontal.
    #[must_use]
    pub const fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit up direction, orthogonal to both `front` and `right`.
    #[must_use]
    pub const fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit ground-projected forward direction used while walking.
    #[must_use]
    pub const fn walk_front(&self) -> Vec3 {
        self.walk_front
    }

    /// Current yaw in degrees.
    #[must_use]
    pub const fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees.
    #[must_use]
    pub const fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Whether free-flight mode is active.
    #[must_use]
    pub const fn is_flying(&self) -> bool {
        self.flying
    }

    /// Switch between ground-locked walking and free flight.
    pub fn toggle_flying(&mut self) {
        self.flying = !self.flying;
    }

    /// Pointer-delta multiplier applied in [`on_look`](Self::on_look).
    #[must_use]
    pub const fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Retune the pointer-delta multiplier.
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Flight speed multiplier applied to movement deltas while flying.
    #[must_use]
    pub const fn fly_speed(&self) -> f32 {
        self.fly_speed
    }

    /// Retune the flight speed multiplier.
    pub fn set_fly_speed(&mut self, fly_speed: f32) {
        self.fly_speed = fly_speed;
    }

    /// Apply a pointer-movement delta to the look angles.
    ///
    /// Deltas beyond 200 counts on either axis are discarded whole: a
    /// jump that large is a pointer warp, not a hand motion. Otherwise
    /// yaw and pitch advance by `delta * sensitivity`, pitch clamps to
    /// its limits, and the basis is recomputed.
    pub fn on_look(&mut self, dx: f32, dy: f32) {
        if dx.abs() > LOOK_DELTA_LIMIT || dy.abs() > LOOK_DELTA_LIMIT {
            return;
        }
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.recompute_basis();
    }

    /// Apply a movement command scaled by `delta` (elapsed time or
    /// distance, caller's choice of unit).
    ///
    /// While flying, `delta` is first scaled by
    /// [`fly_speed`](Self::fly_speed) and forward motion follows the
    /// true look direction. While walking, forward motion follows
    /// [`walk_front`](Self::walk_front) so pitch never changes the
    /// camera's height. Strafing always follows `right`. No collision
    /// handling; position is adjusted unconditionally.
    pub fn on_move(&mut self, direction: MoveDirection, delta: f32) {
        let delta = if self.flying {
            delta * self.fly_speed
        } else {
            delta
        };
        let forward_axis = if self.flying {
            self.front
        } else {
            self.walk_front
        };
        match direction {
            MoveDirection::Forward => self.position += forward_axis * delta,
            MoveDirection::Backward => self.position -= forward_axis * delta,
            MoveDirection::Left => self.position -= self.right * delta,
            MoveDirection::Right => self.position += self.right * delta,
        }
    }

    /// Aim the camera at a world-space point by back-solving yaw and
    /// pitch. A target at the eye position is a no-op. Pitch clamps to
    /// its usual limits.
    pub fn look_at(&mut self, target: Vec3) {
        let to_target = target - self.position;
        let distance = to_target.length();
        if distance <= f32::EPSILON {
            return;
        }
        self.yaw = to_target.z.atan2(to_target.x).to_degrees();
        self.pitch = (to_target.y / distance)
            .asin()
            .to_degrees()
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.recompute_basis();
    }

    /// Spherical-to-Cartesian derivation of the camera basis from the
    /// current angles.
    ///
    /// `up` is re-derived from `right × front` rather than reusing
    /// world-up, which would not be orthogonal to a tilted `front`.
    /// `walk_front` is derived independently so walking speed and
    /// direction are decoupled from pitch.
    fn recompute_basis(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(
            pitch_cos * yaw_cos,
            pitch_sin,
            pitch_cos * yaw_sin,
        )
        .normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
        self.walk_front = WORLD_UP.cross(self.right).normalize();
    }
}
