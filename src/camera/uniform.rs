use glam::Mat4;

use crate::camera::core::Camera;

/// GPU uniform buffer layout holding the view matrix and camera
/// metadata.
///
/// Plain data only: the crate does not talk to a graphics API. Consumers
/// cast this with bytemuck into whatever uniform/storage buffer their
/// renderer uses.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// View matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad0: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad1: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with an identity view matrix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad0: 0.0,
            forward: [0.0, 0.0, -1.0],
            _pad1: 0.0,
        }
    }

    /// Refresh uniform fields from the given camera's current state.
    pub fn update_view(&mut self, camera: &Camera) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.position = camera.position().to_array();
        self.forward = camera.front().to_array();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn new_is_identity_view() {
        let uniform = CameraUniform::new();
        assert_eq!(uniform.view, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(uniform.forward, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn update_view_mirrors_camera_state() {
        let mut camera = Camera::new(Vec3::new(4.0, 2.0, -1.0));
        camera.on_look(90.0, 40.0);

        let mut uniform = CameraUniform::new();
        uniform.update_view(&camera);

        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(uniform.position, camera.position().to_array());
        assert_eq!(uniform.forward, camera.front().to_array());
    }
}
