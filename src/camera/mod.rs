//! First-person camera: position, yaw/pitch orientation, derived basis
//! vectors, and a GPU-ready view uniform.

/// Core camera state, look/move handling, and view-matrix derivation.
pub mod core;
/// GPU uniform mirroring the camera's view state.
pub mod uniform;
