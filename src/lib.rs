// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math: comparisons against exact constants and fused-op
// rewrites are intentional here
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

//! First-person camera controller for real-time 3D applications.
//!
//! Roam tracks a world-space position and a yaw/pitch orientation,
//! converts pointer deltas into rotation, converts discrete movement
//! commands into camera-relative translation, and derives a right-handed
//! view matrix for rendering.
//!
//! # Key entry points
//!
//! - [`camera::core::Camera`] - camera state, look/move handling, view
//!   matrix
//! - [`input::InputProcessor`] - converts raw key/pointer events into
//!   camera calls
//! - [`options::Options`] - runtime configuration (camera feel,
//!   keybindings) with TOML persistence
//!
//! # Movement model
//!
//! The camera has two movement modes sharing one command surface. While
//! *walking* (the default), forward/backward motion follows the
//! ground-projected look direction, so the camera holds its height no
//! matter how far up or down it is pitched. While *flying*, motion
//! follows the true look direction and is scaled by a configurable
//! multiplier. Strafing is horizontal in both modes.
//!
//! The renderer and the windowing layer are external collaborators: the
//! caller feeds events in and reads the view matrix back out once per
//! frame.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
