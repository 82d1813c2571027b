//! Camera system for the backdrop scene.
//!
//! Provides the perspective camera and its GPU uniform, the section-to-pose
//! table, and a controller that eases toward the active section with pointer
//! parallax on top.

/// Section-following camera controller with pointer parallax.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Page sections, their camera poses, and the shared section register.
pub mod section;

pub use controller::{CameraController, CameraState};
pub use section::{CameraPose, SectionKey, SectionRegister};
