//! Scene composition: the animated backdrop, its static fallback, and the
//! per-frame snapshot handed to the renderer.
//!
//! A [`Scene`] owns every animator and the camera controller. Meshes,
//! materials and star points are described once by a [`SceneLayout`]. It is built
//! once from a [`SceneConfig`] and a reduced-motion source, then mounted on
//! a [`FrameScheduler`](crate::frame::FrameScheduler); the returned
//! [`MountedScene`] is the teardown handle.

pub mod backdrop;
mod composer;
pub mod frame;
pub mod layout;
mod mount;

pub use backdrop::StaticBackdrop;
pub use composer::{Lights, PointLight, Scene, SceneConfig};
pub use frame::{InstanceRaw, SceneFrame, ShapeSnapshot, Showcase};
pub use layout::{InstanceStyle, NetworkLayout, RobotLayout, SceneLayout, ShapeLayout};
pub use mount::MountedScene;
