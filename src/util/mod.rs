//! Shared utilities: colors, the site palette, and frame timing.

pub mod color;
/// Smoothed FPS and frame limiting.
pub mod frame_timing;
