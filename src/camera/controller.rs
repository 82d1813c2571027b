use glam::{Vec2, Vec3};
use serde::Serialize;

use super::core::{Camera, CameraUniform};
use super::section::{CameraPose, SectionKey};
use crate::options::CameraOptions;

/// Smoothed and target camera poses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraState {
    /// Pose the camera is currently at, before parallax.
    pub current: CameraPose,
    /// Pose the camera is moving toward.
    pub target: CameraPose,
}

/// Moves the camera toward the active section's pose and adds pointer
/// parallax.
///
/// Each frame the smoothed pose covers `min(delta * rate, 1)` of the
/// remaining distance, so it approaches the target monotonically and never
/// overshoots. Parallax is applied on top of the smoothed pose and never
/// feeds back into it.
#[derive(Debug, Clone)]
pub struct CameraController {
    state: CameraState,
    default_pose: CameraPose,
    section: Option<SectionKey>,
    smoothing_rate: f32,
    parallax: Vec2,

    /// Live camera (smoothed pose plus parallax).
    pub camera: Camera,
    /// GPU-ready copy of `camera`.
    pub uniform: CameraUniform,
}

impl CameraController {
    /// Controller starting at the default pose.
    ///
    /// `initial` overrides the configured default position and look-at.
    #[must_use]
    pub fn new(
        options: &CameraOptions,
        aspect: f32,
        initial: Option<CameraPose>,
    ) -> Self {
        let default_pose = initial.unwrap_or(CameraPose {
            position: Vec3::from_array(options.default_position),
            look_at: Vec3::from_array(options.default_look_at),
        });
        let camera = Camera::new(
            options,
            default_pose.position,
            default_pose.look_at,
            aspect,
        );
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        Self {
            state: CameraState {
                current: default_pose,
                target: default_pose,
            },
            default_pose,
            section: None,
            smoothing_rate: options.smoothing_rate,
            parallax: Vec2::new(options.parallax_x, options.parallax_y),
            camera,
            uniform,
        }
    }

    /// Target pose for `section`; unknown sections use the default pose.
    #[must_use]
    pub fn target_for(&self, section: Option<SectionKey>) -> CameraPose {
        section.map_or(self.default_pose, SectionKey::camera_pose)
    }

    /// Parallax offset for a pointer in NDC.
    #[must_use]
    pub fn parallax_offset(&self, pointer: Vec2, reduced_motion: bool) -> Vec3 {
        if reduced_motion {
            return Vec3::ZERO;
        }
        let pointer = pointer.clamp(Vec2::NEG_ONE, Vec2::ONE);
        (pointer * self.parallax).extend(0.0)
    }

    /// Advance one frame.
    pub fn update(
        &mut self,
        delta: f32,
        section: Option<SectionKey>,
        pointer: Vec2,
        reduced_motion: bool,
    ) {
        if section != self.section {
            log::debug!(
                "camera section: {} -> {}",
                self.section.map_or("<none>", SectionKey::id),
                section.map_or("<none>", SectionKey::id),
            );
            self.section = section;
        }
        self.state.target = self.target_for(section);

        let t = (delta * self.smoothing_rate).clamp(0.0, 1.0);
        self.state.current = self.state.current.lerp(&self.state.target, t);

        self.camera.eye = self.state.current.position
            + self.parallax_offset(pointer, reduced_motion);
        self.camera.target = self.state.current.look_at;
        self.uniform.update_view_proj(&self.camera);
    }

    /// Smoothed and target poses.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Last section seen by `update`.
    #[must_use]
    pub fn section(&self) -> Option<SectionKey> {
        self.section
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
            self.uniform.update_view_proj(&self.camera);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CameraController {
        CameraController::new(&CameraOptions::default(), 16.0 / 9.0, None)
    }

    #[test]
    fn hero_at_zero_delta_stays_home() {
        let mut c = controller();
        c.update(0.0, Some(SectionKey::Hero), Vec2::ZERO, false);
        assert_eq!(c.camera.eye, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(c.camera.target, Vec3::ZERO);
    }

    #[test]
    fn unknown_section_falls_back_to_default() {
        let mut c = controller();
        for _ in 0..10 {
            c.update(1.0 / 60.0, Some(SectionKey::Skills), Vec2::ZERO, true);
        }
        assert_ne!(c.state().current.position, Vec3::new(0.0, 0.0, 5.0));
        c.update(1.0 / 60.0, None, Vec2::ZERO, true);
        assert_eq!(c.state().target.position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(c.section(), None);
    }

    #[test]
    fn initial_override_becomes_default() {
        let pose = CameraPose::facing_origin(Vec3::new(0.0, 3.0, 9.0));
        let c = CameraController::new(&CameraOptions::default(), 1.0, Some(pose));
        assert_eq!(c.target_for(None), pose);
        assert_eq!(c.state().current, pose);
        assert_eq!(c.camera.eye, pose.position);
    }

    #[test]
    fn approaches_target_monotonically() {
        let mut c = controller();
        let target = SectionKey::About.camera_pose().position;
        let mut last = c.state().current.position.distance(target);
        for _ in 0..50 {
            c.update(1.0 / 60.0, Some(SectionKey::About), Vec2::ZERO, false);
            let d = c.state().current.position.distance(target);
            assert!(d < last, "{d} !< {last}");
            last = d;
        }
    }

    #[test]
    fn converges_within_ten_seconds() {
        let mut c = controller();
        for _ in 0..600 {
            c.update(1.0 / 60.0, Some(SectionKey::Playground), Vec2::ZERO, false);
        }
        let target = SectionKey::Playground.camera_pose().position;
        assert!(c.state().current.position.distance(target) < 1e-3);
    }

    #[test]
    fn large_delta_never_overshoots() {
        let mut c = controller();
        c.update(5.0, Some(SectionKey::Contact), Vec2::ZERO, true);
        assert_eq!(
            c.state().current.position,
            SectionKey::Contact.camera_pose().position
        );
    }

    #[test]
    fn parallax_is_bounded() {
        let c = controller();
        let offset = c.parallax_offset(Vec2::new(1.0, -1.0), false);
        assert!((offset - Vec3::new(0.5, -0.3, 0.0)).length() < 1e-6);
        // Out-of-range pointers are clamped
        let offset = c.parallax_offset(Vec2::new(7.0, 3.0), false);
        assert!(offset.x <= 0.5 + 1e-6 && offset.y <= 0.3 + 1e-6);
        assert_eq!(offset.z, 0.0);
    }

    #[test]
    fn parallax_does_not_feed_back() {
        let mut with = controller();
        let mut without = controller();
        for _ in 0..30 {
            with.update(1.0 / 60.0, Some(SectionKey::Notes), Vec2::ONE, false);
            without.update(1.0 / 60.0, Some(SectionKey::Notes), Vec2::ZERO, false);
        }
        assert_eq!(with.state().current, without.state().current);
        let diff = with.camera.eye - without.camera.eye;
        assert!((diff - Vec3::new(0.5, 0.3, 0.0)).length() < 1e-5);
    }

    #[test]
    fn reduced_motion_disables_parallax() {
        let mut c = controller();
        c.update(0.0, Some(SectionKey::Hero), Vec2::new(1.0, 1.0), true);
        assert_eq!(c.camera.eye, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn resize_updates_aspect() {
        let mut c = controller();
        c.resize(800, 400);
        assert_eq!(c.camera.aspect, 2.0);
        c.resize(0, 400);
        assert_eq!(c.camera.aspect, 2.0);
    }
}
