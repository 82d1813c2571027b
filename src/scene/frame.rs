//! Per-frame snapshot handed to the renderer.

use glam::Mat4;
use serde::Serialize;

use super::backdrop::StaticBackdrop;
use super::composer::Lights;
use crate::animation::{NetworkFrame, Pose, RobotFrame, ShapeFrame};
use crate::camera::core::{Camera, CameraUniform};
use crate::camera::{CameraState, SectionKey};
use crate::frame::FrameTime;

/// Per-instance model matrix, laid out for a GPU vertex buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    /// Column-major model matrix.
    pub model: [[f32; 4]; 4],
}

impl InstanceRaw {
    /// Instance data for `pose`.
    #[must_use]
    pub fn from_pose(pose: &Pose) -> Self {
        Self::from_matrix(pose.matrix())
    }

    /// Instance data for an arbitrary model matrix.
    #[must_use]
    pub fn from_matrix(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

/// Posed floating shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeSnapshot {
    /// Shape name.
    pub name: &'static str,
    /// Wrapper and mesh poses.
    pub frame: ShapeFrame,
    /// Mesh-to-world matrix of the posed shape.
    #[serde(skip)]
    pub model: InstanceRaw,
}

impl ShapeSnapshot {
    /// Snapshot of `name` posed by `frame`.
    #[must_use]
    pub fn new(name: &'static str, frame: ShapeFrame) -> Self {
        Self {
            name,
            frame,
            model: InstanceRaw::from_matrix(frame.world_matrix()),
        }
    }
}

/// Self-contained sub-scene with its own camera.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Showcase<F> {
    /// Fixed camera of the sub-scene.
    pub camera: Camera,
    /// Light rig of the sub-scene.
    pub lights: Lights,
    /// Animated state.
    pub frame: F,
}

/// Read-only result of one scene update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneFrame {
    /// Clock sample the frame was computed for.
    pub time: FrameTime,
    /// Reduced-motion flag in effect.
    pub reduced_motion: bool,
    /// Bumped whenever the scene layout is rebuilt.
    pub layout_revision: u64,
    /// Section the camera is heading to.
    pub section: Option<SectionKey>,
    /// Smoothed and target camera poses.
    pub camera_state: Option<CameraState>,
    /// Live camera.
    pub camera: Option<Camera>,
    /// GPU copy of the live camera.
    #[serde(skip)]
    pub uniform: CameraUniform,
    /// Number of particles posed this frame.
    pub particle_count: usize,
    /// Particle model matrices.
    #[serde(skip)]
    pub particle_instances: Vec<InstanceRaw>,
    /// Floating shapes; empty under reduced motion.
    pub shapes: Vec<ShapeSnapshot>,
    /// Number of stars in the backdrop shell.
    pub star_count: usize,
    /// Star shader time.
    pub star_time: f32,
    /// Robot sub-scene.
    pub robot: Option<Showcase<RobotFrame>>,
    /// Network sub-scene.
    pub network: Option<Showcase<NetworkFrame>>,
    /// Static fallback; set only when the scene is not animated.
    pub backdrop: Option<StaticBackdrop>,
}

impl SceneFrame {
    /// Frame describing the static fallback.
    #[must_use]
    pub fn fallback(backdrop: StaticBackdrop) -> Self {
        Self {
            reduced_motion: true,
            backdrop: Some(backdrop),
            ..Self::default()
        }
    }

    /// Raw bytes of the particle instance buffer.
    #[must_use]
    pub fn particle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particle_instances)
    }

    /// Raw bytes of the camera uniform.
    #[must_use]
    pub fn uniform_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.uniform)
    }

    /// Pretty JSON of the serializable part of the frame.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for SceneFrame {
    fn default() -> Self {
        Self {
            time: FrameTime::default(),
            reduced_motion: false,
            layout_revision: 0,
            section: None,
            camera_state: None,
            camera: None,
            uniform: CameraUniform::new(),
            particle_count: 0,
            particle_instances: Vec::new(),
            shapes: Vec::new(),
            star_count: 0,
            star_time: 0.0,
            robot: None,
            network: None,
            backdrop: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FloatingShape;
    use glam::Vec3;

    #[test]
    fn instance_matches_pose_matrix() {
        let pose = Pose::at(Vec3::new(1.0, 2.0, 3.0));
        let raw = InstanceRaw::from_pose(&pose);
        assert_eq!(raw.model[3][..3], [1.0, 2.0, 3.0]);
        assert_eq!(size_of::<InstanceRaw>(), 64);
    }

    #[test]
    fn shape_snapshot_carries_world_matrix() {
        let shape = FloatingShape::torus();
        let frame = shape.frame_at(2.0);
        let snapshot = ShapeSnapshot::new(shape.name, frame);
        assert_eq!(snapshot.model, InstanceRaw::from_matrix(frame.world_matrix()));
        let origin = frame.world_matrix().transform_point3(Vec3::ZERO);
        assert_eq!(snapshot.model.model[3][..3], origin.to_array());
    }

    #[test]
    fn fallback_frame_serializes_backdrop() {
        let frame = SceneFrame::fallback(StaticBackdrop::default());
        let json: serde_json::Value =
            serde_json::from_str(&frame.to_json().unwrap()).unwrap();
        assert_eq!(json["reduced_motion"], true);
        assert_eq!(json["backdrop"]["base"]["angle_deg"], 135.0);
        assert!(json.get("uniform").is_none());
        assert!(frame.particle_bytes().is_empty());
    }
}
