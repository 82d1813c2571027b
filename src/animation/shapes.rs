//! Slowly spinning wireframe shapes that bob in place.

use glam::{Mat4, Vec3};
use serde::Serialize;

use super::object::{Geometry, Material};
use super::pose::Pose;
use super::Animator;
use crate::util::color::palette;

/// Gentle floating motion wrapped around a shape.
///
/// With `u = (elapsed + phase) / 4 * speed` the wrapper tilts by
/// `(cos u / 8, sin u / 8, sin u / 20) * rotation_intensity` and rises by
/// `sin u / 10 * float_intensity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloatMotion {
    /// Oscillation speed multiplier.
    pub speed: f32,
    /// Tilt amplitude multiplier.
    pub rotation_intensity: f32,
    /// Bob amplitude multiplier.
    pub float_intensity: f32,
}

impl FloatMotion {
    /// Wrapper pose at `elapsed`, anchored at `anchor`.
    #[must_use]
    pub fn pose(&self, anchor: Vec3, elapsed: f32, phase: f32) -> Pose {
        let u = (elapsed + phase) / 4.0 * self.speed;
        let (sin_u, cos_u) = u.sin_cos();
        Pose {
            position: anchor + Vec3::Y * (sin_u / 10.0 * self.float_intensity),
            rotation: Vec3::new(cos_u / 8.0, sin_u / 8.0, sin_u / 20.0)
                * self.rotation_intensity,
            scale: Vec3::ONE,
        }
    }

    /// Largest vertical excursion from the anchor.
    #[must_use]
    pub fn max_bob(&self) -> f32 {
        self.float_intensity.abs() / 10.0
    }
}

/// Wrapper and mesh poses of a floating shape for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ShapeFrame {
    /// Float wrapper pose in world space.
    pub group: Pose,
    /// Spin of the mesh inside the wrapper.
    pub mesh: Pose,
}

impl ShapeFrame {
    /// Mesh-to-world matrix.
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        self.group.matrix() * self.mesh.matrix()
    }
}

/// A decorative shape spinning at a constant angular rate inside a float
/// wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloatingShape {
    /// Stable name for logging and snapshots.
    pub name: &'static str,
    /// Float phase offset in seconds; different seeds desynchronize shapes.
    pub seed: u32,
    /// Base geometry.
    pub geometry: Geometry,
    /// Surface appearance.
    pub material: Material,
    /// Rest position of the float wrapper.
    pub anchor: Vec3,
    /// Spin rate around each axis (rad/s).
    pub spin: Vec3,
    /// Float wrapper parameters.
    pub float: FloatMotion,
}

impl FloatingShape {
    /// Lime wireframe icosahedron drifting to the lower right.
    #[must_use]
    pub fn planet() -> Self {
        Self {
            name: "planet",
            seed: 0,
            geometry: Geometry::Icosahedron {
                radius: 1.0,
                detail: 1,
            },
            material: Material::solid(palette::LIME)
                .with_opacity(0.7)
                .wireframe(),
            anchor: Vec3::new(3.0, -2.0, -5.0),
            spin: Vec3::new(0.0, 0.1, 0.0),
            float: FloatMotion {
                speed: 1.0,
                rotation_intensity: 0.5,
                float_intensity: 0.5,
            },
        }
    }

    /// Coral wireframe torus in the upper left background.
    #[must_use]
    pub fn torus() -> Self {
        Self {
            name: "torus",
            seed: 0,
            geometry: Geometry::Torus {
                radius: 1.5,
                tube: 0.3,
                radial_segments: 16,
                tubular_segments: 32,
            },
            material: Material::solid(palette::CORAL)
                .with_opacity(0.5)
                .wireframe(),
            anchor: Vec3::new(-4.0, 2.0, -8.0),
            spin: Vec3::new(0.2, 0.0, 0.1),
            float: FloatMotion {
                speed: 2.0,
                rotation_intensity: 1.0,
                float_intensity: 1.0,
            },
        }
    }

    /// The default pair of background shapes.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![Self::planet(), Self::torus()]
    }

    /// Same shape with a different phase seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Wrapper and spin poses at `elapsed`.
    #[must_use]
    pub fn frame_at(&self, elapsed: f32) -> ShapeFrame {
        ShapeFrame {
            group: self.float.pose(self.anchor, elapsed, self.seed as f32),
            mesh: Pose {
                rotation: self.spin * elapsed,
                ..Pose::IDENTITY
            },
        }
    }
}

impl Animator for FloatingShape {
    type Frame = ShapeFrame;

    fn name(&self) -> &'static str {
        self.name
    }

    fn animate(&self, elapsed: f32, frame: &mut ShapeFrame) {
        *frame = self.frame_at(elapsed);
    }
}
