//! Renderable element descriptions shared by every animator.

use glam::Vec3;
use serde::Serialize;

use super::pose::Pose;
use crate::util::color::Rgb;

/// Base geometry of a visual element, in the element's local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    /// Regular octahedron.
    Octahedron {
        /// Circumscribed radius.
        radius: f32,
    },
    /// Subdivided icosahedron.
    Icosahedron {
        /// Circumscribed radius.
        radius: f32,
        /// Subdivision level (0 = plain icosahedron).
        detail: u32,
    },
    /// Ring torus lying in the XY plane.
    Torus {
        /// Distance from the torus center to the tube center.
        radius: f32,
        /// Tube radius.
        tube: f32,
        /// Segments around the tube.
        radial_segments: u32,
        /// Segments along the ring.
        tubular_segments: u32,
    },
    /// Axis-aligned box.
    Cuboid {
        /// Edge lengths along x, y, z.
        size: Vec3,
    },
    /// UV sphere.
    Sphere {
        /// Sphere radius.
        radius: f32,
        /// Width and height segments.
        segments: u32,
    },
    /// Capped cylinder along Y.
    Cylinder {
        /// Cap radius.
        radius: f32,
        /// Height along Y.
        height: f32,
        /// Radial segments.
        segments: u32,
    },
}

/// Self-illumination of a material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Emissive {
    /// Emitted color.
    pub color: Rgb,
    /// Emission strength multiplier.
    pub intensity: f32,
}

/// Surface appearance of a visual element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    /// Base color.
    pub color: Rgb,
    /// Opacity in `[0, 1]`; 1 is opaque.
    pub opacity: f32,
    /// Render edges only.
    pub wireframe: bool,
    /// Optional glow.
    pub emissive: Option<Emissive>,
}

impl Material {
    /// Opaque, unlit material of `color`.
    #[must_use]
    pub const fn solid(color: Rgb) -> Self {
        Self {
            color,
            opacity: 1.0,
            wireframe: false,
            emissive: None,
        }
    }

    /// Same material with a different opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Same material drawn as wireframe.
    #[must_use]
    pub const fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }

    /// Same material glowing in its own color.
    #[must_use]
    pub const fn glowing(mut self, intensity: f32) -> Self {
        self.emissive = Some(Emissive {
            color: self.color,
            intensity,
        });
        self
    }
}

/// One visual element owned by the scene: identity, geometry, appearance
/// and the pose recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimatedObject {
    /// Identity/seed used by the element's animator.
    pub seed: u32,
    /// Base geometry parameters.
    pub geometry: Geometry,
    /// Surface appearance.
    pub material: Material,
    /// Current pose, relative to the parent group.
    pub pose: Pose,
}
