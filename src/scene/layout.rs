//! Static description of what the animated scene draws.
//!
//! Geometry, materials, star buffers and part hierarchies change rarely, so
//! they live here instead of in every [`SceneFrame`](super::SceneFrame).
//! A renderer uploads the layout once and re-uploads it whenever
//! [`SceneFrame::layout_revision`](super::SceneFrame::layout_revision)
//! moves.

use serde::Serialize;

use crate::animation::network::NetworkLayer;
use crate::animation::robot::RobotPart;
use crate::animation::stars::Star;
use crate::animation::{
    AnimatedObject, FloatingShape, Geometry, Material, NetworkVisualization,
    ParticleField, RobotFigure, StarField,
};

/// Geometry and material shared by every instance of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InstanceStyle {
    /// Per-instance mesh.
    pub geometry: Geometry,
    /// Per-instance appearance.
    pub material: Material,
}

/// Mesh of one floating shape; its pose arrives per frame under the same
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeLayout {
    /// Shape name, matching [`ShapeSnapshot::name`](super::ShapeSnapshot::name).
    pub name: &'static str,
    /// Mesh and appearance.
    pub style: InstanceStyle,
}

/// Robot meshes at rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RobotLayout {
    /// Body parts, relative to the body.
    pub parts: Vec<RobotPart>,
    /// Ring particles, relative to the ring.
    pub ring: Vec<AnimatedObject>,
}

impl From<&RobotFigure> for RobotLayout {
    fn from(robot: &RobotFigure) -> Self {
        Self {
            parts: robot.parts().to_vec(),
            ring: robot.ring().to_vec(),
        }
    }
}

/// Network node rings and their drawing styles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkLayout {
    /// Layers in input-to-output order; node color comes from the layer.
    pub layers: Vec<NetworkLayer>,
    /// Node mesh.
    pub node: Geometry,
    /// Translucent halo around each node.
    pub halo: Geometry,
    /// Connection line material.
    pub line: Material,
}

impl From<&NetworkVisualization> for NetworkLayout {
    fn from(network: &NetworkVisualization) -> Self {
        let (node, halo) = network.node_geometry();
        Self {
            layers: network.layers().to_vec(),
            node,
            halo,
            line: network.line_material(),
        }
    }
}

/// Everything static about the animated scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    /// Particle instance style; instance matrices arrive per frame.
    pub particles: InstanceStyle,
    /// Floating shape meshes.
    pub shapes: Vec<ShapeLayout>,
    /// Star points; the shell animates through the star time uniform.
    pub stars: Vec<Star>,
    /// Robot sub-scene meshes.
    pub robot: Option<RobotLayout>,
    /// Network sub-scene rings.
    pub network: Option<NetworkLayout>,
}

impl SceneLayout {
    pub(super) fn new(
        particles: &ParticleField,
        shapes: &[FloatingShape],
        stars: &StarField,
        robot: Option<&RobotFigure>,
        network: Option<&NetworkVisualization>,
    ) -> Self {
        Self {
            particles: InstanceStyle {
                geometry: particles.geometry(),
                material: particles.material(),
            },
            shapes: shapes
                .iter()
                .map(|shape| ShapeLayout {
                    name: shape.name,
                    style: InstanceStyle {
                        geometry: shape.geometry,
                        material: shape.material,
                    },
                })
                .collect(),
            stars: stars.stars().to_vec(),
            robot: robot.map(RobotLayout::from),
            network: network.map(NetworkLayout::from),
        }
    }
}
