//! Layered neural-network visualization.
//!
//! Each layer is a ring of nodes placed in polar coordinates. The whole
//! group yaws slowly while every layer wobbles and bobs on its own phase.
//! Straight segments join every node of a layer to every node of the next
//! layer; they live in the source layer's frame and move with it.

use std::f32::consts::TAU;

use glam::Vec3;
use serde::Serialize;

use super::object::{Geometry, Material};
use super::pose::Pose;
use super::Animator;
use crate::util::color::{palette, Rgb};

/// Group yaw rate (rad/s).
const GROUP_YAW_RATE: f32 = 0.2;
/// Per-layer roll amplitude (rad).
const LAYER_ROLL_AMPLITUDE: f32 = 0.1;
/// Per-layer bob amplitude.
const LAYER_BOB_AMPLITUDE: f32 = 0.2;
/// Per-layer bob frequency multiplier.
const LAYER_BOB_RATE: f32 = 0.5;
/// Vertical flattening of each node ring.
const RING_HEIGHT: f32 = 0.3;

/// One ring of nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NetworkLayer {
    /// Number of nodes on the ring.
    pub nodes: u32,
    /// Ring radius.
    pub radius: f32,
    /// Depth of the ring plane.
    pub z: f32,
    /// Node color.
    pub color: Rgb,
}

impl NetworkLayer {
    /// Position of node `index`, relative to the layer.
    ///
    /// `angle = 2π · index / nodes`, position
    /// `(cos(angle) · radius, sin(angle) · 0.3, z)`.
    #[must_use]
    pub fn node_position(&self, index: u32) -> Vec3 {
        let angle = index as f32 / self.nodes as f32 * TAU;
        Vec3::new(
            angle.cos() * self.radius,
            angle.sin() * RING_HEIGHT,
            self.z,
        )
    }

    /// All node positions, relative to the layer.
    pub fn node_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.nodes).map(|i| self.node_position(i))
    }
}

/// Pose of layer `index` at `elapsed`, relative to the group.
#[must_use]
pub fn layer_pose(elapsed: f32, index: usize) -> Pose {
    let phase = index as f32;
    Pose {
        position: Vec3::new(
            0.0,
            (elapsed * LAYER_BOB_RATE + phase).sin() * LAYER_BOB_AMPLITUDE,
            0.0,
        ),
        rotation: Vec3::new(
            0.0,
            0.0,
            (elapsed + phase).sin() * LAYER_ROLL_AMPLITUDE,
        ),
        scale: Vec3::ONE,
    }
}

/// Yaw of the whole network at `elapsed`.
#[must_use]
pub fn group_pose(elapsed: f32) -> Pose {
    Pose {
        rotation: Vec3::new(0.0, elapsed * GROUP_YAW_RATE, 0.0),
        ..Pose::IDENTITY
    }
}

/// Line segment between two nodes, in the source layer's frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Index of the layer the segment starts in.
    pub layer: usize,
    /// Start point (node of `layer`).
    pub from: Vec3,
    /// End point (node of `layer + 1`).
    pub to: Vec3,
}

/// Posed state of the network for one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NetworkFrame {
    /// Group yaw.
    pub group: Pose,
    /// Per-layer wobble and bob, relative to the group.
    pub layers: Vec<Pose>,
    /// Connection segments, each in its source layer's frame.
    pub edges: Vec<Edge>,
}

/// Layered network made of node rings and full bipartite connections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkVisualization {
    layers: Vec<NetworkLayer>,
    node: Geometry,
    halo: Geometry,
    line: Material,
}

impl NetworkVisualization {
    /// Network with custom layers.
    #[must_use]
    pub fn new(layers: Vec<NetworkLayer>) -> Self {
        Self {
            layers,
            node: Geometry::Sphere {
                radius: 0.08,
                segments: 12,
            },
            halo: Geometry::Sphere {
                radius: 0.12,
                segments: 8,
            },
            line: Material::solid(palette::GRAY_LINE).with_opacity(0.4),
        }
    }

    /// Layers in input-to-output order.
    #[must_use]
    pub fn layers(&self) -> &[NetworkLayer] {
        &self.layers
    }

    /// Node geometry and the translucent halo drawn around it.
    #[must_use]
    pub fn node_geometry(&self) -> (Geometry, Geometry) {
        (self.node, self.halo)
    }

    /// Material of connection lines.
    #[must_use]
    pub fn line_material(&self) -> Material {
        self.line
    }

    /// Connections from every node of layer L to every node of layer L+1.
    ///
    /// Endpoints are recomputed from the polar node formula on each call.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        self.extend_edges(&mut edges);
        edges
    }

    fn extend_edges(&self, edges: &mut Vec<Edge>) {
        edges.extend(self.layers.windows(2).enumerate().flat_map(|(layer, pair)| {
            let (from_layer, to_layer) = (pair[0], pair[1]);
            (0..from_layer.nodes).flat_map(move |i| {
                let from = from_layer.node_position(i);
                (0..to_layer.nodes).map(move |j| Edge {
                    layer,
                    from,
                    to: to_layer.node_position(j),
                })
            })
        }));
    }

    /// Posed state at `elapsed`.
    #[must_use]
    pub fn frame_at(&self, elapsed: f32) -> NetworkFrame {
        let mut frame = NetworkFrame::default();
        self.animate(elapsed, &mut frame);
        frame
    }
}

impl Default for NetworkVisualization {
    fn default() -> Self {
        Self::new(vec![
            NetworkLayer {
                nodes: 4,
                radius: 1.5,
                z: -2.0,
                color: palette::BLUE,
            },
            NetworkLayer {
                nodes: 6,
                radius: 2.0,
                z: 0.0,
                color: palette::LIME,
            },
            NetworkLayer {
                nodes: 6,
                radius: 2.0,
                z: 0.0,
                color: palette::LIME,
            },
            NetworkLayer {
                nodes: 3,
                radius: 1.5,
                z: 2.0,
                color: palette::CORAL,
            },
        ])
    }
}

impl Animator for NetworkVisualization {
    type Frame = NetworkFrame;

    fn name(&self) -> &'static str {
        "network"
    }

    fn animate(&self, elapsed: f32, frame: &mut NetworkFrame) {
        frame.group = group_pose(elapsed);
        frame.layers.clear();
        frame
            .layers
            .extend((0..self.layers.len()).map(|i| layer_pose(elapsed, i)));
        frame.edges.clear();
        self.extend_edges(&mut frame.edges);
    }
}
