//! Idle-animated robot figure with a ring of orbiting data particles.
//!
//! Several independent motions share one rigid hierarchy: the body sways
//! and bobs, both eyes blink together, and a ring of particles yaws around
//! the figure while each particle rises and falls on its own phase.

use std::f32::consts::TAU;

use glam::Vec3;
use serde::Serialize;

use super::object::{AnimatedObject, Emissive, Geometry, Material};
use super::pose::Pose;
use super::Animator;
use crate::util::color::palette;

/// Body yaw amplitude (rad).
const SWAY_AMPLITUDE: f32 = 0.3;
/// Body yaw frequency multiplier.
const SWAY_RATE: f32 = 0.5;
/// Body bob amplitude.
const BOB_AMPLITUDE: f32 = 0.1;
/// Body bob frequency multiplier.
const BOB_RATE: f32 = 0.8;
/// Blink fires while `sin(elapsed * BLINK_RATE)` exceeds this.
pub const BLINK_THRESHOLD: f32 = 0.95;
/// Blink oscillator frequency multiplier.
const BLINK_RATE: f32 = 2.0;
/// Vertical eye scale while blinking.
pub const BLINK_SCALE: f32 = 0.3;
/// Ring yaw rate (rad/s).
const RING_YAW_RATE: f32 = 0.5;
/// Particle height amplitude within the ring.
const RING_BOB_AMPLITUDE: f32 = 0.3;
/// Phase offset between consecutive ring particles.
const RING_PHASE_STEP: f32 = 0.5;
/// Ring particle count.
pub const RING_PARTICLES: usize = 20;
/// Ring radius.
const RING_RADIUS: f32 = 2.5;

/// Body yaw and bob at `elapsed`.
#[must_use]
pub fn body_pose(elapsed: f32) -> Pose {
    Pose {
        position: Vec3::new(0.0, (elapsed * BOB_RATE).sin() * BOB_AMPLITUDE, 0.0),
        rotation: Vec3::new(0.0, (elapsed * SWAY_RATE).sin() * SWAY_AMPLITUDE, 0.0),
        scale: Vec3::ONE,
    }
}

/// Vertical eye scale at `elapsed`.
///
/// This is a short pulse near the crest of each `sin(2t)` cycle rather than
/// an eased eyelid motion: the eyes snap to [`BLINK_SCALE`] while the
/// oscillator is above [`BLINK_THRESHOLD`] and are fully open otherwise.
#[must_use]
pub fn eye_scale(elapsed: f32) -> f32 {
    if (elapsed * BLINK_RATE).sin() > BLINK_THRESHOLD {
        BLINK_SCALE
    } else {
        1.0
    }
}

/// Yaw of the particle ring at `elapsed`.
#[must_use]
pub fn ring_pose(elapsed: f32) -> Pose {
    Pose {
        rotation: Vec3::new(0.0, elapsed * RING_YAW_RATE, 0.0),
        ..Pose::IDENTITY
    }
}

/// Rest position of ring particle `index`.
#[must_use]
pub fn ring_particle_base(index: usize) -> Vec3 {
    let angle = index as f32 / RING_PARTICLES as f32 * TAU;
    Vec3::new(
        angle.cos() * RING_RADIUS,
        (index as f32).sin() * 0.5,
        angle.sin() * RING_RADIUS,
    )
}

/// Pose of ring particle `index` at `elapsed`, relative to the ring.
///
/// The particle keeps its horizontal rest position and replaces its height
/// with `sin(elapsed + index * 0.5) * 0.3`.
#[must_use]
pub fn ring_particle_pose(elapsed: f32, index: usize) -> Pose {
    let base = ring_particle_base(index);
    let height =
        (elapsed + index as f32 * RING_PHASE_STEP).sin() * RING_BOB_AMPLITUDE;
    Pose::at(Vec3::new(base.x, height, base.z))
}

/// Role of a rigid part of the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartRole {
    /// Static part of the body.
    Body,
    /// Eye that follows the blink scale.
    Eye,
}

/// One rigid mesh of the robot, posed relative to the body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RobotPart {
    /// Part name for snapshots.
    pub name: &'static str,
    /// How the part animates.
    pub role: PartRole,
    /// Mesh description with its rest pose relative to the body.
    pub object: AnimatedObject,
}

/// Posed state of the figure for one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RobotFrame {
    /// Body yaw and bob, relative to the figure origin.
    pub body: Pose,
    /// Vertical scale applied to both eyes.
    pub eye_scale: f32,
    /// Ring yaw, relative to the figure origin.
    pub ring: Pose,
    /// Ring particle poses, relative to the ring.
    pub ring_particles: Vec<Pose>,
}

/// The robot figure: body parts plus the orbiting particle ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RobotFigure {
    parts: Vec<RobotPart>,
    ring: Vec<AnimatedObject>,
}

fn part(
    name: &'static str,
    role: PartRole,
    seed: u32,
    geometry: Geometry,
    material: Material,
    at: Vec3,
) -> RobotPart {
    RobotPart {
        name,
        role,
        object: AnimatedObject {
            seed,
            geometry,
            material,
            pose: Pose::at(at),
        },
    }
}

impl RobotFigure {
    /// Body parts, in draw order.
    #[must_use]
    pub fn parts(&self) -> &[RobotPart] {
        &self.parts
    }

    /// Ring particles at rest.
    #[must_use]
    pub fn ring(&self) -> &[AnimatedObject] {
        &self.ring
    }

    /// Posed state at `elapsed`.
    #[must_use]
    pub fn frame_at(&self, elapsed: f32) -> RobotFrame {
        let mut frame = RobotFrame::default();
        self.animate(elapsed, &mut frame);
        frame
    }

    /// Rest pose of `part` at `elapsed` with the blink applied to eyes.
    #[must_use]
    pub fn part_pose(part: &RobotPart, elapsed: f32) -> Pose {
        let mut pose = part.object.pose;
        if part.role == PartRole::Eye {
            pose.scale.y = eye_scale(elapsed);
        }
        pose
    }
}

impl Default for RobotFigure {
    fn default() -> Self {
        let limb = Material::solid(palette::SLATE_600);
        let arm = Geometry::Cylinder {
            radius: 0.15,
            height: 1.2,
            segments: 16,
        };
        let leg = Geometry::Cylinder {
            radius: 0.15,
            height: 1.0,
            segments: 16,
        };
        let eye = Geometry::Sphere {
            radius: 0.1,
            segments: 16,
        };
        let eye_material = Material::solid(palette::BLUE).glowing(1.0);
        let parts = vec![
            part(
                "torso",
                PartRole::Body,
                0,
                Geometry::Cuboid {
                    size: Vec3::new(1.2, 1.5, 1.0),
                },
                Material::solid(palette::SLATE_800),
                Vec3::ZERO,
            ),
            part(
                "head",
                PartRole::Body,
                1,
                Geometry::Sphere {
                    radius: 0.5,
                    segments: 32,
                },
                Material::solid(palette::SLATE_700),
                Vec3::new(0.0, 0.9, 0.0),
            ),
            part(
                "eye_left",
                PartRole::Eye,
                2,
                eye,
                eye_material,
                Vec3::new(-0.2, 0.95, 0.4),
            ),
            part(
                "eye_right",
                PartRole::Eye,
                3,
                eye,
                eye_material,
                Vec3::new(0.2, 0.95, 0.4),
            ),
            part(
                "mouth",
                PartRole::Body,
                4,
                Geometry::Cuboid {
                    size: Vec3::new(0.3, 0.05, 0.1),
                },
                Material::solid(palette::LIME).glowing(0.5),
                Vec3::new(0.0, 0.7, 0.45),
            ),
            part(
                "arm_left",
                PartRole::Body,
                5,
                arm,
                limb,
                Vec3::new(-0.7, 0.0, 0.0),
            ),
            part(
                "arm_right",
                PartRole::Body,
                6,
                arm,
                limb,
                Vec3::new(0.7, 0.0, 0.0),
            ),
            part(
                "leg_left",
                PartRole::Body,
                7,
                leg,
                limb,
                Vec3::new(-0.3, -1.0, 0.0),
            ),
            part(
                "leg_right",
                PartRole::Body,
                8,
                leg,
                limb,
                Vec3::new(0.3, -1.0, 0.0),
            ),
            part(
                "chest_panel",
                PartRole::Body,
                9,
                Geometry::Cuboid {
                    size: Vec3::new(0.6, 0.4, 0.05),
                },
                Material {
                    emissive: Some(Emissive {
                        color: palette::BLUE,
                        intensity: 0.3,
                    }),
                    ..Material::solid(palette::SLATE_900)
                },
                Vec3::new(0.0, 0.2, 0.51),
            ),
        ];

        let ring = (0..RING_PARTICLES)
            .map(|i| {
                let color = if i % 2 == 0 {
                    palette::BLUE
                } else {
                    palette::LIME
                };
                AnimatedObject {
                    seed: i as u32,
                    geometry: Geometry::Octahedron { radius: 0.05 },
                    material: Material::solid(color).glowing(0.5),
                    pose: Pose::at(ring_particle_base(i)),
                }
            })
            .collect();

        Self { parts, ring }
    }
}

impl Animator for RobotFigure {
    type Frame = RobotFrame;

    fn name(&self) -> &'static str {
        "robot"
    }

    fn animate(&self, elapsed: f32, frame: &mut RobotFrame) {
        frame.body = body_pose(elapsed);
        frame.eye_scale = eye_scale(elapsed);
        frame.ring = ring_pose(elapsed);
        frame.ring_particles.clear();
        frame
            .ring_particles
            .extend((0..self.ring.len()).map(|i| ring_particle_pose(elapsed, i)));
    }
}
