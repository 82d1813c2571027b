//! Instanced drifting particle field.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::object::{Geometry, Material};
use super::pose::Pose;
use super::Animator;
use crate::util::color::palette;

/// Vertical drift amplitude.
const DRIFT_AMPLITUDE: f32 = 0.5;
/// Time multiplier of the drift phase.
const DRIFT_RATE: f32 = 0.1;
/// Phase offset between consecutive particles.
const DRIFT_PHASE_STEP: f32 = 0.01;
/// Shared tumble rates around x and y (rad/s).
const TUMBLE_RATE: Vec3 = Vec3::new(0.1, 0.05, 0.0);

/// Pose of particle `index` whose rest position is `base`.
///
/// At `elapsed == 0` the particle sits exactly on its base position with no
/// rotation.
#[must_use]
pub fn particle_pose(base: Vec3, elapsed: f32, index: usize) -> Pose {
    let phase = elapsed * DRIFT_RATE + index as f32 * DRIFT_PHASE_STEP;
    Pose {
        position: Vec3::new(
            base.x,
            base.y + phase.sin() * DRIFT_AMPLITUDE,
            base.z,
        ),
        rotation: TUMBLE_RATE * elapsed,
        scale: Vec3::ONE,
    }
}

/// A cloud of small octahedra scattered uniformly through a cube.
///
/// Base positions are fixed when the field is generated and come from a
/// seeded RNG, so the same `(count, spread, seed)` always produces the same
/// layout.
#[derive(Debug, Clone)]
pub struct ParticleField {
    base: Vec<Vec3>,
    spread: f32,
    seed: u64,
    geometry: Geometry,
    material: Material,
}

impl ParticleField {
    /// Scatter `count` particles through a cube of side `spread` centered
    /// on the origin.
    #[must_use]
    pub fn generate(count: usize, spread: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let base = (0..count)
            .map(|_| {
                Vec3::new(
                    (rng.random::<f32>() - 0.5) * spread,
                    (rng.random::<f32>() - 0.5) * spread,
                    (rng.random::<f32>() - 0.5) * spread,
                )
            })
            .collect();
        Self {
            base,
            spread,
            seed,
            geometry: Geometry::Octahedron { radius: 0.02 },
            material: Material::solid(palette::BLUE).with_opacity(0.6),
        }
    }

    /// Override the per-instance geometry and material.
    #[must_use]
    pub fn with_appearance(mut self, geometry: Geometry, material: Material) -> Self {
        self.geometry = geometry;
        self.material = material;
        self
    }

    /// Re-scatter with a new particle count, keeping spread, seed and
    /// appearance.
    pub fn regenerate(&mut self, count: usize) {
        let appearance = (self.geometry, self.material);
        *self = Self::generate(count, self.spread, self.seed)
            .with_appearance(appearance.0, appearance.1);
    }

    /// Number of particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.base.len()
    }

    /// Whether the field holds no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Rest positions, in particle order.
    #[must_use]
    pub fn base_positions(&self) -> &[Vec3] {
        &self.base
    }

    /// Shared per-instance geometry.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Shared per-instance material.
    #[must_use]
    pub fn material(&self) -> Material {
        self.material
    }

    /// Pose of particle `index` at `elapsed`, or `None` past the end.
    #[must_use]
    pub fn pose_at(&self, elapsed: f32, index: usize) -> Option<Pose> {
        self.base
            .get(index)
            .map(|&base| particle_pose(base, elapsed, index))
    }
}

impl Animator for ParticleField {
    type Frame = Vec<Pose>;

    fn name(&self) -> &'static str {
        "particles"
    }

    fn animate(&self, elapsed: f32, frame: &mut Vec<Pose>) {
        frame.clear();
        frame.extend(
            self.base
                .iter()
                .enumerate()
                .map(|(i, &base)| particle_pose(base, elapsed, i)),
        );
    }
}
