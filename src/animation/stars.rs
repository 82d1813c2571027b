//! Far-away star shell behind the scene.
//!
//! Star positions, colors and sizes are fixed when the field is generated.
//! Motion happens entirely in the shader, so the per-frame output is a
//! single time uniform.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::Animator;
use crate::options::StarOptions;
use crate::util::color::hsl_to_rgb;

/// One star point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Star {
    /// World-space position.
    pub position: Vec3,
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Point size before perspective attenuation.
    pub size: f32,
}

/// Stars scattered on a spherical shell, outermost first.
#[derive(Debug, Clone)]
pub struct StarField {
    stars: Vec<Star>,
    options: StarOptions,
    speed: f32,
}

/// Uniformly distributed unit direction.
fn random_direction(rng: &mut StdRng) -> Vec3 {
    let phi = (1.0 - 2.0 * rng.random::<f32>()).acos();
    let theta = rng.random::<f32>() * TAU;
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vec3::new(sin_phi * theta.sin(), cos_phi, sin_phi * theta.cos())
}

fn scatter(count: usize, options: &StarOptions) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut radius = options.radius + options.depth;
    let step = if count == 0 {
        0.0
    } else {
        options.depth / count as f32
    };
    (0..count)
        .map(|i| {
            radius -= step * rng.random::<f32>();
            let hue = i as f32 / count as f32;
            Star {
                position: random_direction(&mut rng) * radius,
                color: hsl_to_rgb(hue, options.saturation, 0.9),
                size: (0.5 + 0.5 * rng.random::<f32>()) * options.factor,
            }
        })
        .collect()
}

impl StarField {
    /// Build the field for the given reduced-motion state.
    #[must_use]
    pub fn new(options: &StarOptions, reduced_motion: bool) -> Self {
        let count = options.count_for(reduced_motion);
        Self {
            stars: scatter(count, options),
            options: options.clone(),
            speed: options.speed_for(reduced_motion),
        }
    }

    /// Switch count and speed to match the reduced-motion state.
    ///
    /// Positions are only re-scattered when the count actually changes;
    /// returns whether they were.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) -> bool {
        self.speed = self.options.speed_for(reduced_motion);
        let count = self.options.count_for(reduced_motion);
        if count == self.stars.len() {
            return false;
        }
        log::debug!("{}: {} -> {count}", self.name(), self.stars.len());
        self.stars = scatter(count, &self.options);
        true
    }

    /// All stars.
    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Number of stars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Whether the field holds no stars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Shader time multiplier currently in effect.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Shader time uniform at `elapsed`.
    #[must_use]
    pub fn time_uniform(&self, elapsed: f32) -> f32 {
        elapsed * self.speed
    }
}

impl Animator for StarField {
    type Frame = f32;

    fn name(&self) -> &'static str {
        "stars"
    }

    fn animate(&self, elapsed: f32, frame: &mut f32) {
        *frame = self.time_uniform(elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_motion_preference() {
        let opts = StarOptions::default();
        assert_eq!(StarField::new(&opts, false).len(), 5000);
        assert_eq!(StarField::new(&opts, true).len(), 1000);
    }

    #[test]
    fn stars_lie_inside_shell() {
        let opts = StarOptions::default();
        let field = StarField::new(&opts, false);
        let outer = opts.radius + opts.depth + 1e-3;
        let inner = opts.radius - 1e-3;
        for star in field.stars() {
            let r = star.position.length();
            assert!(r <= outer && r >= inner, "radius {r}");
        }
    }

    #[test]
    fn radii_decrease_monotonically() {
        let field = StarField::new(&StarOptions::default(), true);
        let radii: Vec<f32> = field.stars().iter().map(|s| s.position.length()).collect();
        assert!(radii.windows(2).all(|w| w[1] <= w[0] + 1e-3));
    }

    #[test]
    fn sizes_and_colors_in_range() {
        let opts = StarOptions::default();
        let field = StarField::new(&opts, false);
        for star in field.stars() {
            assert!(star.size >= 0.5 * opts.factor && star.size <= opts.factor);
            // Zero saturation gives gray at lightness 0.9.
            for c in star.color {
                assert!((c - 0.9).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn reduced_motion_freezes_time_uniform() {
        let opts = StarOptions::default();
        let mut field = StarField::new(&opts, false);
        assert!((field.time_uniform(3.0) - 3.0).abs() < 1e-6);
        assert!(field.set_reduced_motion(true));
        assert_eq!(field.len(), 1000);
        assert!(!field.set_reduced_motion(true));
        let mut t = 1.0;
        field.animate(42.0, &mut t);
        assert_eq!(t, 0.0);
    }

    #[test]
    fn layout_is_reproducible() {
        let opts = StarOptions::default();
        let a = StarField::new(&opts, true);
        let b = StarField::new(&opts, true);
        assert_eq!(a.stars(), b.stars());
    }
}
