use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::color::{palette, Rgb};

/// Drifting particle field parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Particles", inline)]
#[serde(default)]
pub struct ParticleOptions {
    /// Side length of the cube particles are scattered through.
    #[schemars(title = "Spread", range(min = 10.0, max = 400.0), extend("step" = 5.0))]
    pub spread: f32,
    /// Layout seed.
    #[schemars(skip)]
    pub seed: u64,
    /// Particle count below `medium_width`.
    #[schemars(title = "Small Screen Count", range(min = 0, max = 5000))]
    pub small_count: usize,
    /// Particle count between `medium_width` and `large_width`.
    #[schemars(title = "Medium Screen Count", range(min = 0, max = 5000))]
    pub medium_count: usize,
    /// Particle count at or above `large_width`.
    #[schemars(title = "Large Screen Count", range(min = 0, max = 10000))]
    pub large_count: usize,
    /// Viewport width (px) at which the medium count starts.
    #[schemars(skip)]
    pub medium_width: u32,
    /// Viewport width (px) at which the large count starts.
    #[schemars(skip)]
    pub large_width: u32,
    /// Octahedron radius of each particle.
    #[schemars(skip)]
    pub size: f32,
    /// Particle opacity.
    #[schemars(title = "Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub opacity: f32,
    /// Particle color.
    #[schemars(skip)]
    pub color: Rgb,
}

impl ParticleOptions {
    /// Particle count for a viewport `width` pixels wide.
    ///
    /// Always 0 under reduced motion.
    #[must_use]
    pub fn count_for_width(&self, width: u32, reduced_motion: bool) -> usize {
        if reduced_motion {
            0
        } else if width < self.medium_width {
            self.small_count
        } else if width < self.large_width {
            self.medium_count
        } else {
            self.large_count
        }
    }
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            spread: 100.0,
            seed: 0x5EED,
            small_count: 500,
            medium_count: 1000,
            large_count: 2000,
            medium_width: 768,
            large_width: 1024,
            size: 0.02,
            opacity: 0.6,
            color: palette::BLUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_steps_with_width() {
        let opts = ParticleOptions::default();
        assert_eq!(opts.count_for_width(500, false), 500);
        assert_eq!(opts.count_for_width(767, false), 500);
        assert_eq!(opts.count_for_width(768, false), 1000);
        assert_eq!(opts.count_for_width(1023, false), 1000);
        assert_eq!(opts.count_for_width(1024, false), 2000);
        assert_eq!(opts.count_for_width(1920, false), 2000);
    }

    #[test]
    fn reduced_motion_means_no_particles() {
        let opts = ParticleOptions::default();
        for width in [320, 800, 2560] {
            assert_eq!(opts.count_for_width(width, true), 0);
        }
    }
}
