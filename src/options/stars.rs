use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Background star shell parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Stars", inline)]
#[serde(default)]
pub struct StarOptions {
    /// Inner radius of the shell.
    #[schemars(title = "Radius", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub radius: f32,
    /// Shell thickness.
    #[schemars(title = "Depth", range(min = 0.0, max = 500.0), extend("step" = 1.0))]
    pub depth: f32,
    /// Star count with motion enabled.
    #[schemars(title = "Count", range(min = 0, max = 20000))]
    pub count: usize,
    /// Star count under reduced motion.
    #[schemars(title = "Reduced Motion Count", range(min = 0, max = 20000))]
    pub reduced_count: usize,
    /// Point size multiplier.
    #[schemars(title = "Size Factor", range(min = 0.5, max = 10.0), extend("step" = 0.5))]
    pub factor: f32,
    /// Color saturation (0 renders every star gray).
    #[schemars(title = "Saturation", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub saturation: f32,
    /// Twinkle speed with motion enabled.
    #[schemars(title = "Speed", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub speed: f32,
    /// Layout seed.
    #[schemars(skip)]
    pub seed: u64,
}

impl StarOptions {
    /// Star count for the given reduced-motion state.
    #[must_use]
    pub fn count_for(&self, reduced_motion: bool) -> usize {
        if reduced_motion {
            self.reduced_count
        } else {
            self.count
        }
    }

    /// Shader speed for the given reduced-motion state.
    #[must_use]
    pub fn speed_for(&self, reduced_motion: bool) -> f32 {
        if reduced_motion {
            0.0
        } else {
            self.speed
        }
    }
}

impl Default for StarOptions {
    fn default() -> Self {
        Self {
            radius: 50.0,
            depth: 50.0,
            count: 5000,
            reduced_count: 1000,
            factor: 4.0,
            saturation: 0.0,
            speed: 1.0,
            seed: 0x57A2,
        }
    }
}
