use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, smoothing and parallax parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 110.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Fraction of the remaining distance covered per second of delta.
    #[schemars(title = "Smoothing Rate", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub smoothing_rate: f32,
    /// Horizontal parallax offset at the pointer's screen edge.
    #[schemars(title = "Parallax X", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub parallax_x: f32,
    /// Vertical parallax offset at the pointer's screen edge.
    #[schemars(title = "Parallax Y", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub parallax_y: f32,
    /// Pose used before any section is known and for unknown sections.
    #[schemars(skip)]
    pub default_position: [f32; 3],
    /// Look-at point paired with `default_position`.
    #[schemars(skip)]
    pub default_look_at: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            smoothing_rate: 2.0,
            parallax_x: 0.5,
            parallax_y: 0.3,
            default_position: [0.0, 0.0, 5.0],
            default_look_at: [0.0, 0.0, 0.0],
        }
    }
}
