//! Per-frame object animators.
//!
//! Every animator is a pure function of the elapsed scene time and its own
//! seeds: calling it twice with the same inputs yields bit-identical poses,
//! and no animator reads another animator's state. The scene samples the
//! clock once per frame and hands the same elapsed time to all of them.

pub mod network;
pub mod object;
pub mod particles;
pub mod pose;
pub mod robot;
pub mod shapes;
pub mod stars;

pub use network::{NetworkFrame, NetworkLayer, NetworkVisualization};
pub use object::{AnimatedObject, Emissive, Geometry, Material};
pub use particles::ParticleField;
pub use pose::Pose;
pub use robot::{RobotFigure, RobotFrame};
pub use shapes::{FloatMotion, FloatingShape, ShapeFrame};
pub use stars::StarField;

/// Something whose visual state is recomputed from the elapsed scene time.
pub trait Animator {
    /// Output written in place every frame.
    type Frame;

    /// Stable name for logging.
    fn name(&self) -> &'static str;

    /// Write the state at `elapsed` seconds into `frame`.
    ///
    /// Implementations must be deterministic in `elapsed` and the
    /// animator's own configuration.
    fn animate(&self, elapsed: f32, frame: &mut Self::Frame);
}
