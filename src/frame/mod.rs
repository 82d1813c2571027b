//! Frame clock and the callback scheduler that drives the scene.

/// Monotonic clock sampled once per frame.
pub mod clock;
/// Callback registration with RAII teardown handles.
pub mod scheduler;

pub use clock::{FrameClock, FrameTime};
pub use scheduler::{FrameContext, FrameHandle, FrameScheduler, Viewport};
