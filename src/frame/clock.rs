use serde::Serialize;
use web_time::{Duration, Instant};

/// Time sample shared by every callback in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FrameTime {
    /// Seconds since the first frame.
    pub elapsed: f32,
    /// Seconds since the previous frame (0 on the first frame).
    pub delta: f32,
    /// Zero-based frame counter.
    pub frame: u64,
}

/// Monotonic scene clock.
///
/// Driven either by wall-clock instants ([`tick`](Self::tick)) or by
/// explicit steps ([`advance`](Self::advance)). Elapsed time accumulates in
/// `f64` so long sessions keep sub-millisecond resolution.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
    elapsed: f64,
    frames: u64,
}

impl FrameClock {
    /// Clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the clock at `now`. Instants earlier than the previous sample
    /// count as a zero-length frame.
    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let delta = self
            .last
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last = Some(self.last.map_or(now, |last| last.max(now)));
        self.step(delta)
    }

    /// Advance by a fixed `delta`.
    pub fn advance(&mut self, delta: Duration) -> FrameTime {
        self.step(delta)
    }

    fn step(&mut self, delta: Duration) -> FrameTime {
        if self.frames > 0 {
            self.elapsed += delta.as_secs_f64();
        }
        let time = FrameTime {
            elapsed: self.elapsed as f32,
            delta: if self.frames > 0 {
                delta.as_secs_f32()
            } else {
                0.0
            },
            frame: self.frames,
        };
        self.frames += 1;
        time
    }

    /// Seconds elapsed as of the last sample.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
