//! Frame pacing for the scheduler.

use web_time::{Duration, Instant};

/// Frame timing with FPS calculation and optional frame limiting
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Timestamp of the previous completed frame
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: None,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the previous frame to render at
    /// `now`.
    #[must_use]
    pub fn should_render(&self, now: Instant) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.map_or(true, |last| {
            now.saturating_duration_since(last) >= self.min_frame_duration
        })
    }

    /// Time left before the next frame is due (zero when already due).
    #[must_use]
    pub fn time_until_next_frame(&self, now: Instant) -> Duration {
        self.last_frame.map_or(Duration::ZERO, |last| {
            self.min_frame_duration
                .saturating_sub(now.saturating_duration_since(last))
        })
    }

    /// Record a completed frame of length `frame_time`.
    pub fn record(&mut self, frame_time: Duration) {
        let seconds = frame_time.as_secs_f32();
        if seconds > 0.0 {
            let instant_fps = 1.0 / seconds;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Call after rendering a wall-clock frame at `now`.
    pub fn end_frame(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            self.record(now.saturating_duration_since(last));
        }
        self.last_frame = Some(now);
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
