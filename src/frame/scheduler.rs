use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::Vec2;
use web_time::{Duration, Instant};

use super::clock::{FrameClock, FrameTime};
use crate::util::frame_timing::FrameTiming;

/// Viewport size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Width over height; 1 for a degenerate viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Everything a frame callback sees. Identical for all callbacks in a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Clock sample for this frame.
    pub time: FrameTime,
    /// Pointer position in NDC.
    pub pointer: Vec2,
    /// Current viewport.
    pub viewport: Viewport,
}

type Callback = Rc<RefCell<dyn FnMut(&FrameContext)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    fn remove(&mut self, id: u64) -> Option<Callback> {
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(index).1)
    }
}

/// Teardown handle for a registered frame callback.
///
/// Dropping the handle (or calling [`cancel`](Self::cancel)) unregisters
/// the callback; it is never invoked again, even when the handle is dropped
/// by another callback in the middle of a frame.
#[must_use = "dropping a FrameHandle immediately unregisters its callback"]
pub struct FrameHandle {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl FrameHandle {
    /// Unregister now.
    pub fn cancel(self) {}

    /// Whether the callback is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let removed = registry.borrow_mut().remove(self.id);
            // Captured state may own other handles; release it after the
            // registry borrow ends.
            drop(removed);
        }
    }
}

impl std::fmt::Debug for FrameHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameHandle")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Host-side frame driver.
///
/// Samples the clock once per frame and invokes every registered callback
/// in registration order with the same [`FrameContext`].
pub struct FrameScheduler {
    registry: Rc<RefCell<Registry>>,
    clock: FrameClock,
    timing: FrameTiming,
    pointer: Vec2,
    viewport: Viewport,
}

impl FrameScheduler {
    /// Scheduler limited to `target_fps` wall-clock frames per second
    /// (0 = unlimited).
    #[must_use]
    pub fn new(viewport: Viewport, target_fps: u32) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::default())),
            clock: FrameClock::new(),
            timing: FrameTiming::new(target_fps),
            pointer: Vec2::ZERO,
            viewport,
        }
    }

    /// Register `callback` to run once per frame until the returned handle
    /// is dropped.
    pub fn register<F>(&self, callback: F) -> FrameHandle
    where
        F: FnMut(&FrameContext) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let callback: Callback = Rc::new(RefCell::new(callback));
        registry.entries.push((id, callback));
        FrameHandle {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Number of live callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    /// Latest pointer position in NDC.
    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Viewport the next frames report.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether a wall-clock frame is due at `now` under the FPS limit.
    #[must_use]
    pub fn should_render(&self, now: Instant) -> bool {
        self.timing.should_render(now)
    }

    /// Time left before the next wall-clock frame is due.
    #[must_use]
    pub fn time_until_next_frame(&self, now: Instant) -> Duration {
        self.timing.time_until_next_frame(now)
    }

    /// Run a wall-clock frame at `now`.
    pub fn run_frame(&mut self, now: Instant) -> FrameTime {
        let time = self.clock.tick(now);
        self.dispatch(time);
        self.timing.end_frame(now);
        time
    }

    /// Run a frame `delta` after the previous one, independent of the wall
    /// clock.
    pub fn advance(&mut self, delta: Duration) -> FrameTime {
        let time = self.clock.advance(delta);
        self.dispatch(time);
        if time.frame > 0 {
            self.timing.record(delta);
        }
        time
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    fn dispatch(&self, time: FrameTime) {
        let ctx = FrameContext {
            time,
            pointer: self.pointer,
            viewport: self.viewport,
        };
        // Snapshot so callbacks can register or cancel without holding the
        // registry borrow.
        let snapshot: Vec<(u64, Callback)> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|(id, cb)| (*id, Rc::clone(cb)))
            .collect();
        for (id, callback) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            (callback.borrow_mut())(&ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn scheduler() -> FrameScheduler {
        FrameScheduler::new(Viewport::default(), 0)
    }

    #[test]
    fn callbacks_run_in_registration_order() {
        let mut s = scheduler();
        let log = Rc::new(RefCell::new(Vec::new()));
        let handles: Vec<FrameHandle> = (0..3)
            .map(|i| {
                let log = Rc::clone(&log);
                s.register(move |_| log.borrow_mut().push(i))
            })
            .collect();
        let _ = s.advance(Duration::from_millis(16));
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        drop(handles);
    }

    #[test]
    fn dropping_handle_stops_callback() {
        let mut s = scheduler();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let handle = s.register(move |_| c.set(c.get() + 1));
        let _ = s.advance(Duration::from_millis(16));
        assert!(handle.is_active());
        handle.cancel();
        assert_eq!(s.callback_count(), 0);
        for _ in 0..5 {
            let _ = s.advance(Duration::from_millis(16));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn handle_dropped_mid_frame_is_not_invoked() {
        let mut s = scheduler();
        let victim_runs = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<FrameHandle>>> = Rc::new(RefCell::new(None));

        let killer_slot = Rc::clone(&slot);
        let killer = s.register(move |_| {
            let _ = killer_slot.borrow_mut().take();
        });
        let runs = Rc::clone(&victim_runs);
        *slot.borrow_mut() = Some(s.register(move |_| runs.set(runs.get() + 1)));

        let _ = s.advance(Duration::from_millis(16));
        assert_eq!(victim_runs.get(), 0);
        assert_eq!(s.callback_count(), 1);
        drop(killer);
    }

    #[test]
    fn every_callback_sees_the_same_context() {
        let mut s = scheduler();
        s.set_pointer(Vec2::new(0.5, -0.5));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let a = {
            let seen = Rc::clone(&seen);
            s.register(move |ctx| seen.borrow_mut().push(*ctx))
        };
        let b = {
            let seen = Rc::clone(&seen);
            s.register(move |ctx| seen.borrow_mut().push(*ctx))
        };
        let _ = s.advance(Duration::ZERO);
        let _ = s.advance(Duration::from_millis(250));
        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[2], seen[3]);
        assert!((seen[2].time.elapsed - 0.25).abs() < 1e-6);
        assert_eq!(seen[2].pointer, Vec2::new(0.5, -0.5));
        drop((a, b));
    }

    #[test]
    fn handle_outliving_scheduler_is_harmless() {
        let s = scheduler();
        let handle = s.register(|_| {});
        drop(s);
        assert!(!handle.is_active());
        drop(handle);
    }

    #[test]
    fn viewport_aspect() {
        let vp = Viewport {
            width: 1920,
            height: 1080,
        };
        assert!((vp.aspect() - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(
            Viewport {
                width: 10,
                height: 0
            }
            .aspect(),
            1.0
        );
    }
}
