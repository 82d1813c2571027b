//! Sources of the platform's reduced-motion preference.
//!
//! A source reports the current preference and lets a scene subscribe to
//! changes. Subscriptions are held by a [`WatchGuard`]; dropping the guard
//! releases the platform listener.

#[cfg(feature = "web")]
pub mod web;

use std::cell::RefCell;
use std::rc::Rc;

use crate::motion::MotionNotifier;

/// Reports the user's reduced-motion preference.
pub trait MotionPreferenceSource {
    /// Current preference.
    fn prefers_reduced_motion(&self) -> bool;

    /// Forward every later change to `notifier` until the guard drops.
    fn watch(&self, notifier: MotionNotifier) -> WatchGuard;
}

/// Releases a platform subscription on drop.
#[must_use = "dropping a WatchGuard immediately releases the subscription"]
pub struct WatchGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl WatchGuard {
    /// Guard running `release` when dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard for a source that never changes.
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for WatchGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for WatchGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// Fixed preference; hosts without a platform query use this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticPreference(pub bool);

impl MotionPreferenceSource for StaticPreference {
    fn prefers_reduced_motion(&self) -> bool {
        self.0
    }

    fn watch(&self, _notifier: MotionNotifier) -> WatchGuard {
        WatchGuard::noop()
    }
}

#[derive(Debug, Default)]
struct ManualState {
    reduced: bool,
    next_id: u64,
    listeners: Vec<(u64, MotionNotifier)>,
}

/// Preference flipped by the host, e.g. from a settings toggle or a test.
///
/// Clones share state.
#[derive(Debug, Clone, Default)]
pub struct ManualPreference {
    state: Rc<RefCell<ManualState>>,
}

impl ManualPreference {
    /// Source starting at `reduced`.
    #[must_use]
    pub fn new(reduced: bool) -> Self {
        let source = Self::default();
        source.state.borrow_mut().reduced = reduced;
        source
    }

    /// Change the preference and notify every watcher.
    pub fn set(&self, reduced: bool) {
        let mut state = self.state.borrow_mut();
        if state.reduced == reduced {
            return;
        }
        state.reduced = reduced;
        // Watchers whose gate is gone are dropped here.
        state.listeners.retain(|(_, n)| n.notify(reduced));
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl MotionPreferenceSource for ManualPreference {
    fn prefers_reduced_motion(&self) -> bool {
        self.state.borrow().reduced
    }

    fn watch(&self, notifier: MotionNotifier) -> WatchGuard {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, notifier));
            id
        };
        let state = Rc::downgrade(&self.state);
        WatchGuard::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().listeners.retain(|(entry, _)| *entry != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::MotionGate;

    #[test]
    fn static_source_never_notifies() {
        let source = StaticPreference(true);
        assert!(source.prefers_reduced_motion());
        let gate = MotionGate::new(false, None);
        let guard = source.watch(gate.notifier());
        drop(guard);
    }

    #[test]
    fn manual_source_notifies_watchers() {
        let source = ManualPreference::new(false);
        let mut gate = MotionGate::new(source.prefers_reduced_motion(), None);
        let _guard = source.watch(gate.notifier());
        source.set(true);
        assert_eq!(gate.poll(), Some(true));
        assert!(source.prefers_reduced_motion());
    }

    #[test]
    fn dropping_guard_unsubscribes() {
        let source = ManualPreference::new(false);
        let mut gate = MotionGate::new(false, None);
        let guard = source.watch(gate.notifier());
        assert_eq!(source.listener_count(), 1);
        drop(guard);
        assert_eq!(source.listener_count(), 0);
        source.set(true);
        assert_eq!(gate.poll(), None);
    }

    #[test]
    fn dead_gates_are_pruned() {
        let source = ManualPreference::new(false);
        let gate = MotionGate::new(false, None);
        let guard = source.watch(gate.notifier());
        drop(gate);
        source.set(true);
        assert_eq!(source.listener_count(), 0);
        drop(guard);
    }
}
