//! Reduced-motion gate.
//!
//! The flag is read once from the platform when the scene is built and then
//! kept current through a single-slot channel: the platform writes the
//! latest preference into the slot, and the scene consumes it at the start
//! of the next frame. Several writes between frames collapse to the last.

use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Holds the effective reduced-motion flag for a scene.
#[derive(Debug)]
pub struct MotionGate {
    reduced: bool,
    forced: Option<bool>,
    slot: Rc<Cell<Option<bool>>>,
}

impl MotionGate {
    /// Gate starting from the platform preference. `forced` pins the flag
    /// and makes later notifications no-ops.
    #[must_use]
    pub fn new(platform_reduced: bool, forced: Option<bool>) -> Self {
        Self {
            reduced: forced.unwrap_or(platform_reduced),
            forced,
            slot: Rc::new(Cell::new(None)),
        }
    }

    /// Current value.
    #[must_use]
    pub fn is_reduced(&self) -> bool {
        self.reduced
    }

    /// Whether the flag is pinned by configuration.
    #[must_use]
    pub fn is_forced(&self) -> bool {
        self.forced.is_some()
    }

    /// Write end of the update slot.
    #[must_use]
    pub fn notifier(&self) -> MotionNotifier {
        MotionNotifier {
            slot: Rc::downgrade(&self.slot),
        }
    }

    /// Consume a pending update. Returns the new value if it changed.
    pub fn poll(&mut self) -> Option<bool> {
        let pending = self.slot.take()?;
        if self.forced.is_some() || pending == self.reduced {
            return None;
        }
        self.reduced = pending;
        log::info!("reduced motion {}", if pending { "enabled" } else { "disabled" });
        Some(pending)
    }
}

/// Write end of a [`MotionGate`]'s update slot.
#[derive(Debug, Clone)]
pub struct MotionNotifier {
    slot: Weak<Cell<Option<bool>>>,
}

impl MotionNotifier {
    /// Publish the latest preference. Returns `false` once the gate is gone.
    pub fn notify(&self, reduced: bool) -> bool {
        match self.slot.upgrade() {
            Some(slot) => {
                slot.set(Some(reduced));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_value_comes_from_platform() {
        assert!(MotionGate::new(true, None).is_reduced());
        assert!(!MotionGate::new(false, None).is_reduced());
    }

    #[test]
    fn last_write_wins() {
        let mut gate = MotionGate::new(false, None);
        let notifier = gate.notifier();
        assert!(notifier.notify(true));
        assert!(notifier.notify(false));
        assert!(notifier.notify(true));
        assert_eq!(gate.poll(), Some(true));
        assert!(gate.is_reduced());
        // Slot is empty after consumption
        assert_eq!(gate.poll(), None);
    }

    #[test]
    fn unchanged_value_is_not_reported() {
        let mut gate = MotionGate::new(true, None);
        let _ = gate.notifier().notify(true);
        assert_eq!(gate.poll(), None);
    }

    #[test]
    fn forced_flag_ignores_platform() {
        let mut gate = MotionGate::new(false, Some(true));
        assert!(gate.is_reduced());
        assert!(gate.is_forced());
        let _ = gate.notifier().notify(false);
        assert_eq!(gate.poll(), None);
        assert!(gate.is_reduced());
    }

    #[test]
    fn notifier_outliving_gate() {
        let gate = MotionGate::new(false, None);
        let notifier = gate.notifier();
        drop(gate);
        assert!(!notifier.notify(true));
    }
}
