//! Browser bindings: `matchMedia` reduced-motion source and logging setup.

use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, MediaQueryListEvent};

use super::{MotionPreferenceSource, WatchGuard};
use crate::error::BackdropError;
use crate::motion::MotionNotifier;

/// Media query matching the reduced-motion accessibility setting.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Route `log` output to the browser console and panics to `console.error`.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::warn!("logger already initialized");
    }
}

/// Reduced-motion preference backed by `window.matchMedia`.
#[derive(Debug, Clone)]
pub struct MediaQueryPreference {
    query: MediaQueryList,
}

impl MediaQueryPreference {
    /// Query the current window.
    pub fn new() -> Result<Self, BackdropError> {
        let window = web_sys::window()
            .ok_or_else(|| BackdropError::Platform("no global window".into()))?;
        let query = window
            .match_media(REDUCED_MOTION_QUERY)
            .map_err(|e| BackdropError::Platform(format!("matchMedia failed: {e:?}")))?
            .ok_or_else(|| {
                BackdropError::Platform("matchMedia returned no list".into())
            })?;
        Ok(Self { query })
    }
}

impl MotionPreferenceSource for MediaQueryPreference {
    fn prefers_reduced_motion(&self) -> bool {
        self.query.matches()
    }

    fn watch(&self, notifier: MotionNotifier) -> WatchGuard {
        let on_change = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |evt: MediaQueryListEvent| {
                let _ = notifier.notify(evt.matches());
            },
        );
        if let Err(e) = self
            .query
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        {
            log::warn!("reduced-motion listener unavailable: {e:?}");
            return WatchGuard::noop();
        }
        let query = self.query.clone();
        WatchGuard::new(move || {
            let _ = query.remove_event_listener_with_callback(
                "change",
                on_change.as_ref().unchecked_ref(),
            );
        })
    }
}
