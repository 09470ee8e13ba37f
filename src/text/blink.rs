//! Cooperative cursor blink state.
//!
//! There is no timer. The host's render loop calls [`CursorBlink::update`]
//! and the state toggles once the interval has elapsed since the last
//! toggle. Stopping the calls stops the blinking.

use std::time::{Duration, Instant};

/// Default blink half-period.
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(530);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
    last_toggle: Instant,
    interval: Duration,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new(DEFAULT_BLINK_INTERVAL)
    }
}

impl CursorBlink {
    /// Create a visible cursor that toggles every `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            visible: true,
            last_toggle: Instant::now(),
            interval,
        }
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Toggle visibility if the interval has elapsed since the last toggle.
    ///
    /// Returns `true` when visibility changed (the host should redraw).
    /// A zero interval disables blinking.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.interval.is_zero() {
            let changed = !self.visible;
            self.visible = true;
            return changed;
        }
        if now.saturating_duration_since(self.last_toggle) >= self.interval {
            self.visible = !self.visible;
            self.last_toggle = now;
            return true;
        }
        false
    }

    /// Show the cursor and restart the interval, e.g. after typing.
    pub fn reset(&mut self, now: Instant) {
        self.visible = true;
        self.last_toggle = now;
    }
}
