//! Pure button gesture logic, fed with debounced levels and clock time.

use crate::clock::elapsed_since;

/// Fires once per press: on the first poll that sees the button down, then
/// stays quiet until a poll sees it released.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PressLatch {
    latched: bool,
}

impl PressLatch {
    pub const fn new() -> Self {
        Self { latched: false }
    }

    pub fn update(&mut self, pressed: bool) -> bool {
        let fire = pressed && !self.latched;
        self.latched = pressed;
        fire
    }
}

/// Fires once when a button has been held for longer than `threshold_ms`.
///
/// Releasing before then returns it to idle with no event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LongPress {
    threshold_ms: u32,
    pressed_at: Option<u64>,
    fired: bool,
}

impl LongPress {
    pub const fn new(threshold_ms: u32) -> Self {
        Self {
            threshold_ms,
            pressed_at: None,
            fired: false,
        }
    }

    pub fn update(&mut self, pressed: bool, now: u64) -> bool {
        if !pressed {
            self.pressed_at = None;
            self.fired = false;
            return false;
        }

        let since = *self.pressed_at.get_or_insert(now);
        if self.fired || elapsed_since(now, since) <= u64::from(self.threshold_ms) {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Contact-bounce filter for one raw button level.
///
/// The reported level only follows the raw one after it has been stable
/// for `settle_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    settle_ms: u64,
    stable: bool,
    raw: bool,
    raw_since: u64,
}

impl Debouncer {
    pub const fn new(settle_ms: u64) -> Self {
        Self {
            settle_ms,
            stable: false,
            raw: false,
            raw_since: 0,
        }
    }

    /// Feed the raw level sampled at `now`; returns the debounced level.
    pub fn update(&mut self, raw: bool, now: u64) -> bool {
        if raw != self.raw {
            self.raw = raw;
            self.raw_since = now;
        } else if elapsed_since(now, self.raw_since) >= self.settle_ms {
            self.stable = raw;
        }
        self.stable
    }
}
