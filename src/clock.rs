//! Monotonic time source and blocking delays.

/// Millisecond clock the polling loop runs against.
///
/// `delay_ms` blocks the whole loop, exactly like a sensor read or a
/// sample playback does.
pub trait Clock {
    /// Milliseconds since boot. Never goes backwards.
    fn now_ms(&self) -> u64;

    /// Busy-wait for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Milliseconds elapsed since `since`, saturating at zero if the caller
/// passes a timestamp from the future.
pub fn elapsed_since(now: u64, since: u64) -> u64 {
    now.saturating_sub(since)
}
