//! Millisecond clock for led-indicator on the RP2040 hardware timer.

use led_indicator::{Millis, TimeSource};
use rp_pico::hal::Timer;

/// Time source wrapper around the RP2040 64-bit microsecond timer.
///
/// Milliseconds are truncated to 32 bits, so the clock wraps the same way a
/// `millis()` counter does. The indicator handles the rollover.
pub struct MillisTimer {
    timer: Timer,
}

impl MillisTimer {
    /// Create a new millisecond clock
    pub fn new(timer: Timer) -> Self {
        Self { timer }
    }
}

impl TimeSource<Millis> for MillisTimer {
    fn now(&self) -> Millis {
        let micros = self.timer.get_counter().ticks();
        Millis((micros / 1_000) as u32)
    }
}
