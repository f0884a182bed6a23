//! Time abstraction traits for platform-agnostic timing.
//!
//! The indicator only ever asks "how long since then?", so instants must
//! answer that question correctly across counter rollover. [`Millis`] is the
//! ready-made implementation for a wrapping 32-bit millisecond tick counter.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by a wrapping counter must use modular
    /// subtraction so that an instant taken just before rollover still
    /// yields a small positive duration.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Milliseconds since boot, from a wrapping 32-bit counter.
///
/// Rolls over after ~49.7 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

/// Duration between two [`Millis`] instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u32);

impl TimeDuration for MillisDuration {
    const ZERO: Self = MillisDuration(0);

    fn as_millis(&self) -> u64 {
        u64::from(self.0)
    }

    fn from_millis(millis: u64) -> Self {
        MillisDuration(u32::try_from(millis).unwrap_or(u32::MAX))
    }
}

impl TimeInstant for Millis {
    type Duration = MillisDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(self.0.wrapping_sub(earlier.0))
    }
}

/// Milliseconds elapsed from `earlier` to `now`.
#[inline]
pub(crate) fn elapsed_millis<I: TimeInstant>(now: I, earlier: I) -> u64 {
    now.duration_since(earlier).as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_since_survives_rollover() {
        let before = Millis(u32::MAX - 5);
        let after = Millis(10);
        assert_eq!(after.duration_since(before), MillisDuration(16));
    }

    #[test]
    fn duration_since_plain_case() {
        assert_eq!(Millis(2500).duration_since(Millis(500)).as_millis(), 2000);
    }

    #[test]
    fn from_millis_saturates() {
        assert_eq!(MillisDuration::from_millis(u64::MAX), MillisDuration(u32::MAX));
    }
}
