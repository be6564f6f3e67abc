//! Time abstraction traits for platform-agnostic timing.
//!
//! The classifier only ever asks "how long since this instant?", so instants
//! backed by a bounded-width counter must answer with wrapping arithmetic.
//! [`MillisInstant`] does this for the common free-running `u32` millisecond
//! tick.

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
    /// Implementations over wrapping counters must use wrapping subtraction.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Milliseconds elapsed since an earlier instant.
    #[inline]
    fn millis_since(&self, earlier: Self) -> u64 {
        self.duration_since(earlier).as_millis()
    }
}

/// Millisecond duration measured against a [`MillisInstant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u32);

impl TimeDuration for MillisDuration {
    const ZERO: Self = MillisDuration(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    /// Saturates at `u32::MAX` milliseconds (~49.7 days).
    fn from_millis(millis: u64) -> Self {
        MillisDuration(u32::try_from(millis).unwrap_or(u32::MAX))
    }
}

/// A free-running `u32` millisecond counter value, as returned by a SysTick
/// handler or an Arduino-style `millis()`.
///
/// Wraps after ~49.7 days; [`duration_since`](TimeInstant::duration_since)
/// stays correct across the wrap as long as the two instants are less than
/// one full period apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisInstant(pub u32);

impl MillisInstant {
    /// Returns the raw counter value.
    pub fn as_millis(&self) -> u32 {
        self.0
    }

    /// Returns the instant `millis` later, wrapping at `u32::MAX`.
    pub fn wrapping_add(self, millis: u32) -> Self {
        MillisInstant(self.0.wrapping_add(millis))
    }
}

impl TimeInstant for MillisInstant {
    type Duration = MillisDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(self.0.wrapping_sub(earlier.0))
    }
}

#[cfg(feature = "embassy")]
mod embassy {
    use super::{TimeDuration, TimeInstant, TimeSource};
    use embassy_time::{Duration, Instant};

    impl TimeDuration for Duration {
        const ZERO: Self = Duration::from_ticks(0);

        fn as_millis(&self) -> u64 {
            (*self).as_millis()
        }

        fn from_millis(millis: u64) -> Self {
            Duration::from_millis(millis)
        }
    }

    impl TimeInstant for Instant {
        type Duration = Duration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            self.saturating_duration_since(earlier)
        }
    }

    /// Time source reading the embassy time driver.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct EmbassyTimeSource;

    impl TimeSource<Instant> for EmbassyTimeSource {
        fn now(&self) -> Instant {
            Instant::now()
        }
    }
}

#[cfg(feature = "embassy")]
pub use embassy::EmbassyTimeSource;
