//! Timing configuration for the button classifier.

use crate::time::TimeDuration;
use crate::types::ConfigError;

/// Default debounce period in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 20;

/// Default maximum release-to-press gap for a double click, in milliseconds.
pub const DEFAULT_DOUBLE_CLICK_GAP_MS: u64 = 250;

/// Default short-hold tier in milliseconds.
pub const DEFAULT_HOLD_MS: u64 = 1000;

/// Default long-hold tier in milliseconds.
pub const DEFAULT_LONG_HOLD_MS: u64 = 3000;

/// Timing thresholds for a [`ButtonClassifier`](crate::ButtonClassifier).
///
/// Fixed once the classifier is constructed. The thresholds must satisfy
/// `long_hold_time > hold_time > debounce_period`; breaking that ordering is
/// not detected at runtime (at worst a hold tier never fires). Call
/// [`validate`](Self::validate) from tests if the values come from
/// somewhere other than source code.
///
/// ```
/// use multiclick::{ButtonConfig, MillisDuration};
///
/// let config = ButtonConfig::<MillisDuration>::new()
///     .debounce_period(MillisDuration(10))
///     .hold_time(MillisDuration(600));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonConfig<D: TimeDuration> {
    debounce_period: D,
    double_click_gap: D,
    hold_time: D,
    long_hold_time: D,
}

impl<D: TimeDuration> ButtonConfig<D> {
    /// Creates the default configuration (20 / 250 / 1000 / 3000 ms).
    pub fn new() -> Self {
        Self {
            debounce_period: D::from_millis(DEFAULT_DEBOUNCE_MS),
            double_click_gap: D::from_millis(DEFAULT_DOUBLE_CLICK_GAP_MS),
            hold_time: D::from_millis(DEFAULT_HOLD_MS),
            long_hold_time: D::from_millis(DEFAULT_LONG_HOLD_MS),
        }
    }

    /// Sets the minimum settling time after an opposite edge.
    pub fn debounce_period(mut self, period: D) -> Self {
        self.debounce_period = period;
        self
    }

    /// Sets the maximum release-to-press gap that still counts as a double click.
    pub fn double_click_gap(mut self, gap: D) -> Self {
        self.double_click_gap = gap;
        self
    }

    /// Sets the short-hold tier.
    pub fn hold_time(mut self, time: D) -> Self {
        self.hold_time = time;
        self
    }

    /// Sets the long-hold tier.
    pub fn long_hold_time(mut self, time: D) -> Self {
        self.long_hold_time = time;
        self
    }

    /// Checks the tier ordering.
    ///
    /// # Errors
    /// * `HoldNotAfterDebounce` - `hold_time <= debounce_period`
    /// * `LongHoldNotAfterHold` - `long_hold_time <= hold_time`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hold_time.as_millis() <= self.debounce_period.as_millis() {
            return Err(ConfigError::HoldNotAfterDebounce);
        }
        if self.long_hold_time.as_millis() <= self.hold_time.as_millis() {
            return Err(ConfigError::LongHoldNotAfterHold);
        }
        Ok(())
    }

    /// Returns the debounce period.
    pub fn get_debounce_period(&self) -> D {
        self.debounce_period
    }

    /// Returns the double-click gap.
    pub fn get_double_click_gap(&self) -> D {
        self.double_click_gap
    }

    /// Returns the short-hold tier.
    pub fn get_hold_time(&self) -> D {
        self.hold_time
    }

    /// Returns the long-hold tier.
    pub fn get_long_hold_time(&self) -> D {
        self.long_hold_time
    }
}

impl<D: TimeDuration> Default for ButtonConfig<D> {
    fn default() -> Self {
        Self::new()
    }
}
