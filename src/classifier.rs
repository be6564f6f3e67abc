//! Multi-event button classifier.
//!
//! Provides [`ButtonClassifier`], which turns a polled, bouncing digital level
//! into [`ButtonEvent`]s: click, double click, short hold (detected and
//! released) and long hold.
//!
//! The classifier never reads hardware or clocks itself. Each call to
//! [`poll`](ButtonClassifier::poll) hands it the current instant and raw
//! level, and every decision is recomputed from absolute timestamps, so an
//! irregular poll cadence can delay an event but never corrupt state.

use crate::config::ButtonConfig;
use crate::time::{TimeDuration, TimeInstant};
use crate::types::ButtonEvent;

/// Coarse view of where the current gesture stands.
///
/// Derived from the classifier's flags; useful for diagnostics and UI hints
/// (e.g. lighting an LED once a hold qualifies).
///
/// Pressed or released is taken from the last sampled level, not the
/// debounced state. A press that debounce rejected still reports
/// [`Pressed`](Self::Pressed) until the line goes high again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonPhase {
    /// Released, nothing pending.
    Idle,
    /// Down, no hold tier reached yet.
    Pressed,
    /// Down past the short-hold tier.
    HeldShort,
    /// Down past the long-hold tier.
    HeldLong,
    /// Released after a click, waiting to see whether a second press follows.
    AwaitingSecondClick,
}

/// Classifies one button line into click / double-click / hold events.
///
/// The line is active low: `false` means pressed. Poll at an interval well
/// below the debounce period; `poll` is total, never blocks and returns at
/// most one event.
///
/// Debouncing is measured against the *opposite* edge: a press is accepted
/// only once the debounce period has passed since the last accepted release,
/// and a release only once it has passed since the last accepted press.
///
/// # Type Parameters
/// * `I` - Time instant type (e.g. [`MillisInstant`](crate::MillisInstant))
pub struct ButtonClassifier<I: TimeInstant> {
    config: ButtonConfig<I::Duration>,

    last_level: bool,
    down_time: Option<I>,
    up_time: Option<I>,

    // A release is pending: either a second press arrives inside the gap or
    // the gap expires into a click.
    dc_waiting: bool,
    // The current press completes a double click on release.
    dc_on_up: bool,
    // Cleared once a double click fired so the same gesture can't also click.
    single_ok: bool,
    // This press already qualified as a hold; its release is not a click.
    ignore_release: bool,
    hold_fired: bool,
    long_hold_fired: bool,
}

impl<I: TimeInstant> ButtonClassifier<I> {
    /// Creates an idle classifier with the default timing (20 / 250 / 1000 / 3000 ms).
    pub fn new() -> Self {
        Self::with_config(ButtonConfig::new())
    }

    /// Creates an idle classifier with custom timing.
    ///
    /// The configuration is not validated here.
    pub fn with_config(config: ButtonConfig<I::Duration>) -> Self {
        Self {
            config,
            last_level: true,
            down_time: None,
            up_time: None,
            dc_waiting: false,
            dc_on_up: false,
            single_ok: true,
            ignore_release: false,
            hold_fired: false,
            long_hold_fired: false,
        }
    }

    /// Feeds one sample and returns the event it completes, if any.
    ///
    /// When several events resolve on the same poll the highest priority
    /// wins: hold tiers, then double click, then click, then short-hold
    /// release.
    pub fn poll(&mut self, now: I, raw_level: bool) -> ButtonEvent {
        let pressed = !raw_level;
        let mut event = ButtonEvent::None;

        if pressed && self.last_level && self.settled_since(now, self.up_time) {
            self.accept_press(now);
        } else if !pressed && !self.last_level && self.settled_since(now, self.down_time) {
            event = self.accept_release(now);
        }

        if !pressed && event != ButtonEvent::DoubleClick && self.gap_expired(now) {
            event = ButtonEvent::Click;
            self.dc_waiting = false;
        }

        if pressed {
            if let Some(hold) = self.escalate_hold(now) {
                event = hold;
            }
        }

        self.last_level = raw_level;

        if event.is_some() {
            debug!("button event: {}", event);
        }
        event
    }

    /// Drops all gesture history and returns to idle. Configuration is kept.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
    }

    /// Returns the timing configuration.
    pub fn config(&self) -> &ButtonConfig<I::Duration> {
        &self.config
    }

    /// Returns true if the last sampled level was low.
    ///
    /// This is the raw sample; it can be true for a press that debounce
    /// rejected.
    pub fn is_pressed(&self) -> bool {
        !self.last_level
    }

    /// Returns true while a release waits for a possible second press.
    pub fn is_awaiting_second_click(&self) -> bool {
        self.dc_waiting
    }

    /// Returns the current gesture phase.
    pub fn phase(&self) -> ButtonPhase {
        if self.is_pressed() {
            if self.long_hold_fired {
                ButtonPhase::HeldLong
            } else if self.hold_fired {
                ButtonPhase::HeldShort
            } else {
                ButtonPhase::Pressed
            }
        } else if self.dc_waiting {
            ButtonPhase::AwaitingSecondClick
        } else {
            ButtonPhase::Idle
        }
    }

    /// True if the debounce period has passed since `edge` (or there is no such edge yet).
    fn settled_since(&self, now: I, edge: Option<I>) -> bool {
        edge.is_none_or(|t| now.millis_since(t) >= self.config.get_debounce_period().as_millis())
    }

    fn accept_press(&mut self, now: I) {
        trace!("press accepted");
        self.down_time = Some(now);
        self.ignore_release = false;
        self.hold_fired = false;
        self.long_hold_fired = false;
        self.single_ok = true;

        let gap = self.config.get_double_click_gap().as_millis();
        let within_gap = self.up_time.is_some_and(|t| now.millis_since(t) < gap);
        self.dc_on_up = within_gap && self.dc_waiting && !self.dc_on_up;
        self.dc_waiting = false;
    }

    fn accept_release(&mut self, now: I) -> ButtonEvent {
        trace!("release accepted");
        if self.ignore_release {
            return if self.hold_fired && !self.long_hold_fired {
                ButtonEvent::ShortHold
            } else {
                ButtonEvent::None
            };
        }

        self.up_time = Some(now);
        if self.dc_on_up {
            self.dc_on_up = false;
            self.dc_waiting = false;
            self.single_ok = false;
            ButtonEvent::DoubleClick
        } else {
            self.dc_waiting = true;
            ButtonEvent::None
        }
    }

    fn gap_expired(&self, now: I) -> bool {
        if !self.dc_waiting || self.dc_on_up || !self.single_ok {
            return false;
        }
        let gap = self.config.get_double_click_gap().as_millis();
        self.up_time.is_some_and(|t| now.millis_since(t) >= gap)
    }

    fn escalate_hold(&mut self, now: I) -> Option<ButtonEvent> {
        let held = now.millis_since(self.down_time?);
        if held < self.config.get_hold_time().as_millis() {
            return None;
        }

        let mut event = None;
        if !self.hold_fired {
            event = Some(ButtonEvent::ShortHoldDetected);
            self.ignore_release = true;
            self.dc_on_up = false;
            self.dc_waiting = false;
            self.hold_fired = true;
        }
        if held >= self.config.get_long_hold_time().as_millis() && !self.long_hold_fired {
            event = Some(ButtonEvent::LongHold);
            self.long_hold_fired = true;
        }
        event
    }
}

impl<I: TimeInstant> Default for ButtonClassifier<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{MillisDuration, MillisInstant};

    const HIGH: bool = true;
    const LOW: bool = false;

    fn at(t: u32) -> MillisInstant {
        MillisInstant(t)
    }

    #[test]
    fn starts_idle() {
        let classifier = ButtonClassifier::<MillisInstant>::new();
        assert_eq!(classifier.phase(), ButtonPhase::Idle);
        assert!(!classifier.is_pressed());
        assert_eq!(classifier.config().get_hold_time(), MillisDuration(1000));
    }

    #[test]
    fn phase_tracks_hold_tiers() {
        let mut classifier = ButtonClassifier::<MillisInstant>::new();

        assert_eq!(classifier.poll(at(0), LOW), ButtonEvent::None);
        assert_eq!(classifier.phase(), ButtonPhase::Pressed);

        assert_eq!(classifier.poll(at(1000), LOW), ButtonEvent::ShortHoldDetected);
        assert_eq!(classifier.phase(), ButtonPhase::HeldShort);

        assert_eq!(classifier.poll(at(3000), LOW), ButtonEvent::LongHold);
        assert_eq!(classifier.phase(), ButtonPhase::HeldLong);

        assert_eq!(classifier.poll(at(3100), HIGH), ButtonEvent::None);
        assert_eq!(classifier.phase(), ButtonPhase::Idle);
    }

    #[test]
    fn click_resolves_across_counter_wraparound() {
        let mut classifier = ButtonClassifier::<MillisInstant>::new();
        let start = MillisInstant(u32::MAX - 100);

        assert_eq!(classifier.poll(start, LOW), ButtonEvent::None);
        assert_eq!(classifier.poll(start.wrapping_add(50), HIGH), ButtonEvent::None);
        assert_eq!(classifier.phase(), ButtonPhase::AwaitingSecondClick);

        assert_eq!(classifier.poll(start.wrapping_add(299), HIGH), ButtonEvent::None);
        assert_eq!(classifier.poll(start.wrapping_add(300), HIGH), ButtonEvent::Click);
        assert_eq!(classifier.phase(), ButtonPhase::Idle);
    }

    #[test]
    fn hold_does_not_fire_without_an_accepted_press() {
        let mut classifier = ButtonClassifier::<MillisInstant>::new();

        // Line idles high; nothing has ever been pressed.
        for t in (0..5000).step_by(10) {
            assert_eq!(classifier.poll(at(t), HIGH), ButtonEvent::None);
        }
    }

    #[test]
    fn phase_follows_raw_level_for_rejected_press() {
        let mut classifier = ButtonClassifier::<MillisInstant>::new();
        classifier.poll(at(0), LOW);
        classifier.poll(at(50), HIGH);

        // 10 ms after the accepted release: debounce rejects this press.
        assert_eq!(classifier.poll(at(60), LOW), ButtonEvent::None);
        assert!(classifier.is_pressed());
        assert_eq!(classifier.phase(), ButtonPhase::Pressed);
        assert!(classifier.is_awaiting_second_click());
    }

    #[test]
    fn reset_discards_pending_click() {
        let mut classifier = ButtonClassifier::<MillisInstant>::new();
        classifier.poll(at(0), LOW);
        classifier.poll(at(50), HIGH);
        assert!(classifier.is_awaiting_second_click());

        classifier.reset();

        assert_eq!(classifier.phase(), ButtonPhase::Idle);
        assert_eq!(classifier.poll(at(400), HIGH), ButtonEvent::None);
    }
}
