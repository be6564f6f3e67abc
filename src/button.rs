//! Button driver tying a GPIO input and a time source to a classifier.
//!
//! Provides [`Button`], which samples an [`embedded_hal::digital::InputPin`]
//! and a [`TimeSource`] on each [`poll`](Button::poll) and feeds the result to
//! a [`ButtonClassifier`].

use crate::classifier::ButtonClassifier;
use crate::config::ButtonConfig;
use crate::time::{TimeInstant, TimeSource};
use crate::types::ButtonEvent;
use embedded_hal::digital::InputPin;

/// Describes how the button is physically wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressedTo {
    /// Button connects the pin to ground when pressed (pull-up resistor).
    /// Pin reads LOW when pressed.
    Ground,

    /// Button connects the pin to voltage when pressed (pull-down resistor).
    /// Pin reads HIGH when pressed.
    Voltage,
}

impl PressedTo {
    /// Maps the classic `pull_up` flag to a wiring: a pulled-up pin is pressed to ground.
    pub const fn from_pull_up(pull_up: bool) -> Self {
        if pull_up {
            PressedTo::Ground
        } else {
            PressedTo::Voltage
        }
    }

    /// Converts a pin reading to the classifier's active-low convention.
    #[inline]
    const fn active_low_level(self, pin_is_high: bool) -> bool {
        match self {
            PressedTo::Ground => pin_is_high,
            PressedTo::Voltage => !pin_is_high,
        }
    }
}

/// A polled button producing click / double-click / hold events.
///
/// Configure the pin's pull resistor through your HAL to match `pull_up`;
/// this driver only decides which level means "pressed".
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `P` - Input pin type
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct Button<'t, P: InputPin, I: TimeInstant, T: TimeSource<I>> {
    pin: P,
    time_source: &'t T,
    pressed_to: PressedTo,
    classifier: ButtonClassifier<I>,
}

impl<'t, P: InputPin, I: TimeInstant, T: TimeSource<I>> Button<'t, P, I, T> {
    /// Creates a button with the default timing.
    ///
    /// `pull_up = true` means the switch pulls the pin to ground when pressed.
    pub fn new(pin: P, time_source: &'t T, pull_up: bool) -> Self {
        Self::with_config(pin, time_source, pull_up, ButtonConfig::new())
    }

    /// Creates a button with custom timing.
    pub fn with_config(
        pin: P,
        time_source: &'t T,
        pull_up: bool,
        config: ButtonConfig<I::Duration>,
    ) -> Self {
        Self {
            pin,
            time_source,
            pressed_to: PressedTo::from_pull_up(pull_up),
            classifier: ButtonClassifier::with_config(config),
        }
    }

    /// Samples the pin and the clock and returns the resulting event.
    ///
    /// # Errors
    /// Returns the pin's error if the read fails. The classifier is not
    /// advanced in that case.
    pub fn poll(&mut self) -> Result<ButtonEvent, P::Error> {
        let pin_is_high = self.pin.is_high()?;
        let level = self.pressed_to.active_low_level(pin_is_high);
        let now = self.time_source.now();
        Ok(self.classifier.poll(now, level))
    }

    /// Returns true if the button was down at the last successful poll.
    pub fn is_pressed(&self) -> bool {
        self.classifier.is_pressed()
    }

    /// Returns how the button is wired.
    pub fn pressed_to(&self) -> PressedTo {
        self.pressed_to
    }

    /// Returns the underlying classifier.
    pub fn classifier(&self) -> &ButtonClassifier<I> {
        &self.classifier
    }

    /// Consumes the button and returns its pin.
    pub fn release(self) -> P {
        self.pin
    }
}
