//! Event and error types shared across the adapters.

/// The outcome of one classifier poll.
///
/// `None` is by far the most common value. The other five variants are
/// mutually exclusive and each is emitted exactly once per gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Nothing happened on this poll.
    #[default]
    None,

    /// Press and release, with no second press inside the double-click gap.
    Click,

    /// Second release of two clicks inside the double-click gap.
    DoubleClick,

    /// The current press just reached the short-hold tier. The button is
    /// still down.
    ShortHoldDetected,

    /// Released after reaching the short-hold tier but before the long-hold
    /// tier.
    ShortHold,

    /// The current press just reached the long-hold tier. The button is still
    /// down and its release produces no further event.
    LongHold,
}

impl ButtonEvent {
    /// Returns the numeric event code used by the classic Arduino multi-click
    /// sketches (`0` for `None` up to `5` for `LongHold`).
    pub const fn code(self) -> u8 {
        match self {
            ButtonEvent::None => 0,
            ButtonEvent::Click => 1,
            ButtonEvent::DoubleClick => 2,
            ButtonEvent::ShortHoldDetected => 3,
            ButtonEvent::ShortHold => 4,
            ButtonEvent::LongHold => 5,
        }
    }

    /// Inverse of [`code`](Self::code).
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ButtonEvent::None),
            1 => Some(ButtonEvent::Click),
            2 => Some(ButtonEvent::DoubleClick),
            3 => Some(ButtonEvent::ShortHoldDetected),
            4 => Some(ButtonEvent::ShortHold),
            5 => Some(ButtonEvent::LongHold),
            _ => None,
        }
    }

    /// Returns true for [`ButtonEvent::None`].
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, ButtonEvent::None)
    }

    /// Returns true for every variant except [`ButtonEvent::None`].
    #[inline]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }
}

impl core::fmt::Display for ButtonEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ButtonEvent::None => "none",
            ButtonEvent::Click => "click",
            ButtonEvent::DoubleClick => "double click",
            ButtonEvent::ShortHoldDetected => "short hold detected",
            ButtonEvent::ShortHold => "short hold",
            ButtonEvent::LongHold => "long hold",
        };
        f.write_str(name)
    }
}

/// Rotation reported by a quadrature decoder for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// One step counter-clockwise.
    Negative,

    /// No movement since the last sample.
    #[default]
    None,

    /// One step clockwise.
    Positive,
}

impl Direction {
    /// Returns `-1`, `0` or `1`.
    pub const fn as_i8(self) -> i8 {
        match self {
            Direction::Negative => -1,
            Direction::None => 0,
            Direction::Positive => 1,
        }
    }
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        direction.as_i8()
    }
}

/// Timing configurations that violate the tier ordering.
///
/// Returned only by [`ButtonConfig::validate`](crate::ButtonConfig::validate).
/// The classifier itself never checks its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `hold_time` does not exceed `debounce_period`.
    HoldNotAfterDebounce,

    /// `long_hold_time` does not exceed `hold_time`.
    LongHoldNotAfterHold,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::HoldNotAfterDebounce => {
                write!(f, "hold time must be longer than the debounce period")
            }
            ConfigError::LongHoldNotAfterHold => {
                write!(f, "long hold time must be longer than the hold time")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
