#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonClassifier`**: Turns `(instant, raw level)` samples of one button into `ButtonEvent`s
//! - **`ButtonEvent`**: `None`, `Click`, `DoubleClick`, `ShortHoldDetected`, `ShortHold` or `LongHold`
//! - **`ButtonConfig`**: Debounce, double-click gap and the two hold tiers
//! - **`Button`**: Drives a classifier from an `embedded_hal` input pin and a `TimeSource`
//! - **`QuadratureDecoder`** / **`Encoder`**: Rotary encoder direction decoding
//! - **`ColorDrift`**: Random-walk palette drift over an RGBW pixel buffer
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Everything here is poll-driven: no interrupts, no blocking, no allocation.
//! Call `poll` / `step` from your main loop or a task at a steady cadence.

#[macro_use]
mod fmt;

pub mod time;
pub mod types;
pub mod config;
pub mod classifier;
pub mod button;
pub mod encoder;
pub mod colors;
pub mod drift;

pub use time::{MillisDuration, MillisInstant, TimeDuration, TimeInstant, TimeSource};
#[cfg(feature = "embassy")]
pub use time::EmbassyTimeSource;
pub use types::{ButtonEvent, ConfigError, Direction};
pub use config::ButtonConfig;
pub use classifier::{ButtonClassifier, ButtonPhase};
pub use button::{Button, PressedTo};
pub use encoder::{Encoder, QuadratureDecoder};
pub use colors::Rgbw;
pub use drift::{ColorDrift, DriftConfig, HueMask, Lcg, RandomSource};
