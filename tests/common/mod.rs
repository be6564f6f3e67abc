//! Shared test infrastructure for multiclick integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::convert::Infallible;
use embedded_hal::digital::{Error, ErrorKind, ErrorType, InputPin};
use multiclick::{
    ButtonClassifier, ButtonConfig, ButtonEvent, RandomSource, TimeDuration, TimeInstant,
    TimeSource,
};

pub const HIGH: bool = true;
pub const LOW: bool = false;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, millis: u64) {
        self.current_time.set(TestInstant(millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Pins
// ============================================================================

/// Input pin whose level is controlled through a shared cell
pub struct MockPin<'a> {
    level: &'a Cell<bool>,
}

impl<'a> MockPin<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level }
    }
}

impl ErrorType for MockPin<'_> {
    type Error = Infallible;
}

impl InputPin for MockPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

/// Error returned by [`FaultyPin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Input pin that fails while `failing` is set
pub struct FaultyPin<'a> {
    level: &'a Cell<bool>,
    failing: &'a Cell<bool>,
}

impl<'a> FaultyPin<'a> {
    pub fn new(level: &'a Cell<bool>, failing: &'a Cell<bool>) -> Self {
        Self { level, failing }
    }
}

impl ErrorType for FaultyPin<'_> {
    type Error = PinFault;
}

impl InputPin for FaultyPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.failing.get() {
            Err(PinFault)
        } else {
            Ok(self.level.get())
        }
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

// ============================================================================
// Scripted random source
// ============================================================================

/// Random source replaying a fixed list of values (cycling)
pub struct ScriptedRandom<'a> {
    values: &'a [u32],
    index: usize,
}

impl<'a> ScriptedRandom<'a> {
    pub fn new(values: &'a [u32]) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for ScriptedRandom<'_> {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }
}

// ============================================================================
// Millisecond-stepped button script
// ============================================================================

/// Drives a classifier one poll per millisecond and records every event
pub struct Script {
    classifier: ButtonClassifier<TestInstant>,
    next: u64,
    level: bool,
    events: heapless::Vec<(u64, ButtonEvent), 32>,
}

impl Script {
    pub fn new() -> Self {
        Self::with_config(ButtonConfig::new())
    }

    pub fn with_config(config: ButtonConfig<TestDuration>) -> Self {
        Self {
            classifier: ButtonClassifier::with_config(config),
            next: 0,
            level: HIGH,
            events: heapless::Vec::new(),
        }
    }

    fn poll(&mut self, t: u64) {
        let event = self.classifier.poll(TestInstant(t), self.level);
        if event.is_some() {
            self.events.push((t, event)).expect("event log full");
        }
        self.next = t + 1;
    }

    /// Polls every millisecond up to and including `t` at the current level
    pub fn run_until(&mut self, t: u64) -> &mut Self {
        while self.next <= t {
            self.poll(self.next);
        }
        self
    }

    /// Holds the current level until just before `t`, then switches level and polls at `t`
    pub fn level_at(&mut self, t: u64, level: bool) -> &mut Self {
        while self.next < t {
            self.poll(self.next);
        }
        self.level = level;
        self.poll(t);
        self
    }

    pub fn press_at(&mut self, t: u64) -> &mut Self {
        self.level_at(t, LOW)
    }

    pub fn release_at(&mut self, t: u64) -> &mut Self {
        self.level_at(t, HIGH)
    }

    pub fn events(&self) -> &[(u64, ButtonEvent)] {
        &self.events
    }

    pub fn classifier(&self) -> &ButtonClassifier<TestInstant> {
        &self.classifier
    }
}
