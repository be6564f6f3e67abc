//! Rotary encoder decoding.
//!
//! [`QuadratureDecoder`] is the pure part: it remembers the previous level of
//! pin A and, whenever A changes, compares it with pin B to pick a direction.
//! [`Encoder`] wraps it with two input pins and a running position.

use crate::types::Direction;
use embedded_hal::digital::InputPin;

/// Two-pin quadrature decoder with one sample of history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuadratureDecoder {
    last_a: bool,
}

impl QuadratureDecoder {
    /// Creates a decoder seeded with the current level of pin A.
    pub const fn new(initial_a: bool) -> Self {
        Self { last_a: initial_a }
    }

    /// Decodes one sample of both pins.
    ///
    /// | A changed | B == A | result     |
    /// |-----------|--------|------------|
    /// | no        | -      | `None`     |
    /// | yes       | yes    | `Positive` |
    /// | yes       | no     | `Negative` |
    pub fn decode(&mut self, a: bool, b: bool) -> Direction {
        let direction = if a == self.last_a {
            Direction::None
        } else if b == a {
            Direction::Positive
        } else {
            Direction::Negative
        };
        self.last_a = a;
        direction
    }

    /// Returns the level of pin A seen at the last sample.
    pub fn last_a(&self) -> bool {
        self.last_a
    }
}

/// A polled rotary encoder on two input pins.
pub struct Encoder<P: InputPin> {
    pin_a: P,
    pin_b: P,
    decoder: QuadratureDecoder,
    position: i32,
}

impl<P: InputPin> Encoder<P> {
    /// Creates an encoder, sampling pin A for the decoder's initial state.
    ///
    /// # Errors
    /// Returns the pin's error if pin A can't be read.
    pub fn new(mut pin_a: P, pin_b: P) -> Result<Self, P::Error> {
        let initial_a = pin_a.is_high()?;
        Ok(Self {
            pin_a,
            pin_b,
            decoder: QuadratureDecoder::new(initial_a),
            position: 0,
        })
    }

    /// Samples both pins and returns the step direction, if any.
    ///
    /// # Errors
    /// Returns the pin's error if either read fails; the decoder is not
    /// advanced in that case.
    pub fn poll(&mut self) -> Result<Direction, P::Error> {
        let a = self.pin_a.is_high()?;
        let b = self.pin_b.is_high()?;
        let direction = self.decoder.decode(a, b);
        if direction != Direction::None {
            self.position = self.position.wrapping_add(direction.as_i8() as i32);
            trace!("encoder step: {}", direction);
        }
        Ok(direction)
    }

    /// Net steps since construction or the last reset (wrapping).
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Zeroes the running position.
    pub fn reset_position(&mut self) {
        self.position = 0;
    }

    /// Consumes the encoder and returns its pins.
    pub fn release(self) -> (P, P) {
        (self.pin_a, self.pin_b)
    }
}
