//! Random-walk color drift ("rain") over an RGBW strip.
//!
//! Each frame, every RGB channel inside the current [`HueMask`] staggers by
//! -1, 0 or +1 while staying strictly between zero and the ceiling. Channels
//! outside the mask, and white always, drain slowly toward zero. Once nothing
//! is left draining the frame is "clean" and the mask may be re-rolled, which
//! shifts the palette.
//!
//! The pixel buffer is owned by the caller's type `B` (a slice borrow, an
//! array, a `heapless::Vec`, ...). Randomness comes from any
//! [`RandomSource`]; [`Lcg`] is a small built-in generator.

use crate::colors::Rgbw;

/// Source of pseudo-random numbers for the animator.
pub trait RandomSource {
    /// Returns the next random value.
    fn next_u32(&mut self) -> u32;

    /// Returns a value in `0..n`, or `0` when `n == 0`.
    fn below(&mut self, n: u32) -> u32 {
        if n == 0 { 0 } else { self.next_u32() % n }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// 32-bit linear congruential generator (Numerical Recipes constants).
///
/// Returns the high 16 bits of the state; the low bits of an LCG cycle with
/// short periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Creates a generator. Seed from something that varies per boot, such
    /// as a free-running timer or a floating ADC pin.
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl RandomSource for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state >> 16
    }
}

/// The set of RGB channels allowed to walk. Bit 0 is red, bit 1 green,
/// bit 2 blue; white is never part of a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HueMask(u8);

impl HueMask {
    /// Red only.
    pub const RED: HueMask = HueMask(0b001);
    /// Green only.
    pub const GREEN: HueMask = HueMask(0b010);
    /// Blue only.
    pub const BLUE: HueMask = HueMask(0b100);

    /// Creates a mask, keeping only the three RGB bits.
    pub const fn from_bits(bits: u8) -> Self {
        HueMask(bits & 0b111)
    }

    /// Returns the raw mask bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if channel index `channel` (0 = R, 1 = G, 2 = B, 3 = W) walks.
    pub const fn contains(self, channel: usize) -> bool {
        channel < 3 && (self.0 >> channel) & 1 == 1
    }

    /// Rolls a new non-empty mask.
    ///
    /// Draws uniformly from the six masks `0b001..=0b110`. When the draw
    /// equals `config.excluded_mask`, it is kept only with a
    /// 1-in-`keep_excluded_odds` chance and otherwise inverted.
    pub fn pick<R: RandomSource>(rng: &mut R, config: &DriftConfig) -> Self {
        let mut bits = rng.below(6) as u8 + 1;
        if bits == config.excluded_mask.0 && rng.below(config.keep_excluded_odds) != 0 {
            bits = !bits;
        }
        Self::from_bits(bits)
    }
}

/// Tuning for [`ColorDrift`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriftConfig {
    /// 1-in-n chance per clean frame of re-rolling the hue mask.
    pub shift_odds: u32,
    /// Walking channels stay strictly below this value.
    pub ceiling: u8,
    /// 1-in-n chance per frame that a draining channel drops by one.
    pub decay_odds: u32,
    /// Mask that is usually rejected when rolled.
    pub excluded_mask: HueMask,
    /// 1-in-n chance of keeping `excluded_mask` when it is rolled.
    pub keep_excluded_odds: u32,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            shift_odds: 50,
            ceiling: 32,
            decay_odds: 6,
            excluded_mask: HueMask::GREEN,
            keep_excluded_odds: 10,
        }
    }
}

/// Per-frame random-walk animator over an externally owned RGBW buffer.
///
/// # Type Parameters
/// * `B` - Pixel buffer (e.g. `&mut [Rgbw]`, `[Rgbw; N]`)
/// * `R` - Random source
pub struct ColorDrift<B, R>
where
    B: AsRef<[Rgbw]> + AsMut<[Rgbw]>,
    R: RandomSource,
{
    pixels: B,
    rng: R,
    config: DriftConfig,
    hue_mask: HueMask,
    dirty: bool,
}

impl<B, R> ColorDrift<B, R>
where
    B: AsRef<[Rgbw]> + AsMut<[Rgbw]>,
    R: RandomSource,
{
    /// Creates an animator with the default tuning and a freshly rolled mask.
    pub fn new(pixels: B, rng: R) -> Self {
        Self::with_config(pixels, rng, DriftConfig::default())
    }

    /// Creates an animator with custom tuning and a freshly rolled mask.
    pub fn with_config(pixels: B, mut rng: R, config: DriftConfig) -> Self {
        let hue_mask = HueMask::pick(&mut rng, &config);
        Self::with_mask(pixels, rng, config, hue_mask)
    }

    /// Creates an animator starting from a given mask.
    pub fn with_mask(pixels: B, rng: R, config: DriftConfig, hue_mask: HueMask) -> Self {
        Self {
            pixels,
            rng,
            config,
            hue_mask,
            dirty: false,
        }
    }

    /// Advances one frame. Returns true while any off-mask channel is still
    /// draining.
    pub fn step(&mut self) -> bool {
        self.dirty = self.walk_pixels();
        if !self.dirty && self.rng.below(self.config.shift_odds) == 0 {
            self.hue_mask = HueMask::pick(&mut self.rng, &self.config);
            trace!("drift: new hue mask {=u8:b}", self.hue_mask.bits());
        }
        self.dirty
    }

    fn walk_pixels(&mut self) -> bool {
        let Self {
            pixels,
            rng,
            config,
            hue_mask,
            ..
        } = self;
        let ceiling = config.ceiling as i16;
        let mut dirty = false;

        let pixels: &mut [Rgbw] = pixels.as_mut();
        for pixel in pixels.iter_mut() {
            for (channel, value) in pixel.channels_mut().into_iter().enumerate() {
                if hue_mask.contains(channel) {
                    let walked = *value as i16 + rng.below(3) as i16 - 1;
                    if walked > 0 && walked < ceiling {
                        *value = walked as u8;
                    }
                } else if *value > 0 {
                    dirty = true;
                    if rng.below(config.decay_odds) == 0 {
                        *value -= 1;
                    }
                }
            }
        }
        dirty
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Rgbw) {
        self.pixels_mut().fill(color);
    }

    /// Returns the pixels, e.g. to write them out to the strip.
    pub fn pixels(&self) -> &[Rgbw] {
        self.pixels.as_ref()
    }

    /// Returns the pixels for direct editing.
    pub fn pixels_mut(&mut self) -> &mut [Rgbw] {
        self.pixels.as_mut()
    }

    /// Returns the current hue mask.
    pub fn hue_mask(&self) -> HueMask {
        self.hue_mask
    }

    /// Result of the last [`step`](Self::step).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the animator tuning.
    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Changes how often a clean frame re-rolls the mask.
    pub fn set_shift_odds(&mut self, odds: u32) {
        self.config.shift_odds = odds;
    }

    /// Consumes the animator and returns its buffer and random source.
    pub fn release(self) -> (B, R) {
        (self.pixels, self.rng)
    }
}
