//! Bit-timing pulse encoding for single-wire LED protocols.
//!
//! WS2812-style strips encode each data bit as a high pulse followed by a
//! low pulse, with the two durations distinguishing a 0 from a 1, and latch
//! the frame on a long trailing low period. This module turns a strip's
//! model timing (nanoseconds) into tick-resolution pulse symbols at a
//! configured clock rate. It is pure and runs on the host; the RMT driver
//! consumes its output unchanged.

use crate::error::{Error, Result};

/// Largest duration one symbol half can carry (15-bit RMT tick field).
const MAX_TICKS: u32 = 0x7FFF;

/// Supported strip protocol variants and their bit timings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedModel {
    /// WS2812/WS2812B, the common NeoPixel (800 kHz).
    #[default]
    Ws2812,
    /// WS2811 drivers (400 kHz).
    Ws2811,
    /// SK6812, including the RGBW variants (800 kHz).
    Sk6812,
}

impl LedModel {
    /// Nanosecond bit timing for this model.
    #[must_use]
    pub const fn timing(self) -> BitTiming {
        match self {
            Self::Ws2812 => BitTiming {
                t0h_ns: 400,
                t0l_ns: 850,
                t1h_ns: 800,
                t1l_ns: 450,
                reset_ns: 280_000,
            },
            Self::Ws2811 => BitTiming {
                t0h_ns: 500,
                t0l_ns: 2_000,
                t1h_ns: 1_200,
                t1l_ns: 1_300,
                reset_ns: 280_000,
            },
            Self::Sk6812 => BitTiming {
                t0h_ns: 300,
                t0l_ns: 900,
                t1h_ns: 600,
                t1l_ns: 600,
                reset_ns: 80_000,
            },
        }
    }
}

/// Pulse durations, in nanoseconds, for one protocol variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitTiming {
    /// High time of a 0 bit.
    pub t0h_ns: u32,
    /// Low time of a 0 bit.
    pub t0l_ns: u32,
    /// High time of a 1 bit.
    pub t1h_ns: u32,
    /// Low time of a 1 bit.
    pub t1l_ns: u32,
    /// Minimum trailing low period that latches the frame.
    pub reset_ns: u32,
}

/// One transmitted symbol: two timed output levels back to back.
///
/// Field naming follows the RMT symbol layout (`level0`/`duration0` then
/// `level1`/`duration1`). The all-zero symbol is the end-of-stream marker.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    /// First output level (`true` = high).
    pub level0: bool,
    /// Duration of the first level, in resolution ticks.
    pub ticks0: u16,
    /// Second output level.
    pub level1: bool,
    /// Duration of the second level, in resolution ticks.
    pub ticks1: u16,
}

/// Precomputed symbols for a strip's bit encoding at a fixed resolution.
///
/// Built once at strip construction; encoding a frame is then a table
/// lookup per bit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulsePalette {
    zero: Pulse,
    one: Pulse,
    reset: Pulse,
}

impl PulsePalette {
    /// Convert a model's nanosecond timing into tick symbols.
    ///
    /// `resolution_hz` is the pulse-generation clock rate; `invert` flips
    /// every output level for inverted drivers. Fails with
    /// [`Error::InvalidResolution`] on a zero clock rate and
    /// [`Error::InvalidTiming`] when a bit pulse rounds to zero ticks or a
    /// duration overflows the 15-bit tick field.
    pub fn new(timing: BitTiming, resolution_hz: u32, invert: bool) -> Result<Self> {
        if resolution_hz == 0 {
            return Err(Error::InvalidResolution);
        }
        let high = !invert;
        let zero = bit_pulse(timing.t0h_ns, timing.t0l_ns, resolution_hz, high)?;
        let one = bit_pulse(timing.t1h_ns, timing.t1l_ns, resolution_hz, high)?;

        // Reset is one long low period, split across the symbol halves so
        // the full duration fits the 15-bit field at high resolutions.
        let reset_ticks = ticks(timing.reset_ns, resolution_hz);
        let half = reset_ticks / 2;
        let rest = reset_ticks - half;
        if rest > MAX_TICKS {
            return Err(Error::InvalidTiming);
        }
        let reset = Pulse {
            level0: !high,
            ticks0: half as u16,
            level1: !high,
            ticks1: rest as u16,
        };

        Ok(Self { zero, one, reset })
    }

    /// Symbol transmitted for a single data bit.
    #[must_use]
    pub fn bit(&self, is_one: bool) -> Pulse {
        if is_one { self.one } else { self.zero }
    }

    /// Symbols for one frame byte, most significant bit first.
    pub fn byte(self, byte: u8) -> impl Iterator<Item = Pulse> {
        (0..8).map(move |bit| self.bit(byte >> (7 - bit) & 1 == 1))
    }

    /// The trailing reset/latch symbol.
    #[must_use]
    pub fn reset(&self) -> Pulse {
        self.reset
    }
}

/// Number of symbols a full frame occupies: 8 per wire byte, plus the
/// reset symbol and the end marker.
///
/// Use this to size a transmitter's symbol buffer, e.g.
/// `RmtStripDriver::<_, { pulse_buffer_size(N, 3) }>`.
#[must_use]
pub const fn pulse_buffer_size(led_count: usize, bytes_per_led: usize) -> usize {
    led_count * bytes_per_led * 8 + 2
}

/// Round a nanosecond duration to ticks at `resolution_hz`.
fn ticks(ns: u32, resolution_hz: u32) -> u32 {
    let exact = u64::from(ns) * u64::from(resolution_hz);
    ((exact + 500_000_000) / 1_000_000_000) as u32
}

fn bit_pulse(high_ns: u32, low_ns: u32, resolution_hz: u32, high: bool) -> Result<Pulse> {
    let high_ticks = ticks(high_ns, resolution_hz);
    let low_ticks = ticks(low_ns, resolution_hz);
    // A zero-length half would read as a premature end marker.
    if high_ticks == 0 || low_ticks == 0 || high_ticks > MAX_TICKS || low_ticks > MAX_TICKS {
        return Err(Error::InvalidTiming);
    }
    Ok(Pulse {
        level0: high,
        ticks0: high_ticks as u16,
        level1: !high,
        ticks1: low_ticks as u16,
    })
}
