//! Format layout: which byte of the per-LED data word carries which color
//! channel.
//!
//! WS2812-family strips disagree on wire order (most are green-first), so
//! the layout is configured once per strip and applied at encode time, not
//! at pixel-set time.

use crate::color::Rgbw;
use crate::error::{Error, Result};

/// Maximum bytes one LED's data word can occupy (RGBW).
pub const MAX_BYTES_PER_LED: usize = 4;

/// Mapping of logical color channels to byte positions in the transmitted
/// per-LED data word.
///
/// Named variants cover the common strips; [`ColorLayout::Custom`] takes
/// explicit positions. A custom layout with `w: None` is a 3-component
/// layout; the white channel is never forced on callers.
///
/// Positions for the channels in use must be below the component count;
/// out-of-range positions are rejected when the map is put to use, by
/// strip construction and by encoding. Overlapping positions merely garble
/// the output and are not rejected, matching the vendor drivers this
/// models.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorLayout {
    /// Green, red, blue, the WS2812 wire order and the default.
    Grb,
    /// Green, red, blue, white (SK6812 RGBW strips).
    Grbw,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, white.
    Rgbw,
    /// Caller-supplied byte positions; `w: None` for 3-component strips.
    Custom {
        /// Byte position of the red channel.
        r: usize,
        /// Byte position of the green channel.
        g: usize,
        /// Byte position of the blue channel.
        b: usize,
        /// Byte position of the white channel, if the strip has one.
        w: Option<usize>,
    },
}

impl Default for ColorLayout {
    fn default() -> Self {
        Self::Grb
    }
}

impl ColorLayout {
    /// Derive the position table for this layout.
    #[must_use]
    pub const fn channel_map(self) -> ChannelMap {
        match self {
            Self::Grb => ChannelMap {
                r: 1,
                g: 0,
                b: 2,
                w: None,
            },
            Self::Grbw => ChannelMap {
                r: 1,
                g: 0,
                b: 2,
                w: Some(3),
            },
            Self::Rgb => ChannelMap {
                r: 0,
                g: 1,
                b: 2,
                w: None,
            },
            Self::Rgbw => ChannelMap {
                r: 0,
                g: 1,
                b: 2,
                w: Some(3),
            },
            Self::Custom { r, g, b, w } => ChannelMap { r, g, b, w },
        }
    }
}

/// Resolved channel-to-byte-position table, computed once at strip
/// construction and reused for every encode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelMap {
    /// Byte position of the red channel.
    pub r: usize,
    /// Byte position of the green channel.
    pub g: usize,
    /// Byte position of the blue channel.
    pub b: usize,
    /// Byte position of the white channel, if present.
    pub w: Option<usize>,
}

impl ChannelMap {
    /// Number of bytes one LED occupies on the wire (3 or 4).
    #[must_use]
    pub const fn bytes_per_led(&self) -> usize {
        if self.w.is_some() { 4 } else { 3 }
    }

    /// Check that every channel position fits the data word.
    ///
    /// Fails with [`Error::InvalidLayout`] on the first position at or
    /// past `bytes_per_led()`. Only custom layouts can fail; the named
    /// variants are correct by construction.
    pub fn validate(&self) -> Result<()> {
        let limit = self.bytes_per_led();
        let positions = [Some(self.r), Some(self.g), Some(self.b), self.w];
        for position in positions.into_iter().flatten() {
            if position >= limit {
                return Err(Error::InvalidLayout { position, limit });
            }
        }
        Ok(())
    }

    /// Encode one pixel into its wire bytes.
    ///
    /// Returns the filled prefix of `scratch`, `bytes_per_led()` long.
    /// Callers run [`validate`](Self::validate) first; a position past the
    /// scratch word would panic here otherwise.
    pub fn encode<'a>(&self, pixel: Rgbw, scratch: &'a mut [u8; MAX_BYTES_PER_LED]) -> &'a [u8] {
        scratch[self.r] = pixel.r;
        scratch[self.g] = pixel.g;
        scratch[self.b] = pixel.b;
        if let Some(w_pos) = self.w {
            scratch[w_pos] = pixel.w;
        }
        &scratch[..self.bytes_per_led()]
    }
}
