//! Fixed-capacity pixel state for one LED strip.

use core::ops::Deref;

use crate::color::{Hsv, Rgbw};
use crate::error::{Error, Result};
use crate::format::{ChannelMap, MAX_BYTES_PER_LED};

/// Per-LED color state for a strip of `N` LEDs.
///
/// All entries start black. Set operations mutate exactly one entry and
/// never trigger a transmission; the buffer persists across refreshes, so a
/// refresh with no intervening sets retransmits the same frame.
///
/// The buffer derefs to `[Rgbw; N]` for read access.
#[derive(Clone, Copy, Debug)]
pub struct PixelBuffer<const N: usize>([Rgbw; N]);

impl<const N: usize> PixelBuffer<N> {
    /// Number of LEDs in this buffer.
    pub const LEN: usize = N;

    /// Create a buffer with every pixel black.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgbw::BLACK; N])
    }

    /// Overwrite the pixel at `index` with an RGBW color.
    ///
    /// Fails with [`Error::IndexOutOfRange`] and leaves the buffer
    /// unmodified when `index >= N`.
    pub fn set_rgbw(&mut self, index: usize, r: u8, g: u8, b: u8, w: u8) -> Result<()> {
        self.set(index, Rgbw::new(r, g, b, w))
    }

    /// Overwrite the pixel at `index` with an RGB color (white channel zero).
    pub fn set_rgb(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<()> {
        self.set(index, Rgbw::rgb(r, g, b))
    }

    /// Overwrite the pixel at `index` with the RGB equivalent of an HSV color.
    pub fn set_hsv(&mut self, index: usize, color: Hsv) -> Result<()> {
        self.set(index, color)
    }

    /// Overwrite the pixel at `index`.
    pub fn set(&mut self, index: usize, color: impl Into<Rgbw>) -> Result<()> {
        let slot = self
            .0
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len: N })?;
        *slot = color.into();
        Ok(())
    }

    /// Read back the stored color at `index`.
    pub fn pixel(&self, index: usize) -> Result<Rgbw> {
        self.0
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange { index, len: N })
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: impl Into<Rgbw>) {
        self.0 = [color.into(); N];
    }

    /// Set every pixel to black.
    pub fn clear(&mut self) {
        self.fill(Rgbw::BLACK);
    }

    /// Encode the whole buffer into wire bytes, index 0 first.
    ///
    /// Each LED contributes `map.bytes_per_led()` bytes at the positions the
    /// map dictates. Returns the number of bytes written, or an error (with
    /// `out` untouched) if the map has an out-of-range position or the
    /// frame does not fit.
    pub fn encode_into(&self, map: &ChannelMap, out: &mut [u8]) -> Result<usize> {
        map.validate()?;
        let bytes_per_led = map.bytes_per_led();
        let needed = N * bytes_per_led;
        if out.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                capacity: out.len(),
            });
        }
        let mut scratch = [0u8; MAX_BYTES_PER_LED];
        for (pixel, chunk) in self.0.iter().zip(out.chunks_exact_mut(bytes_per_led)) {
            chunk.copy_from_slice(map.encode(*pixel, &mut scratch));
        }
        Ok(needed)
    }
}

impl<const N: usize> Deref for PixelBuffer<N> {
    type Target = [Rgbw; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
