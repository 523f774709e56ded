//! The strip controller: pixel buffer, format layout, and pulse encoding
//! composed over a transmission seam.

use crate::buffer::PixelBuffer;
use crate::color::Hsv;
use crate::color::Rgbw;
use crate::error::Result;
use crate::format::{ChannelMap, ColorLayout, MAX_BYTES_PER_LED};
use crate::pulse::{LedModel, Pulse, PulsePalette};

/// Default pulse-generation clock rate (10 MHz, 100 ns ticks).
pub const RESOLUTION_HZ_DEFAULT: u32 = 10_000_000;

/// Immutable device configuration for one strip.
///
/// Fixed at construction; reconfiguring means rebuilding the strip. The
/// capacity lives in the const generic `N` of [`LedStrip`] and the data pin
/// in the transmitter, so this struct carries the protocol knobs only.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripConfig {
    /// Strip protocol variant; selects the bit timing constants.
    pub model: LedModel,
    /// Channel-to-byte-position layout.
    pub layout: ColorLayout,
    /// Invert the output signal (for inverting level shifters).
    pub invert_out: bool,
    /// Pulse-generation clock rate in Hz.
    pub resolution_hz: u32,
    /// Ask the transmitter for hardware-assisted bulk transfer resources.
    pub with_dma: bool,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            model: LedModel::Ws2812,
            layout: ColorLayout::Grb,
            invert_out: false,
            resolution_hz: RESOLUTION_HZ_DEFAULT,
            with_dma: false,
        }
    }
}

/// Transmission seam between the strip controller and the pulse hardware.
///
/// Implementations consume one frame's worth of symbols (data bits, reset,
/// no end marker, that being the transmitter's own wire convention) and
/// return once the frame has been handed to the hardware. The blocking RMT
/// implementation returns only after the frame is fully out, so the caller
/// can never mutate pixel state mid-transfer.
pub trait PulseTransmitter {
    /// Transmit one frame of pulse symbols.
    fn transmit<I>(&mut self, pulses: I) -> Result<()>
    where
        I: IntoIterator<Item = Pulse>;
}

/// A WS2812-style LED strip with `N` pixels.
///
/// Owns the pixel buffer and the transmission resource exclusively; there
/// is no internal synchronization, so sharing one strip across concurrent
/// tasks requires external serialization (in safe Rust, `&mut self` on
/// every mutating operation enforces exactly that).
///
/// ```no_run
/// # fn example<T: rmt_strip::PulseTransmitter>(transmitter: T) -> rmt_strip::Result<()> {
/// use rmt_strip::{Hsv, LedStrip, StripConfig, colors};
///
/// let mut strip = LedStrip::<_, 3>::new(transmitter, StripConfig::default())?;
/// strip.set_pixel(0, 255, 0, 0)?;
/// strip.set_pixel_hsv(1, Hsv::new(120, 255, 255))?;
/// strip.set(2, colors::BLUE)?;
/// strip.refresh()?;
/// # Ok(())
/// # }
/// ```
pub struct LedStrip<T, const N: usize> {
    transmitter: T,
    buffer: PixelBuffer<N>,
    map: ChannelMap,
    palette: PulsePalette,
}

impl<T: PulseTransmitter, const N: usize> LedStrip<T, N> {
    /// Number of LEDs on this strip.
    pub const LEN: usize = N;

    /// Build a strip controller from a transmitter and its configuration.
    ///
    /// The channel map and pulse palette are derived here, once; invalid
    /// timing configurations and custom layouts with out-of-range byte
    /// positions fail construction rather than producing a controller
    /// that garbles output or faults mid-refresh.
    pub fn new(transmitter: T, config: StripConfig) -> Result<Self> {
        let palette = PulsePalette::new(
            config.model.timing(),
            config.resolution_hz,
            config.invert_out,
        )?;
        let map = config.layout.channel_map();
        map.validate()?;
        Ok(Self {
            transmitter,
            buffer: PixelBuffer::new(),
            map,
            palette,
        })
    }

    /// Number of LEDs on this strip.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` for a zero-LED strip.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Set one pixel to an RGB color. Takes effect on the next [`refresh`](Self::refresh).
    pub fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<()> {
        self.buffer.set_rgb(index, r, g, b)
    }

    /// Set one pixel to an RGBW color.
    pub fn set_pixel_rgbw(&mut self, index: usize, r: u8, g: u8, b: u8, w: u8) -> Result<()> {
        self.buffer.set_rgbw(index, r, g, b, w)
    }

    /// Set one pixel from an HSV color (hue in degrees).
    pub fn set_pixel_hsv(&mut self, index: usize, color: Hsv) -> Result<()> {
        self.buffer.set_hsv(index, color)
    }

    /// Set one pixel from anything convertible to [`Rgbw`], such as the
    /// [`colors`](crate::colors) constants.
    pub fn set(&mut self, index: usize, color: impl Into<Rgbw>) -> Result<()> {
        self.buffer.set(index, color)
    }

    /// Read back the stored color of one pixel.
    pub fn pixel(&self, index: usize) -> Result<Rgbw> {
        self.buffer.pixel(index)
    }

    /// Set every pixel to `color`. Takes effect on the next refresh.
    pub fn fill(&mut self, color: impl Into<Rgbw>) {
        self.buffer.fill(color);
    }

    /// Set every pixel to black. Takes effect on the next refresh.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Read access to the whole pixel buffer.
    #[must_use]
    pub fn pixels(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    /// Encode the buffer and transmit it to the strip.
    ///
    /// Pixels go out in index order, each through the configured layout,
    /// each wire byte most-significant-bit first, followed by the
    /// reset/latch period. The pixel buffer is left untouched, so calling
    /// this again without intervening sets retransmits an identical frame.
    /// Transmission failures are returned, never swallowed; a dropped
    /// frame error here is the only sign an animation glitched.
    pub fn refresh(&mut self) -> Result<()> {
        let Self {
            transmitter,
            buffer,
            map,
            palette,
        } = self;
        let bytes_per_led = map.bytes_per_led();
        let map = *map;
        let palette = *palette;

        let frame = buffer
            .iter()
            .flat_map(move |pixel| {
                let mut word = [0u8; MAX_BYTES_PER_LED];
                map.encode(*pixel, &mut word);
                word.into_iter().take(bytes_per_led)
            })
            .flat_map(move |byte| palette.byte(byte))
            .chain([palette.reset()]);
        transmitter.transmit(frame)
    }

    /// Release the transmission resource.
    pub fn into_transmitter(self) -> T {
        self.transmitter
    }
}
