//! Drive WS2812-style addressable LED strips over the ESP32 RMT peripheral.
//!
//! The crate is split at the hardware seam: the color model, format
//! layout, pixel buffer, and bit-timing encoder are pure `no_std` code
//! that builds and tests on the host, while the RMT transmission driver
//! behind the [`PulseTransmitter`] trait is gated on a chip feature.
//!
//! # Glossary
//!
//! - **RMT ([Remote Control Transceiver](https://docs.espressif.com/projects/esp-idf/en/latest/esp32/api-reference/peripherals/rmt.html)):**
//!   ESP32 peripheral that replays tick-precise pulse trains, used here to
//!   generate the strip's single-wire waveform without bit-banging.
//! - **Layout:** which byte position of an LED's wire word carries which
//!   color channel. Most WS2812 strips are green-first (GRB).
//! - **Reset/latch:** the long low period after a frame that makes the
//!   LEDs display what they just received.
//!
//! # Example
//!
//! ```no_run
//! # fn example<T: rmt_strip::PulseTransmitter>(transmitter: T) -> rmt_strip::Result<()> {
//! use rmt_strip::{Hsv, LedStrip, StripConfig, colors};
//!
//! let mut strip = LedStrip::<_, 30>::new(transmitter, StripConfig::default())?;
//! strip.fill(colors::BLACK);
//! strip.set_pixel(0, 255, 0, 0)?;
//! strip.set_pixel_hsv(1, Hsv::new(200, 255, 64))?;
//! strip.refresh()?;
//! # Ok(())
//! # }
//! ```
//!
//! On hardware, the transmitter is an [`rmt::RmtStripDriver`] built from
//! the `RMT` peripheral and a GPIO pin; on the host, anything implementing
//! [`PulseTransmitter`] works, which is how the crate's own tests run
//! without a chip.
#![no_std]

// At most one chip may be selected; each maps the crate onto that chip's
// esp-hal build.
#[cfg(any(
    all(feature = "esp32", feature = "esp32c3"),
    all(feature = "esp32", feature = "esp32c6"),
    all(feature = "esp32", feature = "esp32h2"),
    all(feature = "esp32", feature = "esp32s2"),
    all(feature = "esp32", feature = "esp32s3"),
    all(feature = "esp32c3", feature = "esp32c6"),
    all(feature = "esp32c3", feature = "esp32h2"),
    all(feature = "esp32c3", feature = "esp32s2"),
    all(feature = "esp32c3", feature = "esp32s3"),
    all(feature = "esp32c6", feature = "esp32h2"),
    all(feature = "esp32c6", feature = "esp32s2"),
    all(feature = "esp32c6", feature = "esp32s3"),
    all(feature = "esp32h2", feature = "esp32s2"),
    all(feature = "esp32h2", feature = "esp32s3"),
    all(feature = "esp32s2", feature = "esp32s3"),
))]
compile_error!("Enable at most one chip feature: esp32, esp32c3, esp32c6, esp32h2, esp32s2, esp32s3");

pub mod buffer;
pub mod color;
mod error;
pub mod format;
pub mod pulse;
#[cfg(any(
    feature = "esp32",
    feature = "esp32c3",
    feature = "esp32c6",
    feature = "esp32h2",
    feature = "esp32s2",
    feature = "esp32s3"
))]
pub mod rmt;
pub mod strip;

pub use crate::buffer::PixelBuffer;
pub use crate::color::{Hsv, Rgb, Rgbw, colors};
pub use crate::error::{Error, Result};
pub use crate::format::ColorLayout;
pub use crate::pulse::{LedModel, pulse_buffer_size};
pub use crate::strip::{LedStrip, PulseTransmitter, StripConfig};
