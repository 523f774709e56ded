//! Blocking RMT transmission driver for ESP32-family chips.
//!
//! The RMT peripheral replays a buffer of two-level symbols with tick
//! precision, which is exactly the shape [`PulsePalette`](crate::pulse::PulsePalette)
//! produces. This module owns the channel and the symbol buffer and
//! implements [`PulseTransmitter`] over them; everything upstream of it is
//! chip-independent and host-testable.

use esp_hal::Blocking;
use esp_hal::gpio::Level;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::peripherals::RMT;
use esp_hal::rmt::{Channel, PulseCode, Rmt, Tx, TxChannelConfig, TxChannelCreator};
use esp_hal::time::Rate;

use crate::error::{Error, Result};
use crate::pulse::Pulse;
use crate::strip::{PulseTransmitter, StripConfig};

/// [`PulseTransmitter`] backed by one blocking RMT TX channel.
///
/// `S` is the symbol buffer capacity; size it with
/// [`pulse_buffer_size`](crate::pulse::pulse_buffer_size) for the strip it
/// will serve. The buffer lives inside the driver, so the driver is as
/// large as a full frame; keep it in one place rather than cloning it
/// around.
///
/// ```no_run
/// # fn example(peripherals: esp_hal::peripherals::Peripherals) -> rmt_strip::Result<()> {
/// use rmt_strip::rmt::RmtStripDriver;
/// use rmt_strip::{LedStrip, StripConfig, pulse_buffer_size};
///
/// const LED_COUNT: usize = 8;
/// const BUFFER: usize = pulse_buffer_size(LED_COUNT, 3);
///
/// let config = StripConfig::default();
/// let driver = RmtStripDriver::<BUFFER>::new(peripherals.RMT, peripherals.GPIO8, &config)?;
/// let mut strip = LedStrip::<_, LED_COUNT>::new(driver, config)?;
/// strip.set_pixel(0, 32, 0, 0)?;
/// strip.refresh()?;
/// # Ok(())
/// # }
/// ```
pub struct RmtStripDriver<'ch, const S: usize> {
    channel: Channel<'ch, Blocking, Tx>,
    buffer: [PulseCode; S],
}

impl<'ch, const S: usize> RmtStripDriver<'ch, S> {
    /// Take the whole RMT peripheral and drive one strip from channel 0.
    ///
    /// The RMT clock is set to `config.resolution_hz`, so the tick symbols
    /// the strip controller produces come out at their nominal durations.
    /// To share the peripheral across strips, configure the clock once
    /// yourself and use [`with_channel`](Self::with_channel) per strip.
    pub fn new(
        rmt: RMT<'ch>,
        pin: impl PeripheralOutput<'ch>,
        config: &StripConfig,
    ) -> Result<Self> {
        let rmt = Rmt::new(rmt, Rate::from_hz(config.resolution_hz)).map_err(Error::RmtConfig)?;
        Self::with_channel(rmt.channel0, pin, config)
    }

    /// Drive one strip from an already-created TX channel.
    ///
    /// The caller must have clocked the RMT block at `config.resolution_hz`
    /// when creating it; the channel divider is left at 1.
    pub fn with_channel<CH>(
        channel: CH,
        pin: impl PeripheralOutput<'ch>,
        config: &StripConfig,
    ) -> Result<Self>
    where
        CH: TxChannelCreator<'ch, Blocking>,
    {
        // An inverted strip idles high so the first pulse has an edge.
        let idle = if config.invert_out {
            Level::High
        } else {
            Level::Low
        };
        let mut tx_config = TxChannelConfig::default()
            .with_clk_divider(1)
            .with_idle_output_level(idle)
            .with_idle_output(true)
            .with_carrier_modulation(false);
        if config.with_dma {
            // Extra channel RAM blocks; the hardware streams them without
            // CPU involvement, which is what the flag asks for.
            tx_config = tx_config.with_memsize(2);
        }

        let channel = channel
            .configure_tx(&tx_config)
            .map_err(Error::RmtConfig)?
            .with_pin(pin);

        Ok(Self {
            channel,
            buffer: [PulseCode::default(); S],
        })
    }
}

impl<const S: usize> PulseTransmitter for RmtStripDriver<'_, S> {
    /// Stage the frame in the symbol buffer and transmit it, blocking
    /// until the last symbol (the reset period included) is on the wire.
    fn transmit<I>(&mut self, pulses: I) -> Result<()>
    where
        I: IntoIterator<Item = Pulse>,
    {
        let mut len = 0;
        for pulse in pulses {
            let slot = self.buffer.get_mut(len).ok_or(Error::BufferTooSmall {
                needed: len + 1,
                capacity: S,
            })?;
            *slot = pulse_code(pulse);
            len += 1;
        }
        let end = self.buffer.get_mut(len).ok_or(Error::BufferTooSmall {
            needed: len + 1,
            capacity: S,
        })?;
        *end = PulseCode::end_marker();
        len += 1;

        self.channel
            .reborrow()
            .transmit(&self.buffer[..len])
            .map_err(|(e, _)| Error::Transmit(e))?
            .wait()
            .map_err(|(e, _)| Error::Transmit(e))?;
        Ok(())
    }
}

fn pulse_code(pulse: Pulse) -> PulseCode {
    PulseCode::new(
        level(pulse.level0),
        pulse.ticks0,
        level(pulse.level1),
        pulse.ticks1,
    )
}

fn level(high: bool) -> Level {
    if high { Level::High } else { Level::Low }
}
